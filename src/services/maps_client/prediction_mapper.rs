use serde_json::{Map, Value};
use tracing::warn;

use super::types::{
    google_autocomplete_response::{GoogleAutocompleteResponse, GoogleAutocompleteResponsePrediction},
    maps_service_error::{ApiError, ApiResult},
};
use crate::types::place::PlaceSummary;

/// Maps the `predictions` array of an autocomplete response.
pub fn map_autocomplete_response(json: Map<String, Value>) -> ApiResult<Vec<PlaceSummary>> {
    let body = serde_json::from_value::<GoogleAutocompleteResponse>(Value::Object(json))
        .map_err(|e| ApiError::Parse(format!("Invalid predictions: {}", e)))?;

    Ok(map_predictions(body.predictions))
}

/// One summary per prediction, in input order. Missing fields become empty
/// strings; a malformed record yields an empty summary instead of failing
/// the batch.
pub fn map_predictions(predictions: Vec<Value>) -> Vec<PlaceSummary> {
    predictions
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let prediction = serde_json::from_value::<GoogleAutocompleteResponsePrediction>(p)
                .unwrap_or_else(|e| {
                    warn!("Malformed prediction at index {}: {}", i, e);
                    GoogleAutocompleteResponsePrediction::default()
                });

            map_prediction(prediction)
        })
        .collect()
}

fn map_prediction(prediction: GoogleAutocompleteResponsePrediction) -> PlaceSummary {
    let id = prediction.place_id.unwrap_or_default();

    let (main_text, secondary_text) = match prediction.structured_formatting {
        Some(f) => (
            f.main_text.unwrap_or_default(),
            f.secondary_text.unwrap_or_default(),
        ),
        None => {
            let mut terms = prediction.terms.into_iter().filter_map(|t| t.value);
            let main_text = terms.next().unwrap_or_default();
            (main_text, terms.collect::<Vec<String>>().join(","))
        }
    };

    PlaceSummary {
        id,
        main_text,
        secondary_text,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_array() {
        assert!(map_predictions(vec![]).is_empty());
    }

    #[test]
    fn keeps_input_order() {
        let predictions = vec![
            json!({"place_id": "a", "structured_formatting": {"main_text": "A", "secondary_text": "One"}}),
            json!({"place_id": "b", "structured_formatting": {"main_text": "B", "secondary_text": "Two"}}),
            json!({"place_id": "c", "structured_formatting": {"main_text": "C", "secondary_text": "Three"}}),
        ];

        let places = map_predictions(predictions);

        assert_eq!(
            places.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
        assert_eq!(places[1].main_text, "B");
        assert_eq!(places[1].secondary_text, "Two");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let places = map_predictions(vec![
            json!({"structured_formatting": {"main_text": "No id"}}),
            json!({"place_id": "x"}),
        ]);

        assert_eq!(places.len(), 2);
        assert_eq!(places[0], PlaceSummary {
            id: String::new(),
            main_text: "No id".to_string(),
            secondary_text: String::new(),
        });
        assert_eq!(places[1], PlaceSummary::from_id("x"));
    }

    #[test]
    fn malformed_record_does_not_abort_batch() {
        let places = map_predictions(vec![
            json!(42),
            json!({"place_id": 7, "structured_formatting": {"main_text": "Kept", "secondary_text": null}}),
            json!({"place_id": "ok", "structured_formatting": "oops"}),
        ]);

        assert_eq!(places.len(), 3);
        assert_eq!(places[0], PlaceSummary::from_id(""));
        assert_eq!(places[1].id, "");
        assert_eq!(places[1].main_text, "Kept");
        assert_eq!(places[2], PlaceSummary::from_id("ok"));
    }

    #[test]
    fn falls_back_to_terms() {
        let places = map_predictions(vec![json!({
            "place_id": "p",
            "terms": [{"value": "Main St"}, {"value": "Springfield"}, {"offset": 3}, {"value": "USA"}]
        })]);

        assert_eq!(places[0].main_text, "Main St");
        assert_eq!(places[0].secondary_text, "Springfield,USA");
    }

    #[test]
    fn response_without_predictions_is_parse_error() {
        let json = json!({"status": "OK"}).as_object().unwrap().clone();
        assert!(matches!(map_autocomplete_response(json), Err(ApiError::Parse(_))));

        let json = json!({"predictions": {}}).as_object().unwrap().clone();
        assert!(matches!(map_autocomplete_response(json), Err(ApiError::Parse(_))));
    }
}
