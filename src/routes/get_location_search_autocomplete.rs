use crate::{
    services::autocomplete_session::{QueryOutcome, ResultSet},
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetLocationSearchAutocompletePayload {
    #[serde(default)]
    #[validate(length(max = 256, message = "Must be at most 256 characters"))]
    pub search: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetLocationSearchAutocompleteResponseDataPrediction {
    pub main_text: String,
    pub secondary_text: String,
    pub place_id: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetLocationSearchAutocompleteResponseData {
    pub sequence: u64,
    pub query: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub predictions: Vec<GetLocationSearchAutocompleteResponseDataPrediction>,
}

#[derive(Serialize, Deserialize)]
pub struct GetLocationSearchAutocompleteResponse {
    pub data: GetLocationSearchAutocompleteResponseData,
}

impl From<ResultSet> for GetLocationSearchAutocompleteResponse {
    fn from(results: ResultSet) -> Self {
        GetLocationSearchAutocompleteResponse {
            data: GetLocationSearchAutocompleteResponseData {
                sequence: results.sequence,
                query: results.query,
                updated_at: results.updated_at,
                predictions: results
                    .places
                    .into_iter()
                    .map(|p| GetLocationSearchAutocompleteResponseDataPrediction {
                        main_text: p.main_text,
                        secondary_text: p.secondary_text,
                        place_id: p.id,
                    })
                    .collect(),
            },
        }
    }
}

#[cfg_attr(test, debug_handler)]
pub async fn get_location_search_autocomplete(
    State(state): State<AppState>,
    ValidatedQuery(GetLocationSearchAutocompletePayload { search }): ValidatedQuery<
        GetLocationSearchAutocompletePayload,
    >,
) -> Result<Response, AppError> {
    let outcome = state.session.spawn_query(search).await.map_err(|e| {
        error!("Autocomplete query task failed: {}", e);
        AppError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    })?;

    if let QueryOutcome::Failed(e) = outcome {
        error!("Failed to fetch location search autocomplete: {}", e);
        return Err(e.into());
    }

    Ok(Json(GetLocationSearchAutocompleteResponse::from(
        state.session.results(),
    ))
    .into_response())
}
