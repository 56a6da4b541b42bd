use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient::{lenient, lenient_vec};

#[derive(Serialize, Deserialize, Default)]
pub struct GoogleAutocompleteResponsePredictionStructuredFormatting {
    #[serde(default, deserialize_with = "lenient")]
    pub main_text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub secondary_text: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
pub struct GoogleAutocompleteResponsePredictionTerm {
    #[serde(default, deserialize_with = "lenient")]
    pub value: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
pub struct GoogleAutocompleteResponsePrediction {
    #[serde(default, deserialize_with = "lenient")]
    pub place_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub structured_formatting: Option<GoogleAutocompleteResponsePredictionStructuredFormatting>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub terms: Vec<GoogleAutocompleteResponsePredictionTerm>,
}

/// Predictions stay untyped here so one malformed record can be handled on
/// its own by the mapper.
#[derive(Deserialize)]
pub struct GoogleAutocompleteResponse {
    pub predictions: Vec<Value>,
}
