use std::collections::BTreeMap;

use urlencoding::encode;

use crate::types::search_options::{PlaceTypeFilter, SearchBias};

/// Query parameters keyed by name. Values are stored already percent-encoded
/// and are never encoded again when the query string is assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<&'static str, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes `value` and stores it under `name`.
    pub fn insert(&mut self, name: &'static str, value: &str) {
        self.0.insert(name, encode(value).into_owned());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// `name=value` pairs joined by `&`, in ascending name order.
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<String>>()
            .join("&")
    }
}

pub fn build_autocomplete_params(
    input: &str,
    place_type: PlaceTypeFilter,
    bias: &SearchBias,
    api_key: &str,
) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert("input", input);
    params.insert("types", place_type.as_token());
    params.insert("key", api_key);

    if let Some(coordinate) = bias.valid_coordinate() {
        params.insert(
            "location",
            &format!("{},{}", coordinate.lat, coordinate.lng),
        );

        if bias.radius_meters > 0.0 {
            params.insert("radius", &bias.radius_meters.to_string());
        }

        if bias.strict_bounds {
            params.insert("strictbounds", "true");
        }
    }

    params
}

pub fn build_details_params(place_id: &str, api_key: &str) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert("placeid", place_id);
    params.insert("key", api_key);
    params
}
