use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude in [-90, 90] and longitude in [-180, 180]. NaN is never valid.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// One autocomplete suggestion. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceSummary {
    pub id: String,
    pub main_text: String,
    pub secondary_text: String,
}

impl PlaceSummary {
    /// A summary known only by its place id, used when a caller selects an id
    /// that is not part of the current result set.
    pub fn from_id(id: &str) -> Self {
        Self {
            id: id.to_string(),
            main_text: String::new(),
            secondary_text: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceDetails {
    pub formatted_address: String,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub street_number: Option<String>,
    pub route: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub locality: Option<String>,
    pub sub_locality: Option<String>,
    pub administrative_area: Option<String>,
    pub administrative_area_code: Option<String>,
    pub sub_administrative_area: Option<String>,
    pub coordinate: Option<Coordinate>,

    /// The full details response as returned by the API.
    #[serde(skip)]
    pub raw: serde_json::Value,
}

impl fmt::Display for PlaceDetails {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Place: {}", self.name.as_deref().unwrap_or("-"))?;
        writeln!(f, "Address: {}", self.formatted_address)?;
        match self.coordinate {
            Some(c) => writeln!(f, "Coordinate: ({}, {})", c.lat, c.lng)?,
            None => writeln!(f, "Coordinate: -")?,
        }
        write!(f, "Phone No.: {}", self.phone_number.as_deref().unwrap_or("-"))
    }
}
