use serde::{Deserialize, Serialize};

use super::lenient::{lenient, lenient_vec};

#[derive(Serialize, Deserialize)]
pub struct GooglePlaceDetailsLocation {
    #[serde(default, deserialize_with = "lenient")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub lng: Option<f64>,
}

#[derive(Serialize, Deserialize)]
pub struct GooglePlaceDetailsGeometry {
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<GooglePlaceDetailsLocation>,
}

#[derive(Serialize, Deserialize)]
pub struct GooglePlaceDetailsAddressComponent {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub types: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub long_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_name: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct GooglePlaceDetailsResult {
    #[serde(default, deserialize_with = "lenient")]
    pub formatted_address: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub formatted_phone_number: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub geometry: Option<GooglePlaceDetailsGeometry>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub address_components: Vec<GooglePlaceDetailsAddressComponent>,
}

#[derive(Serialize, Deserialize)]
pub struct GooglePlaceDetailsResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub result: Option<GooglePlaceDetailsResult>,
}
