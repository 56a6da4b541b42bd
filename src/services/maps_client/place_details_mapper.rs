use serde_json::{Map, Value};

use super::types::{
    google_place_details_response::{
        GooglePlaceDetailsAddressComponent, GooglePlaceDetailsGeometry, GooglePlaceDetailsResponse,
    },
    maps_service_error::{ApiError, ApiResult},
};
use crate::types::place::{Coordinate, PlaceDetails};

#[derive(Clone, Copy)]
enum NameForm {
    Long,
    Short,
}

/// First component tagged with `type_tag` wins. A component that matches but
/// lacks the requested form leaves the field absent.
fn component(
    components: &[GooglePlaceDetailsAddressComponent],
    type_tag: &str,
    form: NameForm,
) -> Option<String> {
    let c = components
        .iter()
        .find(|c| c.types.iter().any(|t| t == type_tag))?;

    match form {
        NameForm::Long => c.long_name.clone(),
        NameForm::Short => c.short_name.clone(),
    }
}

fn coordinate(geometry: Option<GooglePlaceDetailsGeometry>) -> Option<Coordinate> {
    let location = geometry?.location?;
    Some(Coordinate::new(location.lat?, location.lng?))
}

pub fn map_place_details(json: Map<String, Value>) -> ApiResult<PlaceDetails> {
    let raw = Value::Object(json);
    let body = serde_json::from_value::<GooglePlaceDetailsResponse>(raw.clone())
        .map_err(|e| ApiError::Parse(e.to_string()))?;

    let result = body
        .result
        .ok_or_else(|| ApiError::Parse("Missing result".to_string()))?;
    let formatted_address = result
        .formatted_address
        .ok_or_else(|| ApiError::Parse("Missing formatted_address".to_string()))?;

    let components = &result.address_components;

    Ok(PlaceDetails {
        formatted_address,
        name: result.name,
        phone_number: result.formatted_phone_number,
        street_number: component(components, "street_number", NameForm::Short),
        route: component(components, "route", NameForm::Short),
        postal_code: component(components, "postal_code", NameForm::Long),
        country: component(components, "country", NameForm::Long),
        country_code: component(components, "country", NameForm::Short),
        locality: component(components, "locality", NameForm::Long),
        sub_locality: component(components, "sublocality", NameForm::Long),
        administrative_area: component(components, "administrative_area_level_1", NameForm::Long),
        administrative_area_code: component(
            components,
            "administrative_area_level_1",
            NameForm::Short,
        ),
        sub_administrative_area: component(
            components,
            "administrative_area_level_2",
            NameForm::Long,
        ),
        coordinate: coordinate(result.geometry),
        raw,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn map(value: Value) -> ApiResult<PlaceDetails> {
        map_place_details(value.as_object().unwrap().clone())
    }

    #[test]
    fn maps_street_route_and_coordinate() {
        let details = map(json!({"result":{
            "formatted_address":"1 Infinite Loop, Cupertino, CA",
            "address_components":[
                {"types":["street_number"],"short_name":"1","long_name":"1"},
                {"types":["route"],"short_name":"Infinite Loop","long_name":"Infinite Loop"}
            ],
            "geometry":{"location":{"lat":37.33,"lng":-122.03}}
        }}))
        .unwrap();

        assert_eq!(details.street_number.as_deref(), Some("1"));
        assert_eq!(details.route.as_deref(), Some("Infinite Loop"));
        assert_eq!(details.coordinate, Some(Coordinate::new(37.33, -122.03)));
        assert_eq!(details.formatted_address, "1 Infinite Loop, Cupertino, CA");
        assert_eq!(details.locality, None);
        assert_eq!(details.name, None);
    }

    #[test]
    fn long_and_short_forms() {
        let details = map(json!({"result":{
            "formatted_address":"Mountain View, CA 94043, USA",
            "name":"Googleplex",
            "formatted_phone_number":"(650) 253-0000",
            "address_components":[
                {"types":["route"],"short_name":"Amphitheatre Pkwy","long_name":"Amphitheatre Parkway"},
                {"types":["locality","political"],"short_name":"MV","long_name":"Mountain View"},
                {"types":["sublocality","political"],"short_name":"N","long_name":"North Bayshore"},
                {"types":["administrative_area_level_2","political"],"short_name":"SCC","long_name":"Santa Clara County"},
                {"types":["administrative_area_level_1","political"],"short_name":"CA","long_name":"California"},
                {"types":["country","political"],"short_name":"US","long_name":"United States"},
                {"types":["postal_code"],"short_name":"94043-x","long_name":"94043"}
            ]
        }}))
        .unwrap();

        assert_eq!(details.name.as_deref(), Some("Googleplex"));
        assert_eq!(details.phone_number.as_deref(), Some("(650) 253-0000"));
        assert_eq!(details.route.as_deref(), Some("Amphitheatre Pkwy"));
        assert_eq!(details.locality.as_deref(), Some("Mountain View"));
        assert_eq!(details.sub_locality.as_deref(), Some("North Bayshore"));
        assert_eq!(details.sub_administrative_area.as_deref(), Some("Santa Clara County"));
        assert_eq!(details.administrative_area.as_deref(), Some("California"));
        assert_eq!(details.administrative_area_code.as_deref(), Some("CA"));
        assert_eq!(details.country.as_deref(), Some("United States"));
        assert_eq!(details.country_code.as_deref(), Some("US"));
        assert_eq!(details.postal_code.as_deref(), Some("94043"));
        assert_eq!(details.coordinate, None);
    }

    #[test]
    fn first_match_wins() {
        let details = map(json!({"result":{
            "formatted_address":"x",
            "address_components":[
                {"types":["political","locality"],"long_name":"First"},
                {"types":["locality"],"long_name":"Second"},
                {"types":["route"],"long_name":"Long only"}
            ]
        }}))
        .unwrap();

        assert_eq!(details.locality.as_deref(), Some("First"));
        assert_eq!(details.route, None);
    }

    #[test]
    fn partial_or_non_numeric_geometry_has_no_coordinate() {
        let details = map(json!({"result":{
            "formatted_address":"x",
            "geometry":{"location":{"lat":37.33}}
        }}))
        .unwrap();
        assert_eq!(details.coordinate, None);

        let details = map(json!({"result":{
            "formatted_address":"x",
            "geometry":{"location":{"lat":"37.33","lng":-122.03}}
        }}))
        .unwrap();
        assert_eq!(details.coordinate, None);
    }

    #[test]
    fn missing_result_or_address_fails() {
        assert!(matches!(map(json!({"status":"OK"})), Err(ApiError::Parse(_))));
        assert!(matches!(map(json!({"result":[]})), Err(ApiError::Parse(_))));
        assert!(matches!(
            map(json!({"result":{"name":"No address"}})),
            Err(ApiError::Parse(_))
        ));
    }

    #[test]
    fn keeps_raw_response() {
        let details = map(json!({"status":"OK","result":{"formatted_address":"x","url":"https://maps.google.com/?cid=1"}}))
            .unwrap();

        assert_eq!(details.raw["result"]["url"], "https://maps.google.com/?cid=1");
    }
}
