use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::place::Coordinate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceTypeFilter {
    #[default]
    All,
    Geocode,
    Address,
    Establishment,
    Regions,
    Cities,
}

impl PlaceTypeFilter {
    /// The value sent as the `types` query parameter.
    pub fn as_token(&self) -> &'static str {
        match self {
            PlaceTypeFilter::All => "",
            PlaceTypeFilter::Geocode => "geocode",
            PlaceTypeFilter::Address => "address",
            PlaceTypeFilter::Establishment => "establishment",
            PlaceTypeFilter::Regions => "(regions)",
            PlaceTypeFilter::Cities => "(cities)",
        }
    }
}

impl fmt::Display for PlaceTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for PlaceTypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" | "" => Ok(PlaceTypeFilter::All),
            "geocode" => Ok(PlaceTypeFilter::Geocode),
            "address" => Ok(PlaceTypeFilter::Address),
            "establishment" => Ok(PlaceTypeFilter::Establishment),
            "regions" => Ok(PlaceTypeFilter::Regions),
            "cities" => Ok(PlaceTypeFilter::Cities),
            other => Err(format!("unknown place type: {}", other)),
        }
    }
}

/// Geographic hint narrowing autocomplete results. Radius and strict bounds
/// only take effect together with a valid coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchBias {
    pub coordinate: Option<Coordinate>,
    pub radius_meters: f64,
    pub strict_bounds: bool,
}

impl SearchBias {
    pub fn around(coordinate: Coordinate, radius_meters: f64) -> Self {
        Self {
            coordinate: Some(coordinate),
            radius_meters,
            strict_bounds: false,
        }
    }

    pub fn strict(mut self) -> Self {
        self.strict_bounds = true;
        self
    }

    /// The bias coordinate, if present and a valid geographic point.
    pub fn valid_coordinate(&self) -> Option<Coordinate> {
        self.coordinate.filter(Coordinate::is_valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_tokens() {
        assert_eq!(PlaceTypeFilter::All.as_token(), "");
        assert_eq!(PlaceTypeFilter::Geocode.as_token(), "geocode");
        assert_eq!(PlaceTypeFilter::Address.as_token(), "address");
        assert_eq!(PlaceTypeFilter::Establishment.as_token(), "establishment");
        assert_eq!(PlaceTypeFilter::Regions.as_token(), "(regions)");
        assert_eq!(PlaceTypeFilter::Cities.as_token(), "(cities)");
        assert_eq!(PlaceTypeFilter::Cities.to_string(), "(cities)");
    }

    #[test]
    fn filter_from_config_name() {
        assert_eq!("Regions".parse::<PlaceTypeFilter>(), Ok(PlaceTypeFilter::Regions));
        assert_eq!("all".parse::<PlaceTypeFilter>(), Ok(PlaceTypeFilter::All));
        assert!("(regions)".parse::<PlaceTypeFilter>().is_err());
    }

    #[test]
    fn invalid_coordinate_is_dropped() {
        let bias = SearchBias::around(Coordinate::new(120.0, 0.0), 500.0);
        assert_eq!(bias.valid_coordinate(), None);
        assert_eq!(SearchBias::default().valid_coordinate(), None);
    }
}
