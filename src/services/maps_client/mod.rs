pub mod http_transport;
pub mod maps_service;
pub mod place_details_mapper;
pub mod prediction_mapper;
pub mod query_params;
pub mod types;
