pub mod autocomplete_session;
pub mod maps_client;
