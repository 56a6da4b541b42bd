use std::sync::Arc;

use axum::{routing::get, Router};
use thiserror::Error;
use tower_http::cors::CorsLayer;

use crate::{
    routes::apply_routes,
    services::{
        autocomplete_session::{AutocompleteSession, SessionError},
        maps_client::{
            http_transport::{ReqwestTransport, TracingActivityObserver},
            maps_service::MapsService,
        },
    },
    types::app_state::AppState,
    utils::app_config::AppConfig,
};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error(transparent)]
    Session(#[from] SessionError),
}

pub fn build_session(config: &AppConfig) -> Result<AutocompleteSession, StartupError> {
    let transport = ReqwestTransport::new(config.request_timeout)?;
    let maps_service = MapsService::new(Arc::new(transport), config.request_timeout)
        .with_observer(Arc::new(TracingActivityObserver));

    Ok(AutocompleteSession::new(config.session_config(), maps_service)?)
}

pub fn gen_app(session: Arc<AutocompleteSession>) -> Router {
    let cors_middleware = CorsLayer::new();
    let state = AppState { session };

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .with_state(state)
}

// basic handler that responds with a static string
async fn root() -> &'static str {
    "Hello, World!"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub google_server: mockito::ServerGuard,
}

#[cfg(test)]
pub fn gen_app_for_host(host: &str) -> Router {
    let config = AppConfig::from_lookup(|name| match name {
        "GOOGLE_MAPS_API_KEY" => Some("key".to_string()),
        "GOOGLE_MAPS_HOST" => Some(host.to_string()),
        "REQUEST_TIMEOUT_SECS" => Some("2".to_string()),
        _ => None,
    })
    .unwrap();

    gen_app(Arc::new(build_session(&config).unwrap()))
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let google_server = mockito::Server::new_async().await;

    MockApp {
        app: gen_app_for_host(&google_server.url()),
        google_server,
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn hello_world() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn empty_api_key_is_rejected_at_startup() {
        let mut config = AppConfig::from_lookup(|name| match name {
            "GOOGLE_MAPS_API_KEY" => Some("key".to_string()),
            _ => None,
        })
        .unwrap();
        config.api_key = String::new();

        assert!(matches!(
            build_session(&config),
            Err(StartupError::Session(SessionError::MissingApiKey))
        ));
    }
}
