use std::{sync::Arc, time::Duration};

use serde_json::{Map, Value};
use tracing::debug;

use super::{
    http_transport::{HttpTransport, NetworkActivityObserver, NoopActivityObserver},
    query_params::QueryParams,
    types::maps_service_error::{ApiError, ApiResult},
};

pub const AUTOCOMPLETE_PATH: &str = "/maps/api/place/autocomplete/json";
pub const DETAILS_PATH: &str = "/maps/api/place/details/json";

#[derive(Clone)]
pub struct MapsService {
    transport: Arc<dyn HttpTransport>,
    observer: Arc<dyn NetworkActivityObserver>,
    timeout: Duration,
}

impl MapsService {
    pub fn new(transport: Arc<dyn HttpTransport>, timeout: Duration) -> Self {
        Self {
            transport,
            observer: Arc::new(NoopActivityObserver),
            timeout,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn NetworkActivityObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// GETs `base_url` with `params` and returns the decoded JSON object.
    ///
    /// Failures are classified in a fixed order: no response, non-200 status,
    /// body that is not a JSON object, then a `status` field other than `"OK"`.
    pub async fn fetch(&self, base_url: &str, params: &QueryParams) -> ApiResult<Map<String, Value>> {
        let url = format!("{}?{}", base_url, params.to_query_string());
        debug!("GET {}", base_url);

        let resp = match tokio::time::timeout(self.timeout, self.transport.get(&url)).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => return Err(ApiError::Transport(e)),
            Err(_) => {
                return Err(ApiError::Transport(format!(
                    "Request timed out after {:?}",
                    self.timeout
                )))
            }
        };

        if resp.status != 200 {
            return Err(ApiError::HttpStatus(resp.status));
        }

        let json = match serde_json::from_slice::<Value>(&resp.body) {
            Ok(Value::Object(json)) => json,
            Ok(_) => return Err(ApiError::Parse("response is not a JSON object".to_string())),
            Err(e) => return Err(ApiError::Parse(e.to_string())),
        };

        match json.get("status") {
            None => {}
            Some(Value::String(status)) if status == "OK" => {}
            Some(Value::String(status)) => return Err(ApiError::ApiStatus(status.clone())),
            Some(other) => return Err(ApiError::ApiStatus(other.to_string())),
        }

        self.observer.network_activity_ended();

        Ok(json)
    }
}
