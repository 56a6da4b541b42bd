use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Performs a GET request. An `Err` means no response was obtained at all.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, String>;
}

/// Told when a request has completed successfully.
pub trait NetworkActivityObserver: Send + Sync {
    fn network_activity_ended(&self);
}

pub struct NoopActivityObserver;

impl NetworkActivityObserver for NoopActivityObserver {
    fn network_activity_ended(&self) {}
}

pub struct TracingActivityObserver;

impl NetworkActivityObserver for TracingActivityObserver {
    fn network_activity_ended(&self) {
        debug!("Network activity ended");
    }
}

#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, String> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        let status = resp.status().as_u16();
        if status != 200 {
            return Ok(HttpResponse {
                status,
                body: Vec::new(),
            });
        }

        // A failed body read still counts as a response; the empty body is
        // rejected later as unparseable.
        let body = match resp.bytes().await {
            Ok(body) => body.to_vec(),
            Err(e) => {
                warn!("Failed to get response body: {}", e);
                Vec::new()
            }
        };

        Ok(HttpResponse { status, body })
    }
}
