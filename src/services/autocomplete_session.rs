use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

use super::maps_client::{
    maps_service::{MapsService, AUTOCOMPLETE_PATH, DETAILS_PATH},
    place_details_mapper::map_place_details,
    prediction_mapper::map_autocomplete_response,
    query_params::{build_autocomplete_params, build_details_params},
    types::maps_service_error::{ApiError, ApiResult},
};
use crate::types::{
    place::{PlaceDetails, PlaceSummary},
    search_options::{PlaceTypeFilter, SearchBias},
};

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub api_key: String,
    pub host: String,
    pub place_type: PlaceTypeFilter,
    pub bias: SearchBias,
}

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("Provide your API key")]
    MissingApiKey,
}

/// The most recently delivered predictions and the query sequence they answer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub sequence: u64,
    pub query: String,
    pub places: Vec<PlaceSummary>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, PartialEq)]
pub enum QueryOutcome {
    Cleared,
    Updated(usize),
    /// A newer query was issued before this one completed; its results were dropped.
    Stale,
    Cancelled,
    Failed(ApiError),
}

pub struct AutocompleteSession {
    config: SessionConfig,
    maps_service: MapsService,
    issued: AtomicU64,
    results: watch::Sender<ResultSet>,
    cancel: CancellationToken,
}

impl AutocompleteSession {
    pub fn new(config: SessionConfig, maps_service: MapsService) -> Result<Self, SessionError> {
        if config.api_key.is_empty() {
            return Err(SessionError::MissingApiKey);
        }

        let (results, _) = watch::channel(ResultSet::default());

        Ok(Self {
            config,
            maps_service,
            issued: AtomicU64::new(0),
            results,
            cancel: CancellationToken::new(),
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Receives every result set the session delivers.
    pub fn subscribe_results(&self) -> watch::Receiver<ResultSet> {
        self.results.subscribe()
    }

    pub fn results(&self) -> ResultSet {
        self.results.borrow().clone()
    }

    pub fn find_place(&self, place_id: &str) -> Option<PlaceSummary> {
        self.results
            .borrow()
            .places
            .iter()
            .find(|p| p.id == place_id)
            .cloned()
    }

    fn issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Replaces the stored set only if `sequence` is still the latest issued.
    fn publish(&self, sequence: u64, query: &str, places: Vec<PlaceSummary>) -> bool {
        let next = ResultSet {
            sequence,
            query: query.to_string(),
            places,
            updated_at: Some(Utc::now()),
        };

        self.results.send_if_modified(|current| {
            if self.issued.load(Ordering::SeqCst) != sequence {
                return false;
            }
            *current = next;
            true
        })
    }

    pub async fn on_query_text_changed(&self, text: &str) -> QueryOutcome {
        let sequence = self.issue();

        if text.is_empty() {
            self.publish(sequence, text, Vec::new());
            return QueryOutcome::Cleared;
        }

        debug!("Dispatching autocomplete query #{}", sequence);

        let params = build_autocomplete_params(
            text,
            self.config.place_type,
            &self.config.bias,
            &self.config.api_key,
        );
        let url = format!("{}{}", self.config.host, AUTOCOMPLETE_PATH);

        let res = tokio::select! {
            _ = self.cancel.cancelled() => return QueryOutcome::Cancelled,
            res = self.maps_service.fetch(&url, &params) => res.and_then(map_autocomplete_response),
        };

        match res {
            Ok(places) => {
                let count = places.len();
                if self.publish(sequence, text, places) {
                    QueryOutcome::Updated(count)
                } else {
                    warn!("Discarding stale results for query #{}", sequence);
                    QueryOutcome::Stale
                }
            }
            Err(e) => {
                error!("Failed to fetch autocomplete predictions: {}", e);
                QueryOutcome::Failed(e)
            }
        }
    }

    /// Runs `on_query_text_changed` on a new task.
    pub fn spawn_query(self: &Arc<Self>, text: String) -> JoinHandle<QueryOutcome> {
        let session = Arc::clone(self);
        tokio::spawn(async move { session.on_query_text_changed(&text).await })
    }

    pub async fn fetch_details(&self, place_id: &str) -> ApiResult<PlaceDetails> {
        let params = build_details_params(place_id, &self.config.api_key);
        let url = format!("{}{}", self.config.host, DETAILS_PATH);

        self.maps_service
            .fetch(&url, &params)
            .await
            .and_then(map_place_details)
    }

    /// Resolves a selected summary into its details. Any failure, or a
    /// session shut down meanwhile, yields `None`. The stored result set is
    /// left as is.
    pub async fn on_result_selected(&self, summary: &PlaceSummary) -> Option<PlaceDetails> {
        let res = tokio::select! {
            _ = self.cancel.cancelled() => return None,
            res = self.fetch_details(&summary.id) => res,
        };

        match res {
            Ok(details) if !self.cancel.is_cancelled() => Some(details),
            Ok(_) => None,
            Err(e) => {
                error!("Failed to fetch place details for {}: {}", summary.id, e);
                None
            }
        }
    }

    /// Stops delivery of every in-flight and future request.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}
