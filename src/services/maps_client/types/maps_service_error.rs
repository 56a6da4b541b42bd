use thiserror::Error;

/// Every way a single Places request can fail. None of these are retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid status code {0} from API")]
    HttpStatus(u16),

    #[error("API error: {0}")]
    ApiStatus(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
