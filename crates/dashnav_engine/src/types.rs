use dashnav_core::PartialOutline;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPartial {
    pub html: String,
    pub outline: PartialOutline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    PartialFetched {
        request_id: RequestId,
        section: String,
        path: String,
        result: Result<FetchedPartial, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("network error: {0}")]
    Network(String),
}

impl FetchError {
    /// Status code for failures the shell renders inline.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus(status) => Some(*status),
            _ => None,
        }
    }
}
