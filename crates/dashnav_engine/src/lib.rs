//! Dashnav engine: partial fetching, outline extraction and effect execution.
mod engine;
mod fetch;
mod outline;
mod types;

pub use engine::{EngineEvents, EngineHandle};
pub use fetch::{FetchSettings, PartialFetcher, ReqwestFetcher};
pub use outline::{html_text, outline_partial};
pub use types::{EngineEvent, FetchError, FetchedPartial, RequestId};
