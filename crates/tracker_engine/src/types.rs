use thiserror::Error;
use tracker_core::{FailureReason, FetchOutcome, FetchRequest, PortfolioStats};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent<T> {
    FetchCompleted {
        request: FetchRequest,
        outcome: FetchOutcome<T>,
    },
    StatsLoaded(Result<PortfolioStats, FailureReason>),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid api base url: {0}")]
    BaseUrl(#[from] url::ParseError),
    #[error("http client setup failed: {0}")]
    Client(#[from] reqwest::Error),
    #[error("async runtime setup failed: {0}")]
    Runtime(#[from] std::io::Error),
}
