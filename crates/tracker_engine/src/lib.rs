//! Tracker engine: REST access, listing fetchers and effect execution.
mod client;
mod decode;
mod engine;
mod fetch;
mod token;
mod types;

pub use client::{ApiClient, FetchSettings, STATS_PATH};
pub use decode::{decode_error_message, decode_page};
pub use engine::EngineHandle;
pub use fetch::{Listed, ListingEndpoint, ListingFetcher, ReqwestListingFetcher};
pub use token::{EnvToken, StaticToken, TokenProvider};
pub use types::{EngineError, EngineEvent};
