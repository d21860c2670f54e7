use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracker_core::{FailureReason, FetchOutcome};

#[derive(Deserialize)]
struct PageEnvelope {
    #[serde(rename = "totalPages")]
    total_pages: u32,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(rename = "errorMessage")]
    error_message: Option<String>,
}

/// Decodes a listing page: the rows under `items_field` plus `totalPages`.
pub fn decode_page<T: DeserializeOwned>(body: &[u8], items_field: &str) -> FetchOutcome<T> {
    let mut envelope: PageEnvelope = match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(err) => return malformed(err.to_string()),
    };
    let Some(raw_items) = envelope.rest.remove(items_field) else {
        return malformed(format!("missing `{items_field}` field"));
    };
    match serde_json::from_value::<Vec<T>>(raw_items) {
        Ok(items) => FetchOutcome::Success {
            items,
            total_pages: envelope.total_pages,
        },
        Err(err) => malformed(format!("invalid `{items_field}`: {err}")),
    }
}

/// Extracts the server's `errorMessage`, if the body carries one.
pub fn decode_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error_message)
        .filter(|message| !message.trim().is_empty())
}

fn malformed<T>(detail: String) -> FetchOutcome<T> {
    FetchOutcome::failure(FailureReason::MalformedResponse { detail })
}
