use crate::{FailureReason, FetchRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch(FetchRequest),
    /// An applied fetch failed; the presentation layer decides how loudly to say so.
    ReportFailure { reason: FailureReason },
}
