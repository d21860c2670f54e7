use std::fmt;

/// Monotonic tag assigned to every issued fetch.
pub type Seq = u64;

/// Parameters of one listing query, tagged with the sequence number it was
/// issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: Seq,
    pub page: u32,
    pub term: String,
}

impl FetchRequest {
    /// The search filter to send, if any. Empty terms mean "no filter".
    pub fn search(&self) -> Option<&str> {
        if self.term.is_empty() {
            None
        } else {
            Some(&self.term)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Success { items: Vec<T>, total_pages: u32 },
    Failure { reason: FailureReason },
}

impl<T> FetchOutcome<T> {
    pub fn failure(reason: FailureReason) -> Self {
        FetchOutcome::Failure { reason }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Accepted status, but the body lacked items or a page count.
    MalformedResponse { detail: String },
    /// The server answered with a non-success status.
    Rejected { status: u16, message: Option<String> },
    /// The request never completed.
    Unreachable { detail: String },
}

impl FailureReason {
    /// Message suitable for showing to the user verbatim, when the server sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            FailureReason::Rejected {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::MalformedResponse { detail } => {
                write!(f, "malformed response: {detail}")
            }
            FailureReason::Rejected {
                status,
                message: Some(message),
            } => write!(f, "rejected with status {status}: {message}"),
            FailureReason::Rejected {
                status,
                message: None,
            } => write!(f, "rejected with status {status}"),
            FailureReason::Unreachable { detail } => write!(f, "unreachable: {detail}"),
        }
    }
}
