use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable keys for the error histogram.
///
/// Failed request cycles are bucketed into this closed set instead of
/// transport-specific error type names, so reports stay comparable across
/// transport versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The per-request timeout elapsed before the response body was fully read.
    Timeout,
    /// The connection to the target could not be established.
    Connect,
    /// The exchange violated HTTP semantics (body read, decode or redirect failure).
    Protocol,
    /// Any other transport failure.
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ErrorKind::Timeout => "timeout",
            ErrorKind::Connect => "connect",
            ErrorKind::Protocol => "protocol",
            ErrorKind::Other => "other",
        };
        write!(f, "{kind}")
    }
}
