//! The response envelope every Bazaar backend reply is wrapped in.
//!
//! The backend reports application-level success through `code`, decoupled
//! from the HTTP transport status: a transport-200 reply can still carry a
//! failing envelope. `result` is only meaningful when `code` is in the
//! success range.

use serde::{Deserialize, Serialize};

/// Inclusive range of envelope codes that denote logical success.
const SUCCESS_RANGE: std::ops::RangeInclusive<i64> = 200..=299;

/// `{ code, message?, result }` wrapper used by every backend reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Defaults so failure envelopes without a payload still parse
    #[serde(default)]
    pub result: T,
}

impl<T> Envelope<T> {
    /// Whether `code` denotes logical success, independent of transport
    /// status.
    pub fn is_success(&self) -> bool {
        SUCCESS_RANGE.contains(&self.code)
    }
}
