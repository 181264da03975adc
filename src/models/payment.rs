use serde::{Deserialize, Serialize};

/// Payload for creating a payment reference.
///
/// The backend answers with an opaque string (a QR payload) that a UI
/// collaborator renders; this crate never interprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Amount in the platform's minor currency unit
    pub amount: i64,
    pub description: String,
}
