//! Payment reference endpoint.

use crate::models::PaymentRequest;

use super::{ApiResult, Gateway};

pub struct PaymentsApi {
    gateway: Gateway,
}

impl PaymentsApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Create a payment reference. The returned string is an opaque QR
    /// payload for a UI collaborator to render.
    pub async fn create(&self, request: &PaymentRequest) -> ApiResult<String> {
        Ok(self.gateway.post("/payments", request).await?.result)
    }
}
