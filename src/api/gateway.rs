//! The single outbound HTTP gateway every feature module routes through.
//!
//! The gateway owns the two cross-cutting concerns of the client boundary:
//! attaching the session's bearer token to outgoing requests, and
//! classifying every reply into the success/failure taxonomy before it
//! reaches a feature module. Requests sent without a stored token are
//! deliberately allowed through headerless; the server is the sole
//! authority on whether authentication was required.

use std::time::Duration;

use reqwest::multipart::Form;
use reqwest::{header, Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::auth::SessionStore;
use crate::config::Config;
use crate::events::{SessionSignal, SignalHub};

use super::{ApiError, ApiResult, Envelope};

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Gateway to the Bazaar backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling,
/// and the session store and signal hub are shared handles.
#[derive(Clone)]
pub struct Gateway {
    http: Client,
    base_url: String,
    session: SessionStore,
    signals: SignalHub,
}

impl Gateway {
    /// Create a gateway bound to the configured base URL and the given
    /// session store.
    ///
    /// Every request defaults to `Content-Type: application/json`; an
    /// individual call can still override it (multipart uploads do).
    pub fn new(config: &Config, session: SessionStore) -> ApiResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            session,
            signals: SignalHub::new(),
        })
    }

    /// The session store this gateway reads tokens from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Subscribe to session lifecycle signals (401/403 outcomes).
    pub fn subscribe(&self) -> broadcast::Receiver<SessionSignal> {
        self.signals.subscribe()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Envelope<T>> {
        self.execute(self.http.get(self.url(path))).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<Envelope<T>> {
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<Envelope<T>> {
        self.execute(self.http.put(self.url(path)).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Envelope<T>> {
        self.execute(self.http.delete(self.url(path))).await
    }

    /// POST a multipart form, overriding the default JSON content type.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> ApiResult<Envelope<T>> {
        self.execute(self.http.post(self.url(path)).multipart(form))
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send one request and classify the reply.
    ///
    /// The token is read from the session store at send time, so a token
    /// cleared by another request's 401 only affects requests that have
    /// not been sent yet. Classification order: 401 teardown first, then
    /// 403, then other transport failures, and envelope-code validation
    /// only on transport-successful replies.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<Envelope<T>> {
        let request = match self.session.access_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        match status.as_u16() {
            401 => {
                warn!("Backend answered 401, tearing down session");
                self.session.clear_tokens();
                self.signals.emit(SessionSignal::SessionInvalidated);
                Err(ApiError::Unauthorized)
            }
            403 => {
                warn!("Backend answered 403, session preserved");
                self.signals.emit(SessionSignal::AccessDenied);
                Err(ApiError::Forbidden)
            }
            _ if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                Err(ApiError::from_status(status, &body))
            }
            _ => {
                let body = response.text().await?;
                let envelope: Envelope<Value> = serde_json::from_str(&body).map_err(|e| {
                    ApiError::InvalidResponse(format!("reply is not an envelope: {e}"))
                })?;

                if !envelope.is_success() {
                    debug!(code = envelope.code, "Envelope carries a failure code");
                    return Err(ApiError::Envelope {
                        code: envelope.code,
                        message: envelope.message,
                    });
                }

                let result: T = serde_json::from_value(envelope.result).map_err(|e| {
                    ApiError::InvalidResponse(format!("unexpected result shape: {e}"))
                })?;

                Ok(Envelope {
                    code: envelope.code,
                    message: envelope.message,
                    result,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_join_onto_the_base_url() {
        let config = Config::new("http://localhost:9999/api/");
        let gateway = Gateway::new(&config, SessionStore::in_memory()).unwrap();
        assert_eq!(gateway.url("/products"), "http://localhost:9999/api/products");
        assert_eq!(gateway.url("/users/7"), "http://localhost:9999/api/users/7");
    }
}
