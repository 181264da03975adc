//! Session credential storage.
//!
//! This module provides:
//! - `SessionStore`: the access/refresh token pair accessor the gateway
//!   reads on every request
//! - `TokenStorage`: the injected key-value capability behind it, with
//!   in-memory and file-backed implementations
//!
//! Tokens carry no local expiry state; an expired token is discovered
//! reactively when the backend answers 401.

pub mod store;

pub use store::{
    FileStorage, MemoryStorage, SessionStore, TokenStorage, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY,
};
