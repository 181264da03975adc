//! bazaar-client - client library for the Bazaar marketplace API.
//!
//! Everything a frontend needs to talk to the Bazaar backend funnels
//! through one [`Gateway`]: it attaches the session's bearer token on the
//! way out, validates the backend's `{ code, message?, result }` envelope
//! on the way in, and reacts to 401/403 replies with session teardown and
//! broadcast signals that a UI layer translates into navigation.
//!
//! ```no_run
//! use bazaar_client::{Config, Gateway, ProductsApi, SessionStore};
//!
//! # async fn example() -> Result<(), bazaar_client::ApiError> {
//! let session = SessionStore::persistent();
//! let gateway = Gateway::new(&Config::from_env(), session)?;
//! let _signals = gateway.subscribe();
//!
//! let products = ProductsApi::new(gateway.clone());
//! let listing = products.get_all().await?;
//! println!("{} listings", listing.result.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod events;
pub mod models;

pub use api::{
    ApiError, ApiResult, Envelope, FilesApi, Gateway, PaymentsApi, PostsApi, ProductsApi, UsersApi,
};
pub use auth::{SessionStore, TokenStorage};
pub use config::Config;
pub use events::{SessionSignal, SignalHub};
