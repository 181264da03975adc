//! HTTP boundary layer for the Bazaar backend.
//!
//! This module provides:
//! - `Gateway`: the single outbound client every call routes through
//!   (bearer attachment, envelope validation, 401/403 side effects)
//! - `Envelope`: the `{ code, message?, result }` reply contract
//! - `ApiError`: the failure taxonomy
//! - One thin feature module per resource: users, products, posts,
//!   files, payments

pub mod envelope;
pub mod error;
pub mod files;
pub mod gateway;
pub mod payments;
pub mod posts;
pub mod products;
pub mod users;

pub use envelope::Envelope;
pub use error::ApiError;
pub use files::FilesApi;
pub use gateway::Gateway;
pub use payments::PaymentsApi;
pub use posts::PostsApi;
pub use products::ProductsApi;
pub use users::UsersApi;

pub type ApiResult<T> = Result<T, ApiError>;
