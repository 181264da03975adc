//! Data models for Bazaar entities.
//!
//! This module contains all the data structures used on the wire between
//! the client and the Bazaar backend:
//!
//! - `User`, `AuthTokens`, login/registration payloads
//! - `Product` and its create/update payloads
//! - `Post` and its create/update payloads
//! - `FileUpload`: upload result metadata
//! - `PaymentRequest`: payment reference creation payload
//!
//! Field names follow the backend's camelCase convention via explicit
//! serde renames.

pub mod file;
pub mod payment;
pub mod post;
pub mod product;
pub mod user;

pub use file::FileUpload;
pub use payment::PaymentRequest;
pub use post::{NewPost, Post, UpdatePost};
pub use product::{NewProduct, Product, UpdateProduct};
pub use user::{AuthTokens, LoginRequest, NewUser, UpdateUser, User};
