//! REST client for the product service, using [`reqwest`].
//!
//! [`ApiRequest`] describes one call against `/api/products`;
//! [`ProductApi`] sends it once (no retry) and decodes the answer into a
//! [`Reply`] or an [`ApiError`].

mod client;
mod error;
mod request;

pub use client::{ProductApi, Reply};
pub use error::ApiError;
pub use request::{ApiRequest, COLLECTION_PATH};
