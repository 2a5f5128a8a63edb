//! # folio-client
//!
//! Thin REST client for the portfolio API.
//!
//! Each operation issues exactly one HTTP request and returns an
//! [`ApiResult`](folio_core::ApiResult): transport failures, non-2xx statuses
//! and malformed bodies all come back as [`ErrorInfo`](folio_core::ErrorInfo)
//! values, never as panics or foreign error types.

pub mod client;
mod endpoints;
pub mod envelope;

pub use client::{ApiClient, ClientError};
pub use envelope::Decoded;
