//! HTTP client layer — `GdMatkaHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::GdMatkaHttp;
pub use retry::{RetryConfig, RetryPolicy};
