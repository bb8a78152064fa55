//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` / `form.rs` — Page state containers and form validation
//! - `client.rs` — Sub-client with HTTP methods and caching

pub mod bid;
pub mod fund;
pub mod limits;
pub mod market;
pub mod notice;
pub mod user;
