//! StackExchange search client and the pagination-driven question collector.
//!
//! [`StackExchangeClient`] wraps `reqwest` with request-key management and
//! typed response deserialization for the `search/advanced` endpoint;
//! [`collect`] drives it page by page until the requested number of
//! questions has been gathered or the API runs dry.

pub mod error;
pub mod types;

mod client;
mod collect;

pub use client::{StackExchangeClient, MAX_PAGE_SIZE};
pub use collect::collect;
pub use error::StackExchangeError;
