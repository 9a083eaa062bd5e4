//! AlchemyAPI client and the concurrent sentiment-enrichment stage.
//!
//! [`AlchemyClient`] wraps the key-info and text-sentiment endpoints;
//! [`enrich`] fans one sentiment call per question out over a fixed-width
//! worker pool and keeps only the questions whose call succeeded.

pub mod error;
pub mod types;

mod client;
mod enrich;

pub use client::AlchemyClient;
pub use enrich::enrich;
pub use error::AlchemyError;
