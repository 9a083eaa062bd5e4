//! Core types and configuration for stacksent.
//!
//! Holds the [`Question`] data model shared by the collector and the
//! enricher, the order-preserving [`dedup`] pass, and environment-based
//! application configuration. No network code lives here.

mod app_config;
mod config;
mod question;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use question::{dedup, Question, SentimentLabel};
