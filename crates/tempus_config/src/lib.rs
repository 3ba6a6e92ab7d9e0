//! Configuration loading for the Tempus timing analyzer.
//!
//! Parses and validates `tempus.toml` files containing per-gate-kind delay
//! overrides, the analysis target (clock period or frequency), and graph
//! capacity limits.
//!
//! ```toml
//! [delays]
//! and = 0.5
//! xor = 0.7
//!
//! [analysis]
//! target_period_ns = 10.0
//!
//! [limits]
//! max_nodes = 4096
//! max_fanin = 4
//! max_fanout = 4
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{AnalysisSettings, DelayOverrides, LimitSettings, TempusConfig};
