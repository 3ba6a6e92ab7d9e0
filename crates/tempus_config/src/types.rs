//! Configuration types deserialized from `tempus.toml`.

use crate::error::ConfigError;
use serde::Deserialize;
use tempus_common::Frequency;

/// The top-level configuration parsed from `tempus.toml`.
///
/// Every section is optional; an empty file is a valid configuration that
/// leaves all engine defaults in place.
#[derive(Debug, Default, Deserialize)]
pub struct TempusConfig {
    /// Per-gate-kind intrinsic delay overrides.
    #[serde(default)]
    pub delays: DelayOverrides,
    /// Analysis target settings (clock period or frequency).
    #[serde(default)]
    pub analysis: AnalysisSettings,
    /// Graph capacity limits.
    #[serde(default)]
    pub limits: LimitSettings,
}

/// Optional intrinsic delay overrides, one per node kind.
///
/// Unset entries fall back to the engine's built-in delay table. Values are
/// in the same abstract time units as the rest of the analysis (nanoseconds
/// by convention) and must be non-negative.
#[derive(Debug, Default, Deserialize)]
pub struct DelayOverrides {
    /// Delay for AND gates.
    pub and: Option<f64>,
    /// Delay for OR gates.
    pub or: Option<f64>,
    /// Delay for NOT gates.
    pub not: Option<f64>,
    /// Delay for NAND gates.
    pub nand: Option<f64>,
    /// Delay for NOR gates.
    pub nor: Option<f64>,
    /// Delay for XOR gates.
    pub xor: Option<f64>,
    /// Delay for primary inputs.
    pub input: Option<f64>,
    /// Delay for primary outputs.
    pub output: Option<f64>,
}

impl DelayOverrides {
    /// Iterates over the set entries as `(field name, value)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        [
            ("and", self.and),
            ("or", self.or),
            ("not", self.not),
            ("nand", self.nand),
            ("nor", self.nor),
            ("xor", self.xor),
            ("input", self.input),
            ("output", self.output),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}

/// Analysis target settings.
///
/// At most one of `target_period_ns` and `target_frequency` may be set.
/// When neither is set, the analysis deadline is derived from the slowest
/// primary output.
#[derive(Debug, Default, Deserialize)]
pub struct AnalysisSettings {
    /// Target clock period in nanoseconds.
    pub target_period_ns: Option<f64>,
    /// Target clock frequency as a string (e.g., "100MHz"), parsed to
    /// [`Frequency`](tempus_common::Frequency).
    pub target_frequency: Option<String>,
}

impl AnalysisSettings {
    /// Resolves the configured target into a period in nanoseconds.
    ///
    /// Returns `Ok(None)` when no target is configured. Fails if both forms
    /// are given, if the period is non-positive, or if the frequency string
    /// does not parse to a positive frequency.
    pub fn resolved_period_ns(&self) -> Result<Option<f64>, ConfigError> {
        match (self.target_period_ns, &self.target_frequency) {
            (Some(_), Some(_)) => Err(ConfigError::ValidationError(
                "analysis.target_period_ns and analysis.target_frequency are mutually exclusive"
                    .to_string(),
            )),
            (Some(period), None) => {
                if period > 0.0 {
                    Ok(Some(period))
                } else {
                    Err(ConfigError::ValidationError(format!(
                        "analysis.target_period_ns must be positive, got {period}"
                    )))
                }
            }
            (None, Some(freq)) => {
                let freq: Frequency = freq
                    .parse()
                    .map_err(|e| ConfigError::ValidationError(format!("{e}")))?;
                if freq.hz() > 0.0 {
                    Ok(Some(freq.period_ns()))
                } else {
                    Err(ConfigError::ValidationError(
                        "analysis.target_frequency must be positive".to_string(),
                    ))
                }
            }
            (None, None) => Ok(None),
        }
    }
}

/// Graph capacity limits.
#[derive(Debug, Deserialize)]
pub struct LimitSettings {
    /// Maximum number of nodes the graph may hold.
    #[serde(default = "default_max_nodes")]
    pub max_nodes: usize,
    /// Maximum fan-in per node.
    #[serde(default = "default_max_arity")]
    pub max_fanin: usize,
    /// Maximum fan-out per node.
    #[serde(default = "default_max_arity")]
    pub max_fanout: usize,
}

fn default_max_nodes() -> usize {
    4096
}

fn default_max_arity() -> usize {
    4
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            max_nodes: default_max_nodes(),
            max_fanin: default_max_arity(),
            max_fanout: default_max_arity(),
        }
    }
}
