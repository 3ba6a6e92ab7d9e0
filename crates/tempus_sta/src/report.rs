//! Timing report types and text rendering.
//!
//! A [`TimingReport`] is the complete output of one analysis run: per-node
//! timing records, the critical path, the worst slack, a frequency summary,
//! and any non-fatal warnings. All types serialize to JSON for
//! machine-readable output; [`TimingReport::render_text`] produces the
//! human-readable table and critical-path trace.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tempus_common::Frequency;
use tempus_diagnostics::Diagnostic;

/// Per-node timing record.
///
/// `required_ns` and `slack_ns` are `None` for unconstrained nodes (nodes
/// with no path to a primary output when no target period is set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTiming {
    /// The node's name.
    pub name: String,
    /// The node kind label ("INPUT", "OUTPUT", "AND", ...).
    pub kind: String,
    /// The node's intrinsic delay in nanoseconds.
    pub delay_ns: f64,
    /// Worst-case signal arrival time at this node.
    pub arrival_ns: f64,
    /// Latest permissible arrival time, if constrained.
    pub required_ns: Option<f64>,
    /// Timing margin (`required - arrival`), if constrained. Negative slack
    /// is a timing violation.
    pub slack_ns: Option<f64>,
}

/// One node on the critical path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathElement {
    /// The node's name.
    pub name: String,
    /// The node kind label.
    pub kind: String,
    /// The node's intrinsic delay, charged on the hop out of it.
    pub delay_ns: f64,
    /// Arrival time at this node.
    pub arrival_ns: f64,
}

/// The critical path: the source-to-endpoint node sequence achieving the
/// minimum slack in the circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalPath {
    /// Path nodes in signal-flow order, ending at the worst-slack endpoint.
    pub elements: Vec<PathElement>,
    /// Total path delay (arrival time at the endpoint).
    pub delay_ns: f64,
    /// Slack at the endpoint.
    pub slack_ns: f64,
}

impl CriticalPath {
    /// Returns the number of nodes on the path.
    pub fn node_count(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of edges on the path.
    pub fn edge_count(&self) -> usize {
        self.elements.len().saturating_sub(1)
    }
}

/// The complete result of one timing analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingReport {
    /// Per-node timing records, in node creation order.
    pub nodes: Vec<NodeTiming>,
    /// The global critical path, absent when no constrained endpoint exists.
    pub critical_path: Option<CriticalPath>,
    /// The minimum slack over all constrained primary outputs.
    pub worst_slack_ns: Option<f64>,
    /// The analysis deadline (configured target period, or derived from the
    /// slowest primary output).
    pub deadline_ns: Option<f64>,
    /// `true` when no constrained endpoint has negative slack.
    pub met: bool,
    /// Maximum operating frequency implied by the critical delay.
    pub max_frequency: Option<Frequency>,
    /// Target frequency implied by the configured period, if any.
    pub target_frequency: Option<Frequency>,
    /// Non-fatal findings from this run.
    pub warnings: Vec<Diagnostic>,
}

impl TimingReport {
    /// Creates an empty report for an empty circuit.
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            critical_path: None,
            worst_slack_ns: None,
            deadline_ns: None,
            met: true,
            max_frequency: None,
            target_frequency: None,
            warnings: Vec::new(),
        }
    }

    /// Returns the number of nodes with negative slack.
    pub fn violation_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.slack_ns.is_some_and(|s| s < 0.0))
            .count()
    }

    /// Renders the report as a human-readable table plus critical-path trace.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str("Timing report\n");
        out.push_str("=============\n");
        let _ = writeln!(
            out,
            "status:          {}",
            if self.met { "MET" } else { "VIOLATED" }
        );
        if let Some(deadline) = self.deadline_ns {
            let _ = writeln!(out, "deadline:        {deadline:.3} ns");
        }
        if let Some(slack) = self.worst_slack_ns {
            let _ = writeln!(out, "worst slack:     {slack:.3} ns");
        }
        if let Some(freq) = self.max_frequency {
            let _ = writeln!(out, "max frequency:   {freq}");
        }
        if let Some(freq) = self.target_frequency {
            let _ = writeln!(out, "target:          {freq}");
        }

        if !self.nodes.is_empty() {
            let name_w = self
                .nodes
                .iter()
                .map(|n| n.name.len())
                .max()
                .unwrap_or(0)
                .max("node".len());
            out.push('\n');
            let _ = writeln!(
                out,
                "{:<name_w$}  {:<6}  {:>8}  {:>8}  {:>8}  {:>8}",
                "node", "kind", "delay", "arrival", "required", "slack"
            );
            for n in &self.nodes {
                let _ = writeln!(
                    out,
                    "{:<name_w$}  {:<6}  {:>8.3}  {:>8.3}  {:>8}  {:>8}",
                    n.name,
                    n.kind,
                    n.delay_ns,
                    n.arrival_ns,
                    format_opt(n.required_ns),
                    format_opt(n.slack_ns)
                );
            }
        }

        if let Some(path) = &self.critical_path {
            out.push('\n');
            let _ = writeln!(
                out,
                "critical path ({} nodes, {} edges, delay {:.3} ns, slack {:.3} ns):",
                path.node_count(),
                path.edge_count(),
                path.delay_ns,
                path.slack_ns
            );
            for elem in &path.elements {
                let _ = writeln!(out, "  {} ({})  t={:.3}", elem.name, elem.kind, elem.arrival_ns);
            }
        }

        out
    }
}

/// Formats an optional timing value, using `-` for unconstrained entries.
fn format_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.3}"),
        None => "-".to_string(),
    }
}
