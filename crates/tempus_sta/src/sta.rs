//! Static timing analysis engine.
//!
//! Runs a forward pass over the topological order to compute arrival times,
//! resolves the analysis deadline, runs a backward pass to compute required
//! times, then derives slack at every node and backtracks the critical path
//! from the worst-slack primary output.
//!
//! All timing state lives in dense per-run vectors indexed by [`NodeId`];
//! the graph itself is never mutated, so rerunning the analysis on an
//! unmodified graph reproduces identical results.

use crate::delay::DelayTable;
use crate::error::AnalysisError;
use crate::graph::CircuitGraph;
use crate::ids::NodeId;
use crate::report::{CriticalPath, NodeTiming, PathElement, TimingReport};
use crate::topo::topological_order;
use serde::{Deserialize, Serialize};
use tempus_common::Frequency;
use tempus_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};

/// Reported frequencies are capped at 10 GHz.
const MAX_FREQUENCY_HZ: f64 = 10_000_000_000.0;

/// Configuration for a timing analysis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaConfig {
    /// Intrinsic delays per node kind.
    pub delay_table: DelayTable,
    /// Explicit analysis deadline in nanoseconds. When absent, the deadline
    /// is the arrival time of the slowest primary output.
    pub target_period_ns: Option<f64>,
}

/// Performs static timing analysis on the given circuit graph.
///
/// Computes arrival times (forward pass), required times (backward pass),
/// per-node slack, and the critical path. Non-fatal data-quality findings
/// (driverless or sinkless nodes, a missed deadline) are emitted to `sink`
/// and carried in the report's warning list.
///
/// Fails with [`AnalysisError::CombinationalLoop`] if the graph is cyclic;
/// no partial timing result is produced in that case.
pub fn analyze_timing(
    graph: &CircuitGraph,
    config: &StaConfig,
    sink: &DiagnosticSink,
) -> Result<TimingReport, AnalysisError> {
    if graph.is_empty() {
        return Ok(TimingReport::empty());
    }

    let order = topological_order(graph)?;
    let delays = &config.delay_table;
    let mut warnings = Vec::new();

    let arrival = forward_pass(graph, delays, &order, &mut warnings);
    let deadline = resolve_deadline(graph, config, &arrival, &mut warnings);
    let required = backward_pass(graph, delays, &order, deadline, &mut warnings);

    let slack: Vec<f64> = arrival
        .iter()
        .zip(required.iter())
        .map(|(a, r)| r - a)
        .collect();

    let endpoint = select_worst_endpoint(graph, &slack);
    let worst_slack = endpoint.map(|id| slack[id.index()]);
    let critical_path =
        endpoint.map(|id| trace_critical_path(graph, delays, &arrival, &slack, id));

    let met = worst_slack.map_or(true, |s| s >= 0.0);
    if let Some(negative) = worst_slack.filter(|s| *s < 0.0) {
        warnings.push(Diagnostic::warning(
            DiagnosticCode::new(Category::Timing, 110),
            format!("timing not met: worst negative slack = {negative:.3} ns"),
        ));
    }

    let max_frequency = critical_path
        .as_ref()
        .map(|p| p.delay_ns)
        .filter(|d| *d > 0.0)
        .map(|d| {
            let freq = Frequency::from_period_ns(d);
            Frequency::new(freq.hz().min(MAX_FREQUENCY_HZ))
        });
    let target_frequency = config.target_period_ns.map(Frequency::from_period_ns);

    let nodes = graph
        .nodes()
        .iter()
        .map(|node| {
            let i = node.id.index();
            NodeTiming {
                name: node.name.clone(),
                kind: node.kind.label().to_string(),
                delay_ns: delays.delay_of(node.kind),
                arrival_ns: arrival[i],
                required_ns: finite(required[i]),
                slack_ns: finite(slack[i]),
            }
        })
        .collect();

    for diag in &warnings {
        sink.emit(diag.clone());
    }

    Ok(TimingReport {
        nodes,
        critical_path,
        worst_slack_ns: worst_slack,
        deadline_ns: deadline,
        met,
        max_frequency,
        target_frequency,
        warnings,
    })
}

/// Maps an unconstrained (infinite) value to `None` for reporting.
fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Forward pass: computes the worst-case arrival time at each node.
///
/// Primary inputs arrive at time 0. Every other node arrives when its
/// slowest driver has arrived and propagated through that driver's
/// intrinsic delay. A driverless non-input is a malformed-graph condition:
/// its arrival defaults to 0 with a `T101` warning.
fn forward_pass(
    graph: &CircuitGraph,
    delays: &DelayTable,
    order: &[NodeId],
    warnings: &mut Vec<Diagnostic>,
) -> Vec<f64> {
    let mut arrival = vec![0.0_f64; graph.node_count()];

    for &id in order {
        let node = graph.node(id);
        if node.kind.is_primary_input() {
            continue;
        }
        if node.fanin.is_empty() {
            warnings.push(
                Diagnostic::warning(
                    DiagnosticCode::new(Category::Timing, 101),
                    format!("node '{}' has no drivers", node.name),
                )
                .with_node(&node.name)
                .with_note("arrival time defaults to 0"),
            );
            continue;
        }

        let mut worst = f64::NEG_INFINITY;
        for &pred in &node.fanin {
            let contribution = arrival[pred.index()] + delays.delay_of(graph.node(pred).kind);
            worst = worst.max(contribution);
        }
        arrival[id.index()] = worst;
    }

    arrival
}

/// Resolves the analysis deadline.
///
/// An explicitly configured target period wins; otherwise the circuit is
/// assumed to complete when its slowest primary output naturally arrives.
/// `None` means nothing constrains the design (no outputs, no target).
fn resolve_deadline(
    graph: &CircuitGraph,
    config: &StaConfig,
    arrival: &[f64],
    warnings: &mut Vec<Diagnostic>,
) -> Option<f64> {
    let outputs = graph.primary_outputs();
    if outputs.is_empty() {
        warnings.push(
            Diagnostic::warning(
                DiagnosticCode::new(Category::Timing, 103),
                "circuit has no primary outputs; required times are unconstrained",
            )
            .with_help("mark at least one node as a primary output"),
        );
        return config.target_period_ns;
    }

    if let Some(period) = config.target_period_ns {
        return Some(period);
    }

    let mut deadline = f64::NEG_INFINITY;
    for &id in &outputs {
        deadline = deadline.max(arrival[id.index()]);
    }
    Some(deadline)
}

/// Backward pass: computes the latest permissible arrival at each node.
///
/// Primary outputs are pinned to the deadline. Every other node must arrive
/// early enough that each of its loads still meets its own required time
/// after this node's intrinsic delay. A sinkless non-output keeps an
/// unconstrained (infinite) required time with a `T102` warning.
fn backward_pass(
    graph: &CircuitGraph,
    delays: &DelayTable,
    order: &[NodeId],
    deadline: Option<f64>,
    warnings: &mut Vec<Diagnostic>,
) -> Vec<f64> {
    let mut required = vec![f64::INFINITY; graph.node_count()];

    for &id in order.iter().rev() {
        let node = graph.node(id);
        if node.kind.is_primary_output() {
            if let Some(t) = deadline {
                required[id.index()] = t;
            }
            continue;
        }
        if node.fanout.is_empty() {
            warnings.push(
                Diagnostic::warning(
                    DiagnosticCode::new(Category::Timing, 102),
                    format!("node '{}' drives no outputs", node.name),
                )
                .with_node(&node.name)
                .with_note("required time stays unconstrained"),
            );
            continue;
        }

        let own_delay = delays.delay_of(node.kind);
        let mut tightest = f64::INFINITY;
        for &succ in &node.fanout {
            tightest = tightest.min(required[succ.index()] - own_delay);
        }
        required[id.index()] = tightest;
    }

    required
}

/// Picks the primary output with the minimum finite slack.
///
/// Ties are broken by lowest node index. Unconstrained outputs are
/// excluded. Returns `None` when no constrained primary output exists.
fn select_worst_endpoint(graph: &CircuitGraph, slack: &[f64]) -> Option<NodeId> {
    let mut worst: Option<(NodeId, f64)> = None;
    for node in graph.nodes() {
        if !node.kind.is_primary_output() {
            continue;
        }
        let s = slack[node.id.index()];
        if !s.is_finite() {
            continue;
        }
        let better = match worst {
            None => true,
            Some((_, current)) => s < current,
        };
        if better {
            worst = Some((node.id, s));
        }
    }
    worst.map(|(id, _)| id)
}

/// Backtracks the critical path from the given endpoint.
///
/// At each step, follows the predecessor whose arrival plus intrinsic delay
/// determined this node's arrival (the max contributor), breaking ties by
/// lowest node index, until a node with no drivers is reached.
fn trace_critical_path(
    graph: &CircuitGraph,
    delays: &DelayTable,
    arrival: &[f64],
    slack: &[f64],
    endpoint: NodeId,
) -> CriticalPath {
    let mut chain = vec![endpoint];
    let mut current = endpoint;

    loop {
        let node = graph.node(current);
        if node.fanin.is_empty() {
            break;
        }
        let mut best: Option<(NodeId, f64)> = None;
        for &pred in &node.fanin {
            let contribution = arrival[pred.index()] + delays.delay_of(graph.node(pred).kind);
            let better = match best {
                None => true,
                Some((best_id, best_contribution)) => {
                    contribution > best_contribution
                        || (contribution == best_contribution && pred.as_raw() < best_id.as_raw())
                }
            };
            if better {
                best = Some((pred, contribution));
            }
        }
        match best {
            Some((pred, _)) => {
                chain.push(pred);
                current = pred;
            }
            None => break,
        }
    }

    chain.reverse();

    let elements = chain
        .iter()
        .map(|&id| {
            let node = graph.node(id);
            PathElement {
                name: node.name.clone(),
                kind: node.kind.label().to_string(),
                delay_ns: delays.delay_of(node.kind),
                arrival_ns: arrival[id.index()],
            }
        })
        .collect();

    CriticalPath {
        elements,
        delay_ns: arrival[endpoint.index()],
        slack_ns: slack[endpoint.index()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GateKind, NodeKind};

    fn analyze(graph: &CircuitGraph, config: &StaConfig) -> TimingReport {
        let sink = DiagnosticSink::new();
        analyze_timing(graph, config, &sink).unwrap()
    }

    fn timing<'a>(report: &'a TimingReport, name: &str) -> &'a NodeTiming {
        report.nodes.iter().find(|n| n.name == name).unwrap()
    }

    #[test]
    fn empty_graph_analyzes_trivially() {
        let graph = CircuitGraph::new();
        let report = analyze(&graph, &StaConfig::default());
        assert!(report.met);
        assert!(report.nodes.is_empty());
        assert!(report.critical_path.is_none());
        assert!(report.worst_slack_ns.is_none());
    }

    #[test]
    fn chain_arrival_times() {
        // IN -> NOT -> OUT: each hop charges the driver's delay.
        let mut g = CircuitGraph::new();
        let a = g.add_node("in", NodeKind::PrimaryInput).unwrap();
        let b = g.add_node("inv", NodeKind::Gate(GateKind::Not)).unwrap();
        let c = g.add_node("out", NodeKind::PrimaryOutput).unwrap();
        g.connect(a, b).unwrap();
        g.connect(b, c).unwrap();

        let report = analyze(&g, &StaConfig::default());
        assert_eq!(timing(&report, "in").arrival_ns, 0.0);
        assert_eq!(timing(&report, "inv").arrival_ns, 0.0);
        assert_eq!(timing(&report, "out").arrival_ns, 0.3);
        assert_eq!(report.deadline_ns, Some(0.3));
    }

    #[test]
    fn diamond_takes_slowest_branch() {
        // in -> {xor, inv} -> out; the XOR branch (0.7) dominates the NOT (0.3).
        let mut g = CircuitGraph::new();
        let input = g.add_node("in", NodeKind::PrimaryInput).unwrap();
        let slow = g.add_node("xor", NodeKind::Gate(GateKind::Xor)).unwrap();
        let fast = g.add_node("inv", NodeKind::Gate(GateKind::Not)).unwrap();
        let out = g.add_node("out", NodeKind::PrimaryOutput).unwrap();
        g.connect(input, slow).unwrap();
        g.connect(input, fast).unwrap();
        g.connect(slow, out).unwrap();
        g.connect(fast, out).unwrap();

        let report = analyze(&g, &StaConfig::default());
        assert_eq!(timing(&report, "out").arrival_ns, 0.7);

        let path = report.critical_path.as_ref().unwrap();
        let names: Vec<&str> = path.elements.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["in", "xor", "out"]);
        // The fast branch has positive slack, the slow branch zero.
        assert_eq!(timing(&report, "xor").slack_ns, Some(0.0));
        let inv_slack = timing(&report, "inv").slack_ns.unwrap();
        assert!((inv_slack - 0.4).abs() < 1e-9);
    }

    #[test]
    fn arrival_monotonicity_holds() {
        let mut g = CircuitGraph::new();
        let a = g.add_node("a", NodeKind::PrimaryInput).unwrap();
        let b = g.add_node("b", NodeKind::PrimaryInput).unwrap();
        let n1 = g.add_node("n1", NodeKind::Gate(GateKind::Nand)).unwrap();
        let n2 = g.add_node("n2", NodeKind::Gate(GateKind::Xor)).unwrap();
        let out = g.add_node("out", NodeKind::PrimaryOutput).unwrap();
        g.connect(a, n1).unwrap();
        g.connect(b, n1).unwrap();
        g.connect(n1, n2).unwrap();
        g.connect(b, n2).unwrap();
        g.connect(n2, out).unwrap();

        let config = StaConfig::default();
        let report = analyze(&g, &config);
        for node in g.nodes() {
            if node.fanin.is_empty() {
                continue;
            }
            let own = timing(&report, &node.name).arrival_ns;
            let mut any_equal = false;
            for &pred in &node.fanin {
                let p = g.node(pred);
                let contribution = timing(&report, &p.name).arrival_ns
                    + config.delay_table.delay_of(p.kind);
                assert!(own >= contribution);
                if own == contribution {
                    any_equal = true;
                }
            }
            assert!(any_equal, "no critical predecessor for {}", node.name);
        }
    }

    #[test]
    fn derived_deadline_gives_zero_slack_endpoint() {
        let mut g = CircuitGraph::new();
        let a = g.add_node("a", NodeKind::PrimaryInput).unwrap();
        let gate = g.add_node("gate", NodeKind::Gate(GateKind::Or)).unwrap();
        let out = g.add_node("out", NodeKind::PrimaryOutput).unwrap();
        g.connect(a, gate).unwrap();
        g.connect(gate, out).unwrap();

        let report = analyze(&g, &StaConfig::default());
        assert_eq!(timing(&report, "out").slack_ns, Some(0.0));
        assert_eq!(report.worst_slack_ns, Some(0.0));
        assert!(report.met);
    }

    #[test]
    fn target_period_violation() {
        let mut g = CircuitGraph::new();
        let a = g.add_node("a", NodeKind::PrimaryInput).unwrap();
        let x1 = g.add_node("x1", NodeKind::Gate(GateKind::Xor)).unwrap();
        let x2 = g.add_node("x2", NodeKind::Gate(GateKind::Xor)).unwrap();
        let out = g.add_node("out", NodeKind::PrimaryOutput).unwrap();
        g.connect(a, x1).unwrap();
        g.connect(x1, x2).unwrap();
        g.connect(x2, out).unwrap();

        // Path delay is 0.7 + 0.7 = 1.4 ns; demand 1.0 ns.
        let config = StaConfig {
            target_period_ns: Some(1.0),
            ..Default::default()
        };
        let sink = DiagnosticSink::new();
        let report = analyze_timing(&g, &config, &sink).unwrap();

        assert!(!report.met);
        let worst = report.worst_slack_ns.unwrap();
        assert!((worst + 0.4).abs() < 1e-9);
        assert!(report.violation_count() > 0);
        // T110 emitted to both the sink and the report
        assert!(report
            .warnings
            .iter()
            .any(|w| w.code.number == 110 && w.message.contains("timing not met")));
        assert!(sink.diagnostics().iter().any(|w| w.code.number == 110));
    }

    #[test]
    fn generous_target_period_leaves_margin() {
        let mut g = CircuitGraph::new();
        let a = g.add_node("a", NodeKind::PrimaryInput).unwrap();
        let out = g.add_node("out", NodeKind::PrimaryOutput).unwrap();
        g.connect(a, out).unwrap();

        let config = StaConfig {
            target_period_ns: Some(10.0),
            ..Default::default()
        };
        let report = analyze(&g, &config);
        assert!(report.met);
        assert_eq!(report.worst_slack_ns, Some(10.0));
        assert_eq!(report.deadline_ns, Some(10.0));
        assert_eq!(report.target_frequency.unwrap().mhz(), 100.0);
    }

    #[test]
    fn driverless_gate_warns_and_defaults_to_zero() {
        let mut g = CircuitGraph::new();
        let orphan = g.add_node("orphan", NodeKind::Gate(GateKind::And)).unwrap();
        let out = g.add_node("out", NodeKind::PrimaryOutput).unwrap();
        g.connect(orphan, out).unwrap();

        let sink = DiagnosticSink::new();
        let report = analyze_timing(&g, &StaConfig::default(), &sink).unwrap();
        assert_eq!(timing(&report, "orphan").arrival_ns, 0.0);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.code.number == 101 && w.node.as_deref() == Some("orphan")));
        assert!(!sink.has_errors());
    }

    #[test]
    fn sinkless_node_stays_unconstrained() {
        let mut g = CircuitGraph::new();
        let a = g.add_node("a", NodeKind::PrimaryInput).unwrap();
        let dangling = g
            .add_node("dangling", NodeKind::Gate(GateKind::Not))
            .unwrap();
        let out = g.add_node("out", NodeKind::PrimaryOutput).unwrap();
        g.connect(a, dangling).unwrap();
        g.connect(a, out).unwrap();

        let report = analyze(&g, &StaConfig::default());
        let t = timing(&report, "dangling");
        assert_eq!(t.required_ns, None);
        assert_eq!(t.slack_ns, None);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.code.number == 102 && w.node.as_deref() == Some("dangling")));
        // The dangling node must not become the worst endpoint.
        assert_eq!(report.worst_slack_ns, Some(0.0));
    }

    #[test]
    fn no_primary_outputs_warns() {
        let mut g = CircuitGraph::new();
        let a = g.add_node("a", NodeKind::PrimaryInput).unwrap();
        let b = g.add_node("b", NodeKind::Gate(GateKind::Not)).unwrap();
        g.connect(a, b).unwrap();

        let report = analyze(&g, &StaConfig::default());
        assert!(report.met);
        assert!(report.worst_slack_ns.is_none());
        assert!(report.critical_path.is_none());
        assert!(report.warnings.iter().any(|w| w.code.number == 103));
    }

    #[test]
    fn target_period_without_outputs_stays_unconstrained() {
        let mut g = CircuitGraph::new();
        let a = g.add_node("a", NodeKind::PrimaryInput).unwrap();
        let b = g.add_node("b", NodeKind::Gate(GateKind::Not)).unwrap();
        g.connect(a, b).unwrap();

        let config = StaConfig {
            target_period_ns: Some(5.0),
            ..Default::default()
        };
        let report = analyze(&g, &config);
        // The period has no output to anchor to.
        assert!(report.worst_slack_ns.is_none());
        assert!(report.critical_path.is_none());
        assert!(report.met);
        assert!(report.warnings.iter().any(|w| w.code.number == 103));
    }

    #[test]
    fn cycle_aborts_without_timing_fields() {
        let mut g = CircuitGraph::new();
        let a = g.add_node("a", NodeKind::PrimaryInput).unwrap();
        let b = g.add_node("b", NodeKind::Gate(GateKind::Nor)).unwrap();
        let c = g.add_node("c", NodeKind::Gate(GateKind::Not)).unwrap();
        let out = g.add_node("out", NodeKind::PrimaryOutput).unwrap();
        g.connect(a, b).unwrap();
        g.connect(b, c).unwrap();
        g.connect(c, b).unwrap();
        g.connect(c, out).unwrap();

        let sink = DiagnosticSink::new();
        let result = analyze_timing(&g, &StaConfig::default(), &sink);
        assert!(matches!(
            result,
            Err(AnalysisError::CombinationalLoop { .. })
        ));
    }

    #[test]
    fn multiple_outputs_worst_endpoint_wins() {
        let mut g = CircuitGraph::new();
        let a = g.add_node("a", NodeKind::PrimaryInput).unwrap();
        let slow = g.add_node("slow", NodeKind::Gate(GateKind::Xor)).unwrap();
        let out_fast = g.add_node("out_fast", NodeKind::PrimaryOutput).unwrap();
        let out_slow = g.add_node("out_slow", NodeKind::PrimaryOutput).unwrap();
        g.connect(a, slow).unwrap();
        g.connect(a, out_fast).unwrap();
        g.connect(slow, out_slow).unwrap();

        let report = analyze(&g, &StaConfig::default());
        // Deadline 0.7 set by out_slow; out_fast has 0.7 of margin.
        assert_eq!(report.deadline_ns, Some(0.7));
        assert_eq!(timing(&report, "out_fast").slack_ns, Some(0.7));
        assert_eq!(timing(&report, "out_slow").slack_ns, Some(0.0));
        let path = report.critical_path.unwrap();
        assert_eq!(path.elements.last().unwrap().name, "out_slow");
    }

    #[test]
    fn tie_between_endpoints_picks_lowest_index() {
        let mut g = CircuitGraph::new();
        let a = g.add_node("a", NodeKind::PrimaryInput).unwrap();
        let o1 = g.add_node("o1", NodeKind::PrimaryOutput).unwrap();
        let o2 = g.add_node("o2", NodeKind::PrimaryOutput).unwrap();
        g.connect(a, o1).unwrap();
        g.connect(a, o2).unwrap();

        let report = analyze(&g, &StaConfig::default());
        let path = report.critical_path.unwrap();
        assert_eq!(path.elements.last().unwrap().name, "o1");
    }

    #[test]
    fn custom_delay_table_applies() {
        let mut g = CircuitGraph::new();
        let a = g.add_node("a", NodeKind::PrimaryInput).unwrap();
        let gate = g.add_node("gate", NodeKind::Gate(GateKind::And)).unwrap();
        let out = g.add_node("out", NodeKind::PrimaryOutput).unwrap();
        g.connect(a, gate).unwrap();
        g.connect(gate, out).unwrap();

        let config = StaConfig {
            delay_table: DelayTable {
                and: 2.0,
                ..Default::default()
            },
            target_period_ns: None,
        };
        let report = analyze(&g, &config);
        assert_eq!(timing(&report, "out").arrival_ns, 2.0);
        assert_eq!(timing(&report, "gate").delay_ns, 2.0);
    }

    #[test]
    fn max_frequency_from_critical_delay() {
        let mut g = CircuitGraph::new();
        let a = g.add_node("a", NodeKind::PrimaryInput).unwrap();
        let gate = g.add_node("gate", NodeKind::Gate(GateKind::Nor)).unwrap();
        let out = g.add_node("out", NodeKind::PrimaryOutput).unwrap();
        g.connect(a, gate).unwrap();
        g.connect(gate, out).unwrap();

        // Critical delay 0.5 ns => 2 GHz.
        let report = analyze(&g, &StaConfig::default());
        let freq = report.max_frequency.unwrap();
        assert!((freq.ghz() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn frequency_capped_for_zero_length_paths() {
        // A single primary output with no drivers has a zero-delay path.
        let mut g = CircuitGraph::new();
        g.add_node("out", NodeKind::PrimaryOutput).unwrap();
        let report = analyze(&g, &StaConfig::default());
        assert!(report.max_frequency.is_none());
    }

    #[test]
    fn rerun_is_idempotent() {
        let mut g = CircuitGraph::new();
        let a = g.add_node("a", NodeKind::PrimaryInput).unwrap();
        let b = g.add_node("b", NodeKind::Gate(GateKind::Xor)).unwrap();
        let c = g.add_node("c", NodeKind::PrimaryOutput).unwrap();
        g.connect(a, b).unwrap();
        g.connect(b, c).unwrap();

        let config = StaConfig::default();
        let sink = DiagnosticSink::new();
        let first = analyze_timing(&g, &config, &sink).unwrap();
        let second = analyze_timing(&g, &config, &sink).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
