//! Static timing analysis for combinational gate networks.
//!
//! This crate provides a circuit graph representation (primary inputs,
//! primary outputs, logic gates with per-kind intrinsic delays) and a
//! single-clock static timing analysis (STA) engine. It computes arrival
//! times, required times, and slack at every node, then extracts the
//! critical path bounding the circuit's maximum operating frequency.
//!
//! # Usage
//!
//! ```
//! use tempus_diagnostics::DiagnosticSink;
//! use tempus_sta::{analyze_timing, CircuitGraph, GateKind, NodeKind, StaConfig};
//!
//! let mut graph = CircuitGraph::new();
//! let in1 = graph.add_node("IN1", NodeKind::PrimaryInput).unwrap();
//! let inv = graph.add_node("INV1", NodeKind::Gate(GateKind::Not)).unwrap();
//! let out = graph.add_node("OUT", NodeKind::PrimaryOutput).unwrap();
//! graph.connect(in1, inv).unwrap();
//! graph.connect(inv, out).unwrap();
//!
//! let sink = DiagnosticSink::new();
//! let report = analyze_timing(&graph, &StaConfig::default(), &sink).unwrap();
//! assert!(report.met);
//! println!("{}", report.render_text());
//! ```
//!
//! # Architecture
//!
//! - [`graph`] — circuit graph (nodes with fan-in/fan-out adjacency)
//! - [`ids`] — arena-index node IDs
//! - [`delay`] — per-kind intrinsic delay table
//! - [`topo`] — topological sequencing (Kahn's algorithm, cycle detection)
//! - [`sta`] — forward/backward propagation, slack, critical path
//! - [`report`] — timing report types and text rendering
//! - [`error`] — graph construction and analysis error types

#![warn(missing_docs)]

pub mod delay;
pub mod error;
pub mod graph;
pub mod ids;
pub mod report;
pub mod sta;
pub mod topo;

pub use delay::DelayTable;
pub use error::{AnalysisError, GraphError};
pub use graph::{CircuitGraph, GateKind, GraphLimits, NodeKind, TimingNode};
pub use ids::NodeId;
pub use report::{CriticalPath, NodeTiming, PathElement, TimingReport};
pub use sta::{analyze_timing, StaConfig};
pub use topo::topological_order;
