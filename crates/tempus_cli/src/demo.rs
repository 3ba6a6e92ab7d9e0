//! The bundled demonstration circuit.

use tempus_sta::{CircuitGraph, GateKind, GraphError, GraphLimits, NodeKind};

/// Builds the sample circuit: IN1 and IN2 feed AND1, AND1 feeds NOT1,
/// NOT1 feeds the primary output OUT.
pub fn build_demo_circuit(limits: GraphLimits) -> Result<CircuitGraph, GraphError> {
    let mut graph = CircuitGraph::with_limits(limits);

    let in1 = graph.add_node("IN1", NodeKind::PrimaryInput)?;
    let in2 = graph.add_node("IN2", NodeKind::PrimaryInput)?;
    let and1 = graph.add_node("AND1", NodeKind::Gate(GateKind::And))?;
    let not1 = graph.add_node("NOT1", NodeKind::Gate(GateKind::Not))?;
    let out = graph.add_node("OUT", NodeKind::PrimaryOutput)?;

    graph.connect(in1, and1)?;
    graph.connect(in2, and1)?;
    graph.connect(and1, not1)?;
    graph.connect(not1, out)?;

    Ok(graph)
}
