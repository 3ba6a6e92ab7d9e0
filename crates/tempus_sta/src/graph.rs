//! Circuit graph data structures for static timing analysis.
//!
//! The [`CircuitGraph`] is a directed graph of timing nodes: primary inputs,
//! primary outputs, and logic gates. Adjacency is stored on the nodes as
//! fan-in and fan-out lists, since physical gates have bounded arity and
//! both propagation passes iterate a node's direct neighbors.
//!
//! Nodes and edges are created during graph construction and never removed.
//! Node indices are stable for the lifetime of the graph, so consumers may
//! cache [`NodeId`]s across analysis runs.

use crate::error::GraphError;
use crate::ids::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Capacity limits enforced during graph construction.
///
/// Adversarial inputs (pathological fan-out chains) are rejected at the
/// mutating call instead of being discovered mid-analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLimits {
    /// Maximum number of nodes the graph may hold.
    pub max_nodes: usize,
    /// Maximum fan-in per node.
    pub max_fanin: usize,
    /// Maximum fan-out per node.
    pub max_fanout: usize,
}

impl Default for GraphLimits {
    fn default() -> Self {
        Self {
            max_nodes: 4096,
            max_fanin: 4,
            max_fanout: 4,
        }
    }
}

/// The logic function of a gate node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    /// Logical AND.
    And,
    /// Logical OR.
    Or,
    /// Logical NOT (inverter).
    Not,
    /// Logical NAND.
    Nand,
    /// Logical NOR.
    Nor,
    /// Logical XOR.
    Xor,
}

impl GateKind {
    /// Returns the conventional upper-case name of this gate function.
    pub fn label(self) -> &'static str {
        match self {
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Not => "NOT",
            GateKind::Nand => "NAND",
            GateKind::Nor => "NOR",
            GateKind::Xor => "XOR",
        }
    }
}

/// The functional type of a circuit node.
///
/// Determines the node's intrinsic delay and how the propagation passes
/// treat it: primary inputs anchor arrival times at zero, primary outputs
/// anchor required times at the analysis deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// A primary input port of the circuit.
    PrimaryInput,
    /// A primary output port of the circuit.
    PrimaryOutput,
    /// A logic gate with the given function.
    Gate(GateKind),
}

impl NodeKind {
    /// Returns `true` for [`NodeKind::PrimaryInput`].
    pub fn is_primary_input(self) -> bool {
        self == NodeKind::PrimaryInput
    }

    /// Returns `true` for [`NodeKind::PrimaryOutput`].
    pub fn is_primary_output(self) -> bool {
        self == NodeKind::PrimaryOutput
    }

    /// Returns the conventional upper-case name of this node kind.
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::PrimaryInput => "INPUT",
            NodeKind::PrimaryOutput => "OUTPUT",
            NodeKind::Gate(gate) => gate.label(),
        }
    }
}

/// A node in the circuit graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingNode {
    /// The unique ID of this node.
    pub id: NodeId,
    /// Human-readable name of this node (e.g., "IN1", "AND1").
    pub name: String,
    /// The functional type of this node.
    pub kind: NodeKind,
    /// IDs of the nodes driving this node, in connection order.
    pub fanin: Vec<NodeId>,
    /// IDs of the nodes driven by this node, in connection order.
    pub fanout: Vec<NodeId>,
}

/// A circuit graph for static timing analysis.
///
/// Owns all nodes by index in a dense array. Every edge (u→v) appears
/// exactly once in `u`'s fan-out and once in `v`'s fan-in; [`connect`]
/// maintains both sides or neither.
///
/// [`connect`]: CircuitGraph::connect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitGraph {
    nodes: Vec<TimingNode>,
    names: HashMap<String, NodeId>,
    limits: GraphLimits,
}

impl CircuitGraph {
    /// Creates an empty graph with default limits.
    pub fn new() -> Self {
        Self::with_limits(GraphLimits::default())
    }

    /// Creates an empty graph with the given capacity limits.
    pub fn with_limits(limits: GraphLimits) -> Self {
        Self {
            nodes: Vec::new(),
            names: HashMap::new(),
            limits,
        }
    }

    /// Adds a node to the graph and returns its ID.
    ///
    /// Fails if the name is already taken or the graph is at its node
    /// capacity; the graph is unchanged on failure.
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        kind: NodeKind,
    ) -> Result<NodeId, GraphError> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(GraphError::DuplicateNode { name });
        }
        if self.nodes.len() >= self.limits.max_nodes {
            return Err(GraphError::CapacityExceeded {
                limit: self.limits.max_nodes,
            });
        }

        let id = NodeId::from_raw(self.nodes.len() as u32);
        self.names.insert(name.clone(), id);
        self.nodes.push(TimingNode {
            id,
            name,
            kind,
            fanin: Vec::new(),
            fanout: Vec::new(),
        });
        Ok(id)
    }

    /// Adds a directed edge from `from` to `to`.
    ///
    /// Fails on self-loops, unknown IDs, or when either endpoint is at its
    /// configured arity bound; the graph is unchanged on failure. Parallel
    /// edges are permitted (a gate may tie two of its inputs to one driver),
    /// each consuming one fan-in and one fan-out slot.
    pub fn connect(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        self.check_id(from)?;
        self.check_id(to)?;
        if from == to {
            return Err(GraphError::SelfLoop {
                name: self.nodes[from.index()].name.clone(),
            });
        }
        if self.nodes[from.index()].fanout.len() >= self.limits.max_fanout {
            return Err(GraphError::FanoutLimit {
                name: self.nodes[from.index()].name.clone(),
                limit: self.limits.max_fanout,
            });
        }
        if self.nodes[to.index()].fanin.len() >= self.limits.max_fanin {
            return Err(GraphError::FanoutLimit {
                name: self.nodes[to.index()].name.clone(),
                limit: self.limits.max_fanin,
            });
        }

        self.nodes[from.index()].fanout.push(to);
        self.nodes[to.index()].fanin.push(from);
        Ok(())
    }

    fn check_id(&self, id: NodeId) -> Result<(), GraphError> {
        if id.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownNode { index: id.as_raw() })
        }
    }

    /// Returns the node with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not returned by this graph's [`add_node`].
    ///
    /// [`add_node`]: CircuitGraph::add_node
    pub fn node(&self, id: NodeId) -> &TimingNode {
        &self.nodes[id.index()]
    }

    /// Returns the ID of the node with the given name, if any.
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    /// Returns all nodes in creation order.
    pub fn nodes(&self) -> &[TimingNode] {
        &self.nodes
    }

    /// Returns the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the capacity limits this graph was created with.
    pub fn limits(&self) -> GraphLimits {
        self.limits
    }

    /// Returns the IDs of all primary output nodes, in creation order.
    pub fn primary_outputs(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|n| n.kind.is_primary_output())
            .map(|n| n.id)
            .collect()
    }
}

impl Default for CircuitGraph {
    fn default() -> Self {
        Self::new()
    }
}
