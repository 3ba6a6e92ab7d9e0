//! Error types for graph construction and timing analysis.

/// Errors raised while building a circuit graph.
///
/// All variants are raised synchronously by the mutating call and leave the
/// graph unchanged; the caller must fix the input and retry.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A node with the same name already exists in the graph.
    #[error("duplicate node name '{name}'")]
    DuplicateNode {
        /// The name that was already taken.
        name: String,
    },

    /// The graph has reached its configured node capacity.
    #[error("node capacity exceeded: graph is limited to {limit} nodes")]
    CapacityExceeded {
        /// The configured maximum node count.
        limit: usize,
    },

    /// A node cannot be connected to itself.
    #[error("cannot connect node '{name}' to itself")]
    SelfLoop {
        /// The name of the node.
        name: String,
    },

    /// The connection would push a node past its configured arity bound,
    /// on either the fan-out side of the source or the fan-in side of the
    /// destination.
    #[error("connection limit reached on node '{name}' (max {limit})")]
    FanoutLimit {
        /// The name of the node at its arity bound.
        name: String,
        /// The configured arity bound that was hit.
        limit: usize,
    },

    /// A node ID does not refer to any node in this graph.
    #[error("unknown node index {index}")]
    UnknownNode {
        /// The raw index that was out of range.
        index: u32,
    },
}

/// Errors that abort a timing analysis run.
///
/// No partial timing result is produced: arrival and required times are
/// undefined without a valid topological order.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The graph contains a cycle, which is illegal for static timing
    /// analysis. Names one node left on (or downstream of) the cycle.
    #[error("combinational loop detected through node '{name}'")]
    CombinationalLoop {
        /// The name of a node with unresolved dependencies.
        name: String,
    },
}
