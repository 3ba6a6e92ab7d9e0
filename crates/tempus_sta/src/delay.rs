//! Intrinsic delay lookup per node kind.

use crate::graph::{GateKind, NodeKind};
use serde::{Deserialize, Serialize};

/// Intrinsic propagation delays per node kind, in nanoseconds.
///
/// A node's delay is charged on the hop out of it: a successor's arrival
/// time is the driver's arrival time plus the driver's intrinsic delay.
/// All entries must be non-negative. The defaults model a generic standard
/// cell library; configuration may override any entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DelayTable {
    /// Delay of AND gates.
    pub and: f64,
    /// Delay of OR gates.
    pub or: f64,
    /// Delay of NOT gates.
    pub not: f64,
    /// Delay of NAND gates.
    pub nand: f64,
    /// Delay of NOR gates.
    pub nor: f64,
    /// Delay of XOR gates.
    pub xor: f64,
    /// Delay of primary inputs.
    pub input: f64,
    /// Delay of primary outputs.
    pub output: f64,
}

impl DelayTable {
    /// Returns the intrinsic delay for the given node kind.
    pub fn delay_of(&self, kind: NodeKind) -> f64 {
        match kind {
            NodeKind::PrimaryInput => self.input,
            NodeKind::PrimaryOutput => self.output,
            NodeKind::Gate(GateKind::And) => self.and,
            NodeKind::Gate(GateKind::Or) => self.or,
            NodeKind::Gate(GateKind::Not) => self.not,
            NodeKind::Gate(GateKind::Nand) => self.nand,
            NodeKind::Gate(GateKind::Nor) => self.nor,
            NodeKind::Gate(GateKind::Xor) => self.xor,
        }
    }
}

impl Default for DelayTable {
    fn default() -> Self {
        Self {
            and: 0.5,
            or: 0.6,
            not: 0.3,
            nand: 0.4,
            nor: 0.5,
            xor: 0.7,
            input: 0.0,
            output: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table() {
        let t = DelayTable::default();
        assert_eq!(t.delay_of(NodeKind::Gate(GateKind::And)), 0.5);
        assert_eq!(t.delay_of(NodeKind::Gate(GateKind::Or)), 0.6);
        assert_eq!(t.delay_of(NodeKind::Gate(GateKind::Not)), 0.3);
        assert_eq!(t.delay_of(NodeKind::Gate(GateKind::Nand)), 0.4);
        assert_eq!(t.delay_of(NodeKind::Gate(GateKind::Nor)), 0.5);
        assert_eq!(t.delay_of(NodeKind::Gate(GateKind::Xor)), 0.7);
        assert_eq!(t.delay_of(NodeKind::PrimaryInput), 0.0);
        assert_eq!(t.delay_of(NodeKind::PrimaryOutput), 0.2);
    }

    #[test]
    fn overridden_entry() {
        let t = DelayTable {
            xor: 1.25,
            ..Default::default()
        };
        assert_eq!(t.delay_of(NodeKind::Gate(GateKind::Xor)), 1.25);
        assert_eq!(t.delay_of(NodeKind::Gate(GateKind::And)), 0.5);
    }

    #[test]
    fn serde_roundtrip() {
        let t = DelayTable {
            nand: 0.45,
            ..Default::default()
        };
        let json = serde_json::to_string(&t).unwrap();
        let back: DelayTable = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
