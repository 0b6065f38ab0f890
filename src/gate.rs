use std::fmt::{Display, Formatter};

use crate::level::Level;
use crate::wire::WireId;

/// Number of input slots per gate.
pub const GATE_FAN_IN: usize = 2;

/// The closed set of gate shapes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GateKind {
    And,
    Or,
    Xor,
}

impl GateKind {
    /// Evaluates the gate function on two levels.
    ///
    /// `Undefined` in either operand propagates before the gate logic applies.
    pub fn eval(self, a: Level, b: Level) -> Level {
        match self {
            GateKind::And => a & b,
            GateKind::Or => a | b,
            GateKind::Xor => a ^ b,
        }
    }
}

impl Display for GateKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GateKind::And => write!(f, "AND"),
            GateKind::Or => write!(f, "OR"),
            GateKind::Xor => write!(f, "XOR"),
        }
    }
}

/// A lightweight handle to a gate inside a [`Circuit`][crate::circuit::Circuit].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GateId(pub(crate) u32);

impl GateId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for GateId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// A two-input combinational element.
///
/// The output is a pure function of the two input slots; there is no hidden
/// state. Slots start `Undefined` and are re-initialized by
/// [`Circuit::reset`][crate::circuit::Circuit::reset].
#[derive(Debug, Clone)]
pub(crate) struct Gate {
    pub(crate) kind: GateKind,
    pub(crate) inputs: [Level; GATE_FAN_IN],
    pub(crate) output: Level,
    pub(crate) out_wire: Option<WireId>,
}

impl Gate {
    pub(crate) fn new(kind: GateKind) -> Self {
        Self {
            kind,
            inputs: [Level::Undefined; GATE_FAN_IN],
            output: Level::Undefined,
            out_wire: None,
        }
    }

    /// Recomputes the output from the current inputs and returns it.
    pub(crate) fn recompute(&mut self) -> Level {
        self.output = self.kind.eval(self.inputs[0], self.inputs[1]);
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use Level::{High, Low, Undefined};

    #[test]
    fn test_and_truth_table() {
        assert_eq!(GateKind::And.eval(Low, Low), Low);
        assert_eq!(GateKind::And.eval(Low, High), Low);
        assert_eq!(GateKind::And.eval(High, Low), Low);
        assert_eq!(GateKind::And.eval(High, High), High);
    }

    #[test]
    fn test_or_truth_table() {
        assert_eq!(GateKind::Or.eval(Low, Low), Low);
        assert_eq!(GateKind::Or.eval(Low, High), High);
        assert_eq!(GateKind::Or.eval(High, Low), High);
        assert_eq!(GateKind::Or.eval(High, High), High);
    }

    #[test]
    fn test_xor_truth_table() {
        assert_eq!(GateKind::Xor.eval(Low, Low), Low);
        assert_eq!(GateKind::Xor.eval(Low, High), High);
        assert_eq!(GateKind::Xor.eval(High, Low), High);
        assert_eq!(GateKind::Xor.eval(High, High), Low);
    }

    #[test]
    fn test_undefined_input_poisons_every_kind() {
        for kind in [GateKind::And, GateKind::Or, GateKind::Xor] {
            for x in [Undefined, Low, High] {
                assert_eq!(kind.eval(Undefined, x), Undefined);
                assert_eq!(kind.eval(x, Undefined), Undefined);
            }
        }
    }

    #[test]
    fn test_fresh_gate_is_undefined() {
        let mut gate = Gate::new(GateKind::And);
        assert_eq!(gate.output, Undefined);
        gate.inputs[0] = High;
        assert_eq!(gate.recompute(), Undefined);
        gate.inputs[1] = High;
        assert_eq!(gate.recompute(), High);
    }
}
