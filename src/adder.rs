//! Adder circuits built from gates and wires.
//!
//! A [`HalfAdder`] is one XOR (sum) and one AND (carry) over two shared input
//! wires. A [`FullAdder`] is the canonical decomposition into two chained
//! half-adds with the carries ORed. A [`ParallelAdder`] chains one half adder
//! and N-1 full adders into an N-bit ripple-carry adder.
//!
//! Each adder owns its gates and wires outright (a private [`Circuit`] per
//! instance), and inter-stage carries are threaded by value. `compute`/`add`
//! are repeatable on one instance: internal state is reset to `Undefined`
//! before every call, so nothing leaks between computations.

use log::debug;

use crate::circuit::Circuit;
use crate::error::{Error, Result};
use crate::gate::{GateId, GateKind};
use crate::level::Level;
use crate::wire::WireId;

/// The (sum, carry) pair produced by one adder stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AdderResult {
    pub sum: Level,
    pub carry: Level,
}

/// Adds two bits: sum = a XOR b, carry = a AND b.
pub struct HalfAdder {
    circuit: Circuit,
    a: WireId,
    b: WireId,
    xor: GateId,
    and: GateId,
}

impl HalfAdder {
    pub fn new() -> Self {
        let mut circuit = Circuit::new();
        let a = circuit.add_wire();
        let b = circuit.add_wire();
        let xor = circuit.add_gate(GateKind::Xor);
        let and = circuit.add_gate(GateKind::And);
        // Each input wire fans out to both gates.
        circuit.connect(a, xor, 0).expect("static wiring");
        circuit.connect(b, xor, 1).expect("static wiring");
        circuit.connect(a, and, 0).expect("static wiring");
        circuit.connect(b, and, 1).expect("static wiring");
        Self {
            circuit,
            a,
            b,
            xor,
            and,
        }
    }

    pub fn compute(&mut self, a: Level, b: Level) -> AdderResult {
        self.circuit.reset();
        self.circuit.drive(self.a, a);
        self.circuit.drive(self.b, b);
        let result = AdderResult {
            sum: self.circuit.output(self.xor),
            carry: self.circuit.output(self.and),
        };
        debug!("half-add {} + {} -> {:?}", a, b, result);
        result
    }
}

impl Default for HalfAdder {
    fn default() -> Self {
        HalfAdder::new()
    }
}

/// Adds three bits (two operands plus a carry-in).
///
/// Composed as two chained half-adds with the carries ORed:
/// `first = a + b`, `second = carry_in + first.sum`,
/// `carry_out = first.carry OR second.carry`, `sum = second.sum`.
pub struct FullAdder {
    lo: HalfAdder,
    hi: HalfAdder,
    carries: Circuit,
    c1: WireId,
    c2: WireId,
    or: GateId,
}

impl FullAdder {
    pub fn new() -> Self {
        let mut carries = Circuit::new();
        let c1 = carries.add_wire();
        let c2 = carries.add_wire();
        let or = carries.add_gate(GateKind::Or);
        carries.connect(c1, or, 0).expect("static wiring");
        carries.connect(c2, or, 1).expect("static wiring");
        Self {
            lo: HalfAdder::new(),
            hi: HalfAdder::new(),
            carries,
            c1,
            c2,
            or,
        }
    }

    pub fn compute(&mut self, a: Level, b: Level, carry_in: Level) -> AdderResult {
        let first = self.lo.compute(a, b);
        let second = self.hi.compute(carry_in, first.sum);
        self.carries.reset();
        self.carries.drive(self.c1, first.carry);
        self.carries.drive(self.c2, second.carry);
        let result = AdderResult {
            sum: second.sum,
            carry: self.carries.output(self.or),
        };
        debug!("full-add {} + {} + {} -> {:?}", a, b, carry_in, result);
        result
    }
}

impl Default for FullAdder {
    fn default() -> Self {
        FullAdder::new()
    }
}

/// An N-bit ripple-carry adder: one half adder for bit 0 and a full adder for
/// every higher bit, each stage's carry-out feeding the next stage's carry-in.
pub struct ParallelAdder {
    width: usize,
    first: HalfAdder,
    rest: Vec<FullAdder>,
}

impl ParallelAdder {
    /// Creates an adder for two `width`-bit operands.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero.
    pub fn new(width: usize) -> Self {
        assert!(width >= 1, "Adder width must be at least 1");
        Self {
            width,
            first: HalfAdder::new(),
            rest: (1..width).map(|_| FullAdder::new()).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Adds two operands given LSB first, returning the sum bits (LSB first)
    /// and the final carry-out.
    ///
    /// Fails with [`Error::InvalidWidth`] if either operand does not have
    /// exactly `width` bits.
    pub fn add(&mut self, a: &[Level], b: &[Level]) -> Result<(Vec<Level>, Level)> {
        for operand in [a, b] {
            if operand.len() != self.width {
                return Err(Error::InvalidWidth {
                    expected: self.width,
                    actual: operand.len(),
                });
            }
        }

        let mut sum = Vec::with_capacity(self.width);
        let stage0 = self.first.compute(a[0], b[0]);
        debug!("stage 0: {:?}", stage0);
        sum.push(stage0.sum);

        let mut carry = stage0.carry;
        for (i, stage) in self.rest.iter_mut().enumerate() {
            let result = stage.compute(a[i + 1], b[i + 1], carry);
            debug!("stage {}: {:?}", i + 1, result);
            sum.push(result.sum);
            carry = result.carry;
        }
        Ok((sum, carry))
    }
}
