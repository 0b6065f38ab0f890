//! The circuit manager.
//!
//! All gates and wires live inside a [`Circuit`], which hands out lightweight
//! [`GateId`]/[`WireId`] handles. Construction (adding elements, wiring them
//! together) and simulation (driving levels, reading outputs) both go through
//! the manager, so handles stay valid for the life of the circuit.
//!
//! Propagation is synchronous and eager: every [`Circuit::drive`] call resolves
//! all of its transitive downstream effects before returning. Termination is
//! guaranteed because [`Circuit::connect`] and [`Circuit::connect_output`]
//! reject any connection that would close a feedback loop.

use log::debug;

use crate::error::{Error, Result};
use crate::gate::{Gate, GateId, GateKind, GATE_FAN_IN};
use crate::level::Level;
use crate::wire::{Wire, WireId};

/// Default fan-out cap: how many gate inputs one wire may drive.
pub const DEFAULT_FANOUT_CAP: usize = 2;

/// An acyclic network of two-input gates connected by wires.
pub struct Circuit {
    gates: Vec<Gate>,
    wires: Vec<Wire>,
    fanout_cap: usize,
}

impl Circuit {
    pub fn new() -> Self {
        Self::with_fanout_cap(DEFAULT_FANOUT_CAP)
    }

    /// Creates a circuit with a custom per-wire fan-out cap.
    pub fn with_fanout_cap(fanout_cap: usize) -> Self {
        assert!(fanout_cap >= 1, "Fan-out cap must be at least 1");
        Self {
            gates: Vec::new(),
            wires: Vec::new(),
            fanout_cap,
        }
    }

    pub fn fanout_cap(&self) -> usize {
        self.fanout_cap
    }

    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    pub fn num_wires(&self) -> usize {
        self.wires.len()
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Circuit::new()
    }
}

// Construction
impl Circuit {
    pub fn add_gate(&mut self, kind: GateKind) -> GateId {
        let id = GateId(self.gates.len() as u32);
        self.gates.push(Gate::new(kind));
        id
    }

    pub fn add_wire(&mut self) -> WireId {
        let id = WireId(self.wires.len() as u32);
        self.wires.push(Wire::default());
        id
    }

    /// Appends `(gate, slot)` to the wire's destination list.
    ///
    /// Fails with [`Error::InvalidSlot`] if `slot` is not 0 or 1, with
    /// [`Error::FanoutExceeded`] if the wire already drives `fanout_cap`
    /// inputs, and with [`Error::CycleDetected`] if the new edge would close a
    /// feedback loop. On failure the existing connections are left intact.
    pub fn connect(&mut self, wire: WireId, gate: GateId, slot: usize) -> Result<()> {
        if slot >= GATE_FAN_IN {
            return Err(Error::InvalidSlot(slot));
        }
        if self.wires[wire.index()].dests.len() >= self.fanout_cap {
            return Err(Error::FanoutExceeded {
                cap: self.fanout_cap,
            });
        }
        // The gate's output feeding back into `wire` would loop.
        if let Some(out) = self.gates[gate.index()].out_wire {
            if self.reaches_wire(out, wire) {
                return Err(Error::CycleDetected);
            }
        }
        self.wires[wire.index()].dests.push((gate, slot));
        Ok(())
    }

    /// Registers the single downstream wire that receives every future output
    /// change of `gate`.
    pub fn connect_output(&mut self, gate: GateId, wire: WireId) -> Result<()> {
        if self.reaches_gate(wire, gate) {
            return Err(Error::CycleDetected);
        }
        self.gates[gate.index()].out_wire = Some(wire);
        Ok(())
    }

    /// Depth-first search over the wire -> gate -> output-wire graph.
    fn reaches_wire(&self, from: WireId, target: WireId) -> bool {
        let mut seen = vec![false; self.wires.len()];
        let mut stack = vec![from];
        while let Some(w) = stack.pop() {
            if w == target {
                return true;
            }
            if seen[w.index()] {
                continue;
            }
            seen[w.index()] = true;
            for &(gate, _) in &self.wires[w.index()].dests {
                if let Some(out) = self.gates[gate.index()].out_wire {
                    stack.push(out);
                }
            }
        }
        false
    }

    fn reaches_gate(&self, from: WireId, target: GateId) -> bool {
        let mut seen = vec![false; self.wires.len()];
        let mut stack = vec![from];
        while let Some(w) = stack.pop() {
            if seen[w.index()] {
                continue;
            }
            seen[w.index()] = true;
            for &(gate, _) in &self.wires[w.index()].dests {
                if gate == target {
                    return true;
                }
                if let Some(out) = self.gates[gate.index()].out_wire {
                    stack.push(out);
                }
            }
        }
        false
    }
}

// Simulation
impl Circuit {
    /// Drives the wire with `level`, forwarding it to every destination in
    /// registration order. All transitive effects (gates recomputing and
    /// driving their own output wires) are resolved before this returns.
    ///
    /// Driving a wire with no destinations only records the level, which can
    /// be read back with [`Circuit::level`].
    pub fn drive(&mut self, wire: WireId, level: Level) {
        debug!("drive {} = {}", wire, level);
        self.wires[wire.index()].level = level;
        // Destination lists are immutable during simulation.
        let dests = self.wires[wire.index()].dests.clone();
        for (gate, slot) in dests {
            self.drive_input(gate, slot, level);
        }
    }

    /// Sets one gate input and recomputes the output immediately. If an output
    /// wire is connected, the new output is pushed onto it right away.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not 0 or 1. Driving an out-of-range slot is a
    /// programming-contract violation, not a recoverable condition.
    pub fn drive_input(&mut self, gate: GateId, slot: usize, level: Level) {
        assert!(slot < GATE_FAN_IN, "Input slot out of range: {}", slot);
        let g = &mut self.gates[gate.index()];
        g.inputs[slot] = level;
        let output = g.recompute();
        let out_wire = g.out_wire;
        if let Some(out) = out_wire {
            self.drive(out, output);
        }
    }

    /// Returns the gate's current output without side effects.
    pub fn output(&self, gate: GateId) -> Level {
        self.gates[gate.index()].output
    }

    /// Returns the level last driven onto the wire.
    pub fn level(&self, wire: WireId) -> Level {
        self.wires[wire.index()].level
    }

    /// Re-initializes every gate input and wire level to `Undefined`.
    ///
    /// Topology (destination lists, output connections) is untouched, so the
    /// circuit can be re-simulated with fresh inputs.
    pub fn reset(&mut self) {
        for gate in self.gates.iter_mut() {
            gate.inputs = [Level::Undefined; GATE_FAN_IN];
            gate.output = Level::Undefined;
        }
        for wire in self.wires.iter_mut() {
            wire.level = Level::Undefined;
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    use Level::{High, Low, Undefined};

    #[test]
    fn test_gate_recomputes_on_each_drive() {
        let mut circuit = Circuit::new();
        let a = circuit.add_wire();
        let b = circuit.add_wire();
        let and = circuit.add_gate(GateKind::And);
        circuit.connect(a, and, 0).unwrap();
        circuit.connect(b, and, 1).unwrap();

        assert_eq!(circuit.output(and), Undefined);
        circuit.drive(a, High);
        // Only one input driven so far.
        assert_eq!(circuit.output(and), Undefined);
        circuit.drive(b, High);
        assert_eq!(circuit.output(and), High);
        circuit.drive(b, Low);
        assert_eq!(circuit.output(and), Low);
    }

    #[test]
    fn test_propagation_through_chain() {
        // (a AND b) -> mid -> (mid OR c)
        let mut circuit = Circuit::new();
        let a = circuit.add_wire();
        let b = circuit.add_wire();
        let c = circuit.add_wire();
        let mid = circuit.add_wire();
        let and = circuit.add_gate(GateKind::And);
        let or = circuit.add_gate(GateKind::Or);
        circuit.connect(a, and, 0).unwrap();
        circuit.connect(b, and, 1).unwrap();
        circuit.connect_output(and, mid).unwrap();
        circuit.connect(mid, or, 0).unwrap();
        circuit.connect(c, or, 1).unwrap();

        circuit.drive(a, High);
        circuit.drive(b, High);
        circuit.drive(c, Low);
        assert_eq!(circuit.output(or), High);

        circuit.drive(b, Low);
        assert_eq!(circuit.level(mid), Low);
        assert_eq!(circuit.output(or), Low);
    }

    #[test]
    fn test_fanout_cap_enforced() {
        let mut circuit = Circuit::new();
        let w = circuit.add_wire();
        let g1 = circuit.add_gate(GateKind::And);
        let g2 = circuit.add_gate(GateKind::And);
        let g3 = circuit.add_gate(GateKind::And);

        circuit.connect(w, g1, 0).unwrap();
        circuit.connect(w, g2, 0).unwrap();
        assert_eq!(
            circuit.connect(w, g3, 0),
            Err(Error::FanoutExceeded { cap: 2 })
        );

        // Prior connections are intact: both gates still get driven.
        circuit.drive(w, High);
        let probe = |circuit: &mut Circuit, gate| {
            circuit.drive_input(gate, 1, High);
            circuit.output(gate)
        };
        assert_eq!(probe(&mut circuit, g1), High);
        assert_eq!(probe(&mut circuit, g2), High);
    }

    #[test]
    fn test_custom_fanout_cap() {
        let mut circuit = Circuit::with_fanout_cap(3);
        let w = circuit.add_wire();
        for _ in 0..3 {
            let g = circuit.add_gate(GateKind::Or);
            circuit.connect(w, g, 0).unwrap();
        }
        let g = circuit.add_gate(GateKind::Or);
        assert_eq!(
            circuit.connect(w, g, 0),
            Err(Error::FanoutExceeded { cap: 3 })
        );
    }

    #[test]
    fn test_invalid_slot_rejected() {
        let mut circuit = Circuit::new();
        let w = circuit.add_wire();
        let g = circuit.add_gate(GateKind::Xor);
        assert_eq!(circuit.connect(w, g, 2), Err(Error::InvalidSlot(2)));
    }

    #[test]
    #[should_panic(expected = "Input slot out of range")]
    fn test_drive_input_bad_slot_panics() {
        let mut circuit = Circuit::new();
        let g = circuit.add_gate(GateKind::And);
        circuit.drive_input(g, 2, High);
    }

    #[test]
    fn test_self_cycle_rejected() {
        let mut circuit = Circuit::new();
        let w = circuit.add_wire();
        let g = circuit.add_gate(GateKind::And);
        circuit.connect_output(g, w).unwrap();
        assert_eq!(circuit.connect(w, g, 0), Err(Error::CycleDetected));
    }

    #[test]
    fn test_two_gate_cycle_rejected() {
        // g1 -> w1 -> g2 -> w2 -> g1 must be refused at the closing edge.
        let mut circuit = Circuit::new();
        let w1 = circuit.add_wire();
        let w2 = circuit.add_wire();
        let g1 = circuit.add_gate(GateKind::And);
        let g2 = circuit.add_gate(GateKind::Or);
        circuit.connect_output(g1, w1).unwrap();
        circuit.connect(w1, g2, 0).unwrap();
        circuit.connect_output(g2, w2).unwrap();
        assert_eq!(circuit.connect(w2, g1, 0), Err(Error::CycleDetected));
    }

    #[test]
    fn test_cycle_rejected_on_connect_output() {
        // w -> g already exists, so wiring g's output back to w must fail.
        let mut circuit = Circuit::new();
        let w = circuit.add_wire();
        let g = circuit.add_gate(GateKind::And);
        circuit.connect(w, g, 0).unwrap();
        assert_eq!(circuit.connect_output(g, w), Err(Error::CycleDetected));
    }

    #[test]
    fn test_unconnected_wire_records_level() {
        let mut circuit = Circuit::new();
        let w = circuit.add_wire();
        assert_eq!(circuit.level(w), Undefined);
        circuit.drive(w, High);
        assert_eq!(circuit.level(w), High);
    }

    #[test]
    fn test_reset_clears_state_but_not_topology() {
        let mut circuit = Circuit::new();
        let a = circuit.add_wire();
        let b = circuit.add_wire();
        let xor = circuit.add_gate(GateKind::Xor);
        circuit.connect(a, xor, 0).unwrap();
        circuit.connect(b, xor, 1).unwrap();

        circuit.drive(a, High);
        circuit.drive(b, Low);
        assert_eq!(circuit.output(xor), High);

        circuit.reset();
        assert_eq!(circuit.output(xor), Undefined);
        assert_eq!(circuit.level(a), Undefined);

        circuit.drive(a, Low);
        circuit.drive(b, Low);
        assert_eq!(circuit.output(xor), Low);
    }
}
