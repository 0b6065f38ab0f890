//! # gatesim-rs: Combinational Logic Simulation in Rust
//!
//! **`gatesim-rs`** is a small, safe, manager-centric library for simulating **combinational
//! digital-logic circuits**: networks of two-input gates connected by wires, with tri-state
//! logic and synchronous push propagation.
//!
//! ## How it works
//!
//! Gates and wires live inside a [`Circuit`][crate::circuit::Circuit] manager, referenced by
//! lightweight copyable handles ([`GateId`][crate::gate::GateId], [`WireId`][crate::wire::WireId]).
//! Driving a wire forwards the level to every connected gate input; each gate recomputes its
//! output immediately and pushes it onto its own output wire, recursively, until the whole
//! downstream cone has settled. The circuit is acyclic by construction --- connections that
//! would close a feedback loop are rejected at wiring time --- so propagation always terminates.
//!
//! ## Key Features
//!
//! - **Tri-state logic**: [`Level`][crate::level::Level] is `Low`, `High`, or `Undefined`;
//!   `Undefined` marks not-yet-driven inputs and poisons every gate computation.
//! - **Synchronous propagation**: every `drive` call resolves all transitive effects before
//!   returning. No event queue, no time steps.
//! - **Checked construction**: fan-out caps, input-slot bounds, and cycle detection surface
//!   wiring bugs immediately as [`Error`][crate::error::Error] values.
//! - **Composable adders**: half adder, full adder, and an N-bit ripple-carry
//!   [`ParallelAdder`][crate::adder::ParallelAdder] built from the same gate primitives.
//!
//! ## Basic Usage
//!
//! ```rust
//! use gatesim_rs::adder::ParallelAdder;
//! use gatesim_rs::harness;
//! use gatesim_rs::level::Level;
//!
//! // A 3-bit ripple-carry adder: 1 half adder + 2 full adders.
//! let mut adder = ParallelAdder::new(3);
//!
//! // 3 + 5 = 8, which is 1000 in binary: all sum bits low, carry out high.
//! let a = harness::parse_bits("011", 3).unwrap();
//! let b = harness::parse_bits("101", 3).unwrap();
//! let (sum, carry) = adder.add(&a, &b).unwrap();
//!
//! assert_eq!(sum, vec![Level::Low, Level::Low, Level::Low]);
//! assert_eq!(carry, Level::High);
//! assert_eq!(harness::render_sum(&sum, carry), "1000");
//! ```
//!
//! ## Core Components
//!
//! - **[`circuit`]**: the [`Circuit`][crate::circuit::Circuit] manager --- construction,
//!   wiring, and propagation.
//! - **[`adder`]**: half/full/ripple-carry adders composed from gates.
//! - **[`harness`]**: bit-string parsing and rendering for drivers; the core itself never
//!   touches raw text.

pub mod adder;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod harness;
pub mod level;
pub mod wire;
