//! Error taxonomy for circuit construction and input validation.
//!
//! Every error here reflects a construction or validation bug, not a transient
//! condition: the simulator itself is a deterministic pure function and has no
//! recoverable error class.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A wire's fan-out capacity would be exceeded by a new connection.
    #[error("wire fan-out capacity ({cap}) exceeded")]
    FanoutExceeded { cap: usize },
    /// A connection targeted a gate input slot other than 0 or 1.
    #[error("gate input slot {0} out of range (gates have two inputs)")]
    InvalidSlot(usize),
    /// A connection would close a feedback loop.
    #[error("connection would create a cycle in the circuit")]
    CycleDetected,
    /// An operand does not have the expected number of bits.
    #[error("expected {expected} bits, got {actual}")]
    InvalidWidth { expected: usize, actual: usize },
    /// A bit string contained a character other than '0' or '1'.
    #[error("invalid bit character {0:?} (expected '0' or '1')")]
    InvalidBit(char),
}
