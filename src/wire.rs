use std::fmt::{Display, Formatter};

use crate::gate::GateId;
use crate::level::Level;

/// A lightweight handle to a wire inside a [`Circuit`][crate::circuit::Circuit].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct WireId(pub(crate) u32);

impl WireId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for WireId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// A single-input, multi-output signal carrier.
///
/// A wire forwards whatever level it is driven with to every registered
/// `(gate, slot)` destination, in registration order. The destination list is
/// populated during construction and stays immutable during simulation. The
/// last driven level is recorded so a wire designated as a circuit output can
/// be read back.
#[derive(Debug, Clone, Default)]
pub(crate) struct Wire {
    pub(crate) dests: Vec<(GateId, usize)>,
    pub(crate) level: Level,
}
