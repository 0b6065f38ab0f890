use std::fmt::{Display, Formatter};
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// A tri-state logic level.
///
/// `Undefined` is both the power-on default and the "not yet driven" sentinel.
/// It is never conflated with [`Level::Low`]: any binary operation with an
/// `Undefined` operand yields `Undefined`, so a gate that has not received
/// both of its inputs outputs `Undefined`.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Level {
    #[default]
    Undefined,
    Low,
    High,
}

// Constructors
impl Level {
    /// Converts a bit character ('0' or '1') into a level.
    pub const fn from_bit(c: char) -> Option<Level> {
        match c {
            '0' => Some(Level::Low),
            '1' => Some(Level::High),
            _ => None,
        }
    }
}

// Getters
impl Level {
    pub const fn is_defined(self) -> bool {
        !matches!(self, Level::Undefined)
    }

    /// Returns the boolean value, or `None` for `Undefined`.
    pub const fn to_bool(self) -> Option<bool> {
        match self {
            Level::Undefined => None,
            Level::Low => Some(false),
            Level::High => Some(true),
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Level::Undefined => 'x',
            Level::Low => '0',
            Level::High => '1',
        }
    }
}

impl From<bool> for Level {
    fn from(b: bool) -> Self {
        if b {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl BitAnd for Level {
    type Output = Level;

    fn bitand(self, rhs: Self) -> Self::Output {
        match (self.to_bool(), rhs.to_bool()) {
            (Some(a), Some(b)) => Level::from(a && b),
            _ => Level::Undefined,
        }
    }
}

impl BitOr for Level {
    type Output = Level;

    fn bitor(self, rhs: Self) -> Self::Output {
        match (self.to_bool(), rhs.to_bool()) {
            (Some(a), Some(b)) => Level::from(a || b),
            _ => Level::Undefined,
        }
    }
}

impl BitXor for Level {
    type Output = Level;

    fn bitxor(self, rhs: Self) -> Self::Output {
        match (self.to_bool(), rhs.to_bool()) {
            (Some(a), Some(b)) => Level::from(a != b),
            _ => Level::Undefined,
        }
    }
}

impl Not for Level {
    type Output = Level;

    fn not(self) -> Self::Output {
        match self.to_bool() {
            Some(b) => Level::from(!b),
            None => Level::Undefined,
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
