use core::fmt;

use serde::{Deserialize, Serialize};

/// The protocol round in which a column or challenge becomes available.
///
/// Phases order advice columns against the challenges they may depend on; the evaluator carries
/// them but never interprets them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Phase(pub u8);

pub const FIRST_PHASE: Phase = Phase(0);
pub const SECOND_PHASE: Phase = Phase(1);
pub const THIRD_PHASE: Phase = Phase(2);

impl Phase {
    pub const fn new(phase: u8) -> Self {
        Self(phase)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// The phase immediately before this one, or `None` for the first phase.
    pub const fn prev(self) -> Option<Self> {
        match self.0 {
            0 => None,
            p => Some(Self(p - 1)),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    /// Values fixed by the circuit description.
    Fixed,
    /// Witness values supplied by the prover.
    Advice,
    /// Public inputs.
    Instance,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => f.write_str("fixed"),
            Self::Advice => f.write_str("advice"),
            Self::Instance => f.write_str("instance"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FixedColumn {
    pub index: usize,
}

impl FixedColumn {
    pub const fn new(index: usize) -> Self {
        Self { index }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AdviceColumn {
    pub index: usize,
    pub phase: Phase,
}

impl AdviceColumn {
    pub const fn new(index: usize, phase: Phase) -> Self {
        Self { index, phase }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceColumn {
    pub index: usize,
}

impl InstanceColumn {
    pub const fn new(index: usize) -> Self {
        Self { index }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn phase_ordering() {
        assert!(FIRST_PHASE < SECOND_PHASE);
        assert!(SECOND_PHASE < THIRD_PHASE);
        assert_eq!(FIRST_PHASE.prev(), None);
        assert_eq!(THIRD_PHASE.prev(), Some(SECOND_PHASE));
        assert_eq!(Phase::new(5).value(), 5);
    }

    #[test]
    fn column_type_names() {
        assert_eq!(ColumnType::Fixed.to_string(), "fixed");
        assert_eq!(ColumnType::Advice.to_string(), "advice");
        assert_eq!(ColumnType::Instance.to_string(), "instance");
    }
}
