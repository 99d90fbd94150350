use serde::{Deserialize, Serialize};

/// A boolean control signal that turns a gate on or off for a row.
///
/// Selectors only exist while a constraint system is being configured. Before any expression is
/// evaluated they are compiled into fixed columns; a simple selector may additionally be combined
/// with others into a single column, which is why it must only appear multiplicatively.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Selector {
    pub index: usize,
    pub simple: bool,
}

impl Selector {
    pub const fn simple(index: usize) -> Self {
        Self {
            index,
            simple: true,
        }
    }

    pub const fn complex(index: usize) -> Self {
        Self {
            index,
            simple: false,
        }
    }

    pub const fn is_simple(&self) -> bool {
        self.simple
    }
}
