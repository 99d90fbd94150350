use serde::{Deserialize, Serialize};

use crate::Phase;

/// A reference to a verifier challenge, drawn after the given phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Challenge {
    pub index: usize,
    pub phase: Phase,
}

impl Challenge {
    pub const fn new(index: usize, phase: Phase) -> Self {
        Self { index, phase }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }
}
