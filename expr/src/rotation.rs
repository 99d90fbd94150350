use serde::{Deserialize, Serialize};

/// A signed row offset, relative to the row a constraint is evaluated on.
///
/// Rotations wrap around the evaluation domain: `Rotation::next()` on the last row refers to the
/// first row, mirroring the cyclic structure of the multiplicative subgroup the constraint
/// polynomials are defined over.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rotation(pub i32);

impl Rotation {
    /// The current row.
    pub const fn cur() -> Self {
        Self(0)
    }

    /// The next row.
    pub const fn next() -> Self {
        Self(1)
    }

    /// The previous row.
    pub const fn prev() -> Self {
        Self(-1)
    }

    pub const fn new(delta: i32) -> Self {
        Self(delta)
    }

    pub const fn delta(self) -> i32 {
        self.0
    }

    /// Resolves this rotation into a physical index of a table of `size` coefficients.
    ///
    /// `idx` is the current row cursor, already expressed in units of the table, and `rot_scale`
    /// is the ratio between the table size and the trace length. The result is
    /// `(idx + delta * rot_scale) mod size`, taken as a true modulus so that it always lies in
    /// `[0, size)`, even for negative numerators.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    #[inline]
    pub const fn get_index(self, idx: i64, rot_scale: i32, size: usize) -> usize {
        let shifted = idx + self.0 as i64 * rot_scale as i64;
        shifted.rem_euclid(size as i64) as usize
    }
}

impl From<i32> for Rotation {
    fn from(delta: i32) -> Self {
        Self(delta)
    }
}
