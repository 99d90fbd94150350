use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Serialize};

/// The prime field of order seven.
///
/// Small enough that hand-computed expectations stay readable, e.g. `5 + 4 = 2`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gf7(u8);

impl Gf7 {
    pub const ORDER: u8 = 7;

    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);

    pub const fn new(value: u8) -> Self {
        Self(value % Self::ORDER)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Add for Gf7 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self((self.0 + rhs.0) % Self::ORDER)
    }
}

impl Sub for Gf7 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl Neg for Gf7 {
    type Output = Self;

    fn neg(self) -> Self {
        Self((Self::ORDER - self.0) % Self::ORDER)
    }
}

impl Mul for Gf7 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self((self.0 * rhs.0) % Self::ORDER)
    }
}

impl fmt::Display for Gf7 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Distribution<Gf7> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Gf7 {
        Gf7(rng.random_range(0..Gf7::ORDER))
    }
}
