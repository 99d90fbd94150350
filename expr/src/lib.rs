//! Constraint expressions for PLONKish arithmetizations.
//!
//! An [`Expression`] is an immutable tree whose leaves reference cells of fixed, advice and
//! instance columns (at a [`Rotation`] relative to the current row), selectors, verifier
//! challenges and constants, and whose inner nodes combine them with ring operations.

#![no_std]

extern crate alloc;

mod challenge;
mod column;
mod expression;
mod query;
mod rotation;
mod selector;

pub use challenge::*;
pub use column::*;
pub use expression::*;
pub use query::*;
pub use rotation::*;
pub use selector::*;
