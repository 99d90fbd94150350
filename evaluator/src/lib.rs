//! Evaluation of constraint expressions at individual rows of a computation trace.
//!
//! An evaluator owns a row cursor and borrows the coefficient tables of every column together
//! with the verifier challenges. Each call to [`Evaluator::evaluate`] resolves one expression
//! against the current row and then steps the cursor forward, so a row driver walks the domain by
//! calling it repeatedly.

#![no_std]

extern crate alloc;

mod arguments;
mod error;
mod evaluator;
mod packed;
mod rows;
mod simple;

pub use arguments::*;
pub use error::*;
pub use evaluator::*;
pub use packed::*;
pub use rows::*;
pub use simple::*;
