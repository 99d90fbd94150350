//! Fixtures for testing expression evaluators: a tiny prime field, random column tables and
//! expressions, and checks that every backend agrees with the reference one.

#![no_std]

extern crate alloc;

mod conformance;
mod gf7;
mod tables;

pub use conformance::*;
pub use gf7::*;
pub use tables::*;
