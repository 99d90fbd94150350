use core::ops::{Add, Mul, Neg};

use plonkish_expr::Expression;

use crate::EvaluationResult;

/// The ring operations an evaluator needs from a field element.
///
/// Every field type satisfies this through the blanket implementation; the trait only exists to
/// keep bounds short.
pub trait FieldValue: Copy + Add<Output = Self> + Mul<Output = Self> + Neg<Output = Self> {}

impl<T> FieldValue for T where T: Copy + Add<Output = T> + Mul<Output = T> + Neg<Output = T> {}

/// A backend that evaluates expressions row after row.
///
/// Backends differ in how many rows they handle per call and in how they represent the result,
/// but for identical inputs every backend must agree with [`SimpleEvaluator`](crate::SimpleEvaluator)
/// on each row it covers.
pub trait Evaluator<F> {
    type Output;

    /// Evaluates `expr` at the current cursor, then moves the cursor past the evaluated rows.
    ///
    /// On error the cursor is left where it was and the evaluator should be discarded.
    fn evaluate(&mut self, expr: &Expression<F>) -> EvaluationResult<Self::Output>;
}
