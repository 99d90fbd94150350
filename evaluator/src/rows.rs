use alloc::vec::Vec;

use p3_field::{Field, PackedValue};
use plonkish_expr::Expression;
use tracing::instrument;

use crate::{
    Arguments, EvaluationError, EvaluationResult, Evaluator, FieldValue, PackedEvaluator,
    SimpleEvaluator,
};

/// Rejects expressions that still contain a selector before any row is evaluated.
fn check_compiled<F>(expr: &Expression<F>) -> EvaluationResult<()> {
    match expr.first_selector() {
        Some(selector) => Err(EvaluationError::IllegalSelector(selector)),
        None => Ok(()),
    }
}

/// Evaluates `expr` on every row of a domain of `size` coefficients, starting from row zero.
#[instrument(level = "debug", skip_all, fields(rows = size))]
pub fn evaluate_rows<F: FieldValue>(
    expr: &Expression<F>,
    size: usize,
    rot_scale: i32,
    args: Arguments<'_, F>,
) -> EvaluationResult<Vec<F>> {
    check_compiled(expr)?;
    let mut evaluator = SimpleEvaluator::new(0, size, rot_scale, args);
    (0..size).map(|_| evaluator.evaluate(expr)).collect()
}

/// Like [`evaluate_rows`], but evaluates `F::Packing::WIDTH` rows at a time.
#[instrument(level = "debug", skip_all, fields(rows = size))]
pub fn evaluate_rows_packed<F: Field>(
    expr: &Expression<F>,
    size: usize,
    rot_scale: i32,
    args: Arguments<'_, F>,
) -> EvaluationResult<Vec<F>> {
    check_compiled(expr)?;
    let mut evaluator = PackedEvaluator::new(0, size, rot_scale, args);
    let mut values = Vec::with_capacity(size);
    while values.len() < size {
        let batch = evaluator.evaluate(expr)?;
        let remaining = size - values.len();
        values.extend(batch.as_slice().iter().take(remaining).copied());
    }
    Ok(values)
}
