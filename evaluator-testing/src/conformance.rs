use alloc::vec::Vec;

use itertools::Itertools;
use p3_field::Field;
use p3_maybe_rayon::prelude::*;
use plonkish_evaluator::{
    Arguments, EvaluationResult, Evaluator, FieldValue, SimpleEvaluator, evaluate_rows,
    evaluate_rows_packed,
};
use plonkish_expr::Expression;

/// Asserts that the packed backend reproduces the reference backend on every row of the domain,
/// including the error it stops with.
pub fn assert_backends_agree<F: Field>(
    expr: &Expression<F>,
    size: usize,
    rot_scale: i32,
    args: Arguments<'_, F>,
) {
    let reference = evaluate_rows(expr, size, rot_scale, args);
    let packed = evaluate_rows_packed(expr, size, rot_scale, args);
    match (reference, packed) {
        (Ok(reference), Ok(packed)) => {
            for (row, (r, p)) in reference.iter().zip_eq(&packed).enumerate() {
                assert_eq!(r, p, "backends disagree on row {row} of {expr:?}");
            }
        }
        (Err(reference), Err(packed)) => assert_eq!(reference, packed),
        (reference, packed) => panic!(
            "only one backend failed on {expr:?}: reference {:?}, packed {:?}",
            reference.err(),
            packed.err()
        ),
    }
}

/// Evaluates `expr` on every row by splitting the domain into `num_parts` contiguous ranges, each
/// handled by its own evaluator, potentially on separate threads.
///
/// The result must equal a single sequential pass.
pub fn evaluate_partitioned<F>(
    expr: &Expression<F>,
    size: usize,
    rot_scale: i32,
    args: Arguments<'_, F>,
    num_parts: usize,
) -> EvaluationResult<Vec<F>>
where
    F: FieldValue + Send + Sync,
{
    assert!(num_parts > 0);
    let part_size = size.div_ceil(num_parts);
    (0..num_parts)
        .into_par_iter()
        .map(|part| {
            let start = (part * part_size).min(size);
            let end = (start + part_size).min(size);
            let mut evaluator = SimpleEvaluator::new(start as i64, size, rot_scale, args);
            (start..end)
                .map(|_| evaluator.evaluate(expr))
                .collect::<EvaluationResult<Vec<_>>>()
        })
        .collect::<EvaluationResult<Vec<_>>>()
        .map(|parts| parts.concat())
}
