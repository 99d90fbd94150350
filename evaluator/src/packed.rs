use p3_field::{Field, PackedValue};
use plonkish_expr::{ColumnType, Expression, Rotation};

use crate::{Arguments, EvaluationError, EvaluationResult, Evaluator};

/// A vectorized backend that evaluates `F::Packing::WIDTH` consecutive rows per call.
///
/// Lane `k` of the result is the value the [`SimpleEvaluator`](crate::SimpleEvaluator) would
/// produce at row `idx + k`. Cells are gathered lane by lane, so a batch may straddle the end of
/// the domain and wrap like any other rotation. The cursor advances by `WIDTH` per call.
#[derive(Debug)]
pub struct PackedEvaluator<'a, F> {
    idx: i64,
    size: usize,
    rot_scale: i32,
    args: Arguments<'a, F>,
}

impl<'a, F: Field> PackedEvaluator<'a, F> {
    /// Number of rows covered by a single call to [`Evaluator::evaluate`].
    pub const WIDTH: usize = F::Packing::WIDTH;

    /// Creates an evaluator whose first batch starts at row `idx` of a domain of `size`
    /// coefficients.
    ///
    /// # Panics
    /// Panics if `size` is zero or `rot_scale` is less than one.
    pub fn new(idx: i64, size: usize, rot_scale: i32, args: Arguments<'a, F>) -> Self {
        assert!(size > 0, "the evaluation domain must not be empty");
        assert!(
            rot_scale >= 1,
            "the rotation scale must be at least 1, got {rot_scale}"
        );
        Self {
            idx,
            size,
            rot_scale,
            args,
        }
    }

    /// The first row of the next batch.
    pub const fn idx(&self) -> i64 {
        self.idx
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn rot_scale(&self) -> i32 {
        self.rot_scale
    }

    fn query(
        &self,
        column_type: ColumnType,
        column: usize,
        rotation: Rotation,
    ) -> EvaluationResult<F::Packing> {
        let table = self.args.column(column_type, column)?;
        let mut missing = None;
        let packed = F::Packing::from_fn(|lane| {
            let row = rotation.get_index(self.idx + lane as i64, self.rot_scale, self.size);
            match table.get(row) {
                Some(&value) => value,
                None => {
                    missing = missing.or(Some(row));
                    F::ZERO
                }
            }
        });
        match missing {
            None => Ok(packed),
            Some(row) => Err(EvaluationError::IndexOutOfRange {
                column_type,
                column,
                row,
                len: table.len(),
            }),
        }
    }

    fn evaluate_at(&self, expr: &Expression<F>) -> EvaluationResult<F::Packing> {
        match expr {
            Expression::Constant(value) => Ok(F::Packing::from(*value)),
            Expression::Selector(selector) => Err(EvaluationError::IllegalSelector(*selector)),
            Expression::Fixed(query) => {
                self.query(ColumnType::Fixed, query.column_index(), query.rotation)
            }
            Expression::Advice(query) => {
                self.query(ColumnType::Advice, query.column_index(), query.rotation)
            }
            Expression::Instance(query) => {
                self.query(ColumnType::Instance, query.column_index(), query.rotation)
            }
            Expression::Challenge(challenge) => {
                Ok(F::Packing::from(*self.args.challenge(challenge.index)?))
            }
            Expression::Negated(a) => Ok(-self.evaluate_at(a)?),
            Expression::Sum(a, b) => Ok(self.evaluate_at(a)? + self.evaluate_at(b)?),
            Expression::Product(a, b) => Ok(self.evaluate_at(a)? * self.evaluate_at(b)?),
            Expression::Scaled(a, scalar) => Ok(self.evaluate_at(a)? * *scalar),
        }
    }
}

impl<F: Field> Evaluator<F> for PackedEvaluator<'_, F> {
    type Output = F::Packing;

    fn evaluate(&mut self, expr: &Expression<F>) -> EvaluationResult<F::Packing> {
        let value = self.evaluate_at(expr)?;
        self.idx += Self::WIDTH as i64;
        Ok(value)
    }
}
