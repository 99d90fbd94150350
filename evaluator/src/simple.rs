use plonkish_expr::{ColumnType, Expression, Rotation};

use crate::{Arguments, EvaluationError, EvaluationResult, Evaluator, FieldValue};

/// The reference backend: evaluates one expression at one row per call.
///
/// The row cursor is expressed in units of the coefficient tables, so on an extended domain it
/// advances one coefficient per call while a rotation moves `rot_scale` coefficients. The cursor
/// may start anywhere, including negative values; only the resolved index has to land inside
/// the tables.
///
/// Evaluators are cheap, single-owner objects. To split a domain across threads, create one
/// evaluator per row range rather than sharing one.
#[derive(Debug)]
pub struct SimpleEvaluator<'a, F> {
    idx: i64,
    size: usize,
    rot_scale: i32,
    args: Arguments<'a, F>,
}

impl<'a, F> SimpleEvaluator<'a, F> {
    /// Creates an evaluator positioned at row `idx` of a domain of `size` coefficients.
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

    /// The row the next call to [`Evaluator::evaluate`] reads.
    pub const fn idx(&self) -> i64 {
        self.idx
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn rot_scale(&self) -> i32 {
        self.rot_scale
    }

    pub const fn args(&self) -> &Arguments<'a, F> {
        &self.args
    }
}

impl<F: FieldValue> SimpleEvaluator<'_, F> {
    #[inline]
    fn query(
        &self,
        column_type: ColumnType,
        column: usize,
        rotation: Rotation,
    ) -> EvaluationResult<F> {
        let table = self.args.column(column_type, column)?;
        let row = rotation.get_index(self.idx, self.rot_scale, self.size);
        table
            .get(row)
            .copied()
            .ok_or(EvaluationError::IndexOutOfRange {
                column_type,
                column,
                row,
                len: table.len(),
            })
    }

    /// Evaluates `expr` at the current row without moving the cursor.
    fn evaluate_at(&self, expr: &Expression<F>) -> EvaluationResult<F> {
        match expr {
            Expression::Constant(value) => Ok(*value),
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
            Expression::Challenge(challenge) => self.args.challenge(challenge.index).copied(),
            Expression::Negated(a) => Ok(-self.evaluate_at(a)?),
            Expression::Sum(a, b) => Ok(self.evaluate_at(a)? + self.evaluate_at(b)?),
            Expression::Product(a, b) => Ok(self.evaluate_at(a)? * self.evaluate_at(b)?),
            Expression::Scaled(a, scalar) => Ok(self.evaluate_at(a)? * *scalar),
        }
    }
}

impl<F: FieldValue> Evaluator<F> for SimpleEvaluator<'_, F> {
    type Output = F;

    fn evaluate(&mut self, expr: &Expression<F>) -> EvaluationResult<F> {
        let value = self.evaluate_at(expr)?;
        self.idx += 1;
        Ok(value)
    }
}
