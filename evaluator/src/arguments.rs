use alloc::vec::Vec;

use plonkish_expr::ColumnType;

use crate::{EvaluationError, EvaluationResult};

/// The read-only data an evaluator reads from: one coefficient table per column and the
/// challenges of the current proving round.
///
/// The bundle only borrows; it is the caller's job to build the tables completely before handing
/// them out, and they are never written while any evaluator holds them.
#[derive(Debug)]
pub struct Arguments<'a, F> {
    pub fixed: &'a [Vec<F>],
    pub advice: &'a [Vec<F>],
    pub instance: &'a [Vec<F>],
    pub challenges: &'a [F],
}

// A derive would require `F: Copy`, but only references are copied.
impl<F> Clone for Arguments<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Arguments<'_, F> {}

impl<'a, F> Arguments<'a, F> {
    pub const fn new(
        fixed: &'a [Vec<F>],
        advice: &'a [Vec<F>],
        instance: &'a [Vec<F>],
        challenges: &'a [F],
    ) -> Self {
        Self {
            fixed,
            advice,
            instance,
            challenges,
        }
    }

    /// The coefficient table of a column.
    #[inline]
    pub fn column(&self, column_type: ColumnType, column: usize) -> EvaluationResult<&'a [F]> {
        let tables = match column_type {
            ColumnType::Fixed => self.fixed,
            ColumnType::Advice => self.advice,
            ColumnType::Instance => self.instance,
        };
        tables
            .get(column)
            .map(Vec::as_slice)
            .ok_or(EvaluationError::ColumnOutOfRange {
                column_type,
                column,
                num_columns: tables.len(),
            })
    }

    #[inline]
    pub fn challenge(&self, index: usize) -> EvaluationResult<&'a F> {
        self.challenges
            .get(index)
            .ok_or(EvaluationError::ChallengeOutOfRange {
                index,
                len: self.challenges.len(),
            })
    }
}
