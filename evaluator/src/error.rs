//! Pipeline defects detected while evaluating an expression.

use plonkish_expr::{ColumnType, Selector};
use thiserror::Error;

/// A violated invariant of the proving pipeline.
///
/// None of these are recoverable: they mean that an earlier stage (selector compilation, the
/// constraint-system builder or the table provider) handed the evaluator inconsistent data.
/// Evaluation stops at the first one, and callers are expected to abort the proving run rather
/// than continue with a value that could make the proof unsound.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// A selector survived selector compilation.
    #[error("selector {} reached the evaluator; selectors must be compiled into fixed columns first", .0.index)]
    IllegalSelector(Selector),

    /// A query references a column that is not bound to the evaluator.
    #[error("{column_type} column {column} is out of range: only {num_columns} columns are bound")]
    ColumnOutOfRange {
        /// Kind of the queried column
        column_type: ColumnType,
        /// Index of the queried column
        column: usize,
        /// Number of columns of that kind bound to the evaluator
        num_columns: usize,
    },

    /// A rotated row index does not exist in the column's coefficient table.
    #[error("row {row} of {column_type} column {column} is out of range: the column has {len} rows")]
    IndexOutOfRange {
        /// Kind of the queried column
        column_type: ColumnType,
        /// Index of the queried column
        column: usize,
        /// Row the rotation resolved to
        row: usize,
        /// Number of rows in the column's table
        len: usize,
    },

    /// A challenge index is not covered by the challenge vector.
    #[error("challenge {index} is out of range: only {len} challenges are bound")]
    ChallengeOutOfRange {
        /// Index of the queried challenge
        index: usize,
        /// Number of challenges bound to the evaluator
        len: usize,
    },
}

pub type EvaluationResult<T> = core::result::Result<T, EvaluationError>;
