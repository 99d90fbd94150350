use serde::{Deserialize, Serialize};

use crate::{AdviceColumn, ColumnType, FixedColumn, InstanceColumn, Phase, Rotation};

/// A query of a fixed column at a rotation relative to the current row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedQuery {
    pub column: FixedColumn,
    pub rotation: Rotation,
}

impl FixedQuery {
    pub const fn new(column: FixedColumn, rotation: Rotation) -> Self {
        Self { column, rotation }
    }

    pub const fn column_index(&self) -> usize {
        self.column.index
    }

    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub const fn column_type(&self) -> ColumnType {
        ColumnType::Fixed
    }
}

/// A query of an advice column at a rotation relative to the current row.
///
/// The phase of the column is part of the query's identity: two queries of the same column index
/// in different phases refer to different columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdviceQuery {
    pub column: AdviceColumn,
    pub rotation: Rotation,
}

impl AdviceQuery {
    pub const fn new(column: AdviceColumn, rotation: Rotation) -> Self {
        Self { column, rotation }
    }

    pub const fn column_index(&self) -> usize {
        self.column.index
    }

    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub const fn phase(&self) -> Phase {
        self.column.phase
    }

    pub const fn column_type(&self) -> ColumnType {
        ColumnType::Advice
    }
}

/// A query of an instance column at a rotation relative to the current row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceQuery {
    pub column: InstanceColumn,
    pub rotation: Rotation,
}

impl InstanceQuery {
    pub const fn new(column: InstanceColumn, rotation: Rotation) -> Self {
        Self { column, rotation }
    }

    pub const fn column_index(&self) -> usize {
        self.column.index
    }

    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub const fn column_type(&self) -> ColumnType {
        ColumnType::Instance
    }
}
