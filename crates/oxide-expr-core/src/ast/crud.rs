//! Value types produced by the list-shaped entry points.

use serde::{Deserialize, Serialize};

use super::{ColumnIdentifier, DocumentPathItem, Expr};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the direction keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One entry of an order specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// The sort key.
    pub field: Expr,
    /// The direction; `None` leaves it to the server default.
    pub direction: Option<OrderDirection>,
}

/// Where a projected value lands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectionTarget {
    /// A column alias (table select).
    Alias(String),
    /// A path in the result document (document projection).
    Path(Vec<DocumentPathItem>),
}

/// One entry of a projection list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// The projected expression.
    pub source: Expr,
    /// The target, if one was given.
    pub target: Option<ProjectionTarget>,
}

impl Projection {
    /// Returns the target alias, if any.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        match &self.target {
            Some(ProjectionTarget::Alias(alias)) => Some(alias),
            _ => None,
        }
    }

    /// Returns the target document path, if any.
    #[must_use]
    pub fn target_path(&self) -> Option<&[DocumentPathItem]> {
        match &self.target {
            Some(ProjectionTarget::Path(path)) => Some(path),
            _ => None,
        }
    }
}

/// A column named by a table insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// The column name, unescaped.
    pub name: String,
}

/// A single `column = value` assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateOperation {
    /// The assigned column, possibly with a document path.
    pub source: ColumnIdentifier,
    /// The new value.
    pub value: Expr,
}
