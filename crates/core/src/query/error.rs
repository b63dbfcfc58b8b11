//! List query errors.

use thiserror::Error;

/// Errors parsing `filterBy` / `sortBy` strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A segment is not a `key=value` pair.
    #[error("expected 'field=value', got '{0}'")]
    Malformed(String),

    /// The entity has no such field.
    #[error("{entity} has no field '{field}'")]
    UnknownField {
        /// Entity name.
        entity: &'static str,
        /// Field name as given.
        field: String,
    },

    /// The field exists but cannot be filtered on.
    #[error("{entity} cannot be filtered by '{field}'")]
    NotFilterable {
        /// Entity name.
        entity: &'static str,
        /// Field name as given.
        field: String,
    },

    /// Sort direction is neither `asc` nor `desc`.
    #[error("sort direction must be 'asc' or 'desc', got '{0}'")]
    UnknownDirection(String),
}
