//! State management-specific error types.

/// Errors that can occur while managing rows.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Every configured category is already shown
    #[error("All categories are already shown")]
    NoHiddenCategory,

    /// The configured maximum number of rows is reached
    #[error("Row limit of {max} reached")]
    RowLimitReached { max: usize },

    /// No visible row has the given name
    #[error("Category '{name}' is not shown")]
    CategoryNotVisible { name: String },

    /// There are no rows to act on
    #[error("No rows shown")]
    NoRows,
}
