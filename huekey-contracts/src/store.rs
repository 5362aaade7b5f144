//! Access to the raw attribute column.

use huekey_model::RecordId;
use thiserror::Error;

/// Raw column content for one record, exactly as the store holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawColorRow {
    /// Record the column belongs to.
    pub id: RecordId,
    /// `None` when the column is NULL.
    pub raw: Option<Vec<u8>>,
}

impl RawColorRow {
    /// Row with the given column content.
    pub fn new(id: impl Into<RecordId>, raw: Option<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            raw,
        }
    }

    /// Row whose column is NULL.
    pub fn null(id: impl Into<RecordId>) -> Self {
        Self::new(id, None)
    }
}

/// Failures reported by a [`RawColumnStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// The table has no column of that name.
    #[error("column `{column}` not found on table `{table}`")]
    UnknownColumn {
        /// Table that was queried.
        table: String,
        /// Column that was missing.
        column: String,
    },

    /// Any other backend failure, such as a lost connection.
    #[error("store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wrap a backend error.
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StoreError::Backend(Box::new(err))
    }
}

/// Read access to the attribute column of the owning store.
///
/// Implementations return one row per requested id they know about, in the
/// order the backend yields them. That order becomes the tie-break order of
/// the sorter, so it must be stable for repeated calls.
pub trait RawColumnStore: Send + Sync {
    /// Fetch `column` of `table` for the given ids.
    ///
    /// Ids without a row are simply absent from the result.
    fn fetch_column(
        &self,
        table: &str,
        column: &str,
        ids: &[RecordId],
    ) -> Result<Vec<RawColorRow>, StoreError>;
}

impl<T: RawColumnStore + ?Sized> RawColumnStore for &T {
    fn fetch_column(
        &self,
        table: &str,
        column: &str,
        ids: &[RecordId],
    ) -> Result<Vec<RawColorRow>, StoreError> {
        (**self).fetch_column(table, column, ids)
    }
}

impl<T: RawColumnStore + ?Sized> RawColumnStore for std::sync::Arc<T> {
    fn fetch_column(
        &self,
        table: &str,
        column: &str,
        ids: &[RecordId],
    ) -> Result<Vec<RawColorRow>, StoreError> {
        (**self).fetch_column(table, column, ids)
    }
}
