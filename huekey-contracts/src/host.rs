//! Model identity the attribute is bound to.

/// The model (table) an attribute belongs to.
///
/// The attribute only needs the table identity; everything else the
/// framework knows about the model stays on the other side of this trait.
pub trait AttributeHost: Send + Sync {
    /// Name of the table holding the records and the attribute column.
    fn table_name(&self) -> &str;
}

impl<T: AttributeHost + ?Sized> AttributeHost for &T {
    fn table_name(&self) -> &str {
        (**self).table_name()
    }
}

impl<T: AttributeHost + ?Sized> AttributeHost for std::sync::Arc<T> {
    fn table_name(&self) -> &str {
        (**self).table_name()
    }
}

/// Fixed table name, handy for wiring and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticHost {
    table: String,
}

impl StaticHost {
    /// Host reporting `table` as its table name.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

impl AttributeHost for StaticHost {
    fn table_name(&self) -> &str {
        &self.table
    }
}
