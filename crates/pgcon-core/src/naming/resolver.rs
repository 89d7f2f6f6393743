//! Table and column name lookups.

use std::collections::HashMap;

use thiserror::Error;

use crate::catalog::{AttrNumber, Oid};

/// Read-only name lookups supplied by the caller.
///
/// Implementors decide where names come from: a pooled connection, the
/// caller's open transaction, or a snapshot held in memory. Errors are the
/// implementor's own and are returned to the naming caller untouched.
pub trait CatalogResolver {
    /// Lookup failure.
    type Error;

    /// Current name of a table.
    fn resolve_table_name(&self, table: Oid) -> Result<String, Self::Error>;

    /// Current name of a column, by ordinal.
    fn resolve_column_name(&self, table: Oid, column: AttrNumber) -> Result<String, Self::Error>;
}

impl<R: CatalogResolver + ?Sized> CatalogResolver for &R {
    type Error = R::Error;

    fn resolve_table_name(&self, table: Oid) -> Result<String, Self::Error> {
        (**self).resolve_table_name(table)
    }

    fn resolve_column_name(&self, table: Oid, column: AttrNumber) -> Result<String, Self::Error> {
        (**self).resolve_column_name(table, column)
    }
}

/// Lookup failures of [`MemoryResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No table with this oid.
    #[error("table {0} not found")]
    TableNotFound(Oid),

    /// No column with this ordinal on the table.
    #[error("column {column} not found on table {table}")]
    ColumnNotFound {
        /// Table oid.
        table: Oid,
        /// Column ordinal.
        column: AttrNumber,
    },
}

/// A resolver over names already held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    tables: HashMap<Oid, String>,
    columns: HashMap<(Oid, AttrNumber), String>,
}

impl MemoryResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table.
    pub fn with_table(mut self, table: Oid, name: impl Into<String>) -> Self {
        self.tables.insert(table, name.into());
        self
    }

    /// Register a column of a table.
    pub fn with_column(mut self, table: Oid, column: AttrNumber, name: impl Into<String>) -> Self {
        self.columns.insert((table, column), name.into());
        self
    }

    /// Register a table and its columns, numbered from 1.
    pub fn with_table_columns(
        mut self,
        table: Oid,
        name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.tables.insert(table, name.into());
        for (ordinal, column) in (1..).zip(columns) {
            self.columns.insert((table, ordinal), column.into());
        }
        self
    }
}

impl CatalogResolver for MemoryResolver {
    type Error = ResolveError;

    fn resolve_table_name(&self, table: Oid) -> Result<String, Self::Error> {
        self.tables
            .get(&table)
            .cloned()
            .ok_or(ResolveError::TableNotFound(table))
    }

    fn resolve_column_name(&self, table: Oid, column: AttrNumber) -> Result<String, Self::Error> {
        if !self.tables.contains_key(&table) {
            return Err(ResolveError::TableNotFound(table));
        }
        self.columns
            .get(&(table, column))
            .cloned()
            .ok_or(ResolveError::ColumnNotFound { table, column })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_resolver() {
        let resolver = MemoryResolver::new().with_table_columns(16384, "orders", ["id", "total"]);

        assert_eq!(resolver.resolve_table_name(16384), Ok("orders".to_string()));
        assert_eq!(resolver.resolve_column_name(16384, 2), Ok("total".to_string()));
    }

    #[test]
    fn test_missing_entries() {
        let resolver = MemoryResolver::new()
            .with_table(16384, "orders")
            .with_column(16384, 1, "id");

        assert_eq!(
            resolver.resolve_table_name(1),
            Err(ResolveError::TableNotFound(1))
        );
        assert_eq!(
            resolver.resolve_column_name(16384, 9),
            Err(ResolveError::ColumnNotFound {
                table: 16384,
                column: 9
            })
        );
        assert_eq!(
            resolver.resolve_column_name(7, 1),
            Err(ResolveError::TableNotFound(7))
        );
    }
}
