//! Constraint name generation.
//!
//! Names are built from the table name and the name of the first constrained
//! column only. Two constraints of the same kind that share a table and a
//! leading column get the same name, and long names are not truncated to the
//! server's identifier limit.

use tracing::{debug, trace};

use super::convention::NamingConvention;
use super::resolver::CatalogResolver;
use crate::catalog::{AttrNumber, ConstraintDescriptor, ConstraintKind, Oid};

/// Computes constraint names through a resolver.
pub struct ConstraintNamer<'a, R: ?Sized> {
    convention: &'a NamingConvention,
    resolver: &'a R,
}

impl<'a, R> ConstraintNamer<'a, R>
where
    R: CatalogResolver + ?Sized,
{
    /// Create a namer using the process-wide convention.
    pub fn new(resolver: &'a R) -> Self {
        Self {
            convention: NamingConvention::global(),
            resolver,
        }
    }

    /// Use a different naming convention.
    pub fn with_convention(mut self, convention: &'a NamingConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Name a constraint of `kind` on `table`, keyed on `column`.
    ///
    /// Returns `Ok(None)` without consulting the resolver when the kind has no
    /// template. Resolver errors are returned as-is.
    pub fn constraint_name(
        &self,
        kind: ConstraintKind,
        table: Oid,
        column: AttrNumber,
    ) -> Result<Option<String>, R::Error> {
        let Some(template) = self.convention.template(kind) else {
            trace!(%kind, table, "no naming template for constraint kind");
            return Ok(None);
        };

        let table_name = self.resolver.resolve_table_name(table)?;
        let column_0_name = self.resolver.resolve_column_name(table, column)?;
        let name = template.render(&table_name, &column_0_name);

        debug!(%kind, table, column, %name, "computed constraint name");
        Ok(Some(name))
    }

    /// Name a constraint from its descriptor.
    ///
    /// Unrecognized forms and descriptors without columns yield `Ok(None)`.
    pub fn descriptor_name(
        &self,
        descriptor: &ConstraintDescriptor,
    ) -> Result<Option<String>, R::Error> {
        match (descriptor.kind(), descriptor.first_column()) {
            (Some(kind), Some(column)) => self.constraint_name(kind, descriptor.table(), column),
            _ => Ok(None),
        }
    }

    /// Name an index on `table`, keyed on `column`.
    pub fn index_name(&self, table: Oid, column: AttrNumber) -> Result<Option<String>, R::Error> {
        let Some(template) = self.convention.index_template() else {
            return Ok(None);
        };

        let table_name = self.resolver.resolve_table_name(table)?;
        let column_0_name = self.resolver.resolve_column_name(table, column)?;
        let name = template.render(&table_name, &column_0_name);

        debug!(table, column, %name, "computed index name");
        Ok(Some(name))
    }
}

/// Name a constraint using the process-wide convention.
pub fn compute_constraint_name<R>(
    kind: ConstraintKind,
    table: Oid,
    column: AttrNumber,
    resolver: &R,
) -> Result<Option<String>, R::Error>
where
    R: CatalogResolver + ?Sized,
{
    ConstraintNamer::new(resolver).constraint_name(kind, table, column)
}

/// Name an index using the process-wide convention.
pub fn compute_index_name<R>(
    table: Oid,
    column: AttrNumber,
    resolver: &R,
) -> Result<Option<String>, R::Error>
where
    R: CatalogResolver + ?Sized,
{
    ConstraintNamer::new(resolver).index_name(table, column)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::naming::{MemoryResolver, NamingTemplate, ResolveError};

    const ORDERS: Oid = 16384;

    fn orders() -> MemoryResolver {
        MemoryResolver::new().with_table_columns(ORDERS, "orders", ["id", "customer_id", "total"])
    }

    /// Counts lookups so tests can assert the resolver was not touched.
    struct CountingResolver {
        inner: MemoryResolver,
        calls: Cell<usize>,
    }

    impl CatalogResolver for CountingResolver {
        type Error = ResolveError;

        fn resolve_table_name(&self, table: Oid) -> Result<String, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            self.inner.resolve_table_name(table)
        }

        fn resolve_column_name(
            &self,
            table: Oid,
            column: AttrNumber,
        ) -> Result<String, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            self.inner.resolve_column_name(table, column)
        }
    }

    #[test]
    fn test_names_per_kind() {
        let resolver = orders();
        let cases = [
            (ConstraintKind::Unique, "orders_id_key"),
            (ConstraintKind::ForeignKey, "orders_id_fkey"),
            (ConstraintKind::PrimaryKey, "orders_id_pkey"),
            (ConstraintKind::Check, "orders_id_check"),
        ];

        for (kind, expected) in cases {
            let name = compute_constraint_name(kind, ORDERS, 1, &resolver).unwrap();
            assert_eq!(name.as_deref(), Some(expected), "kind {kind}");
        }
    }

    #[test]
    fn test_exclude_skips_resolver() {
        let resolver = CountingResolver {
            inner: MemoryResolver::new(),
            calls: Cell::new(0),
        };

        let name = compute_constraint_name(ConstraintKind::Exclude, 999, 42, &resolver);

        assert_eq!(name, Ok(None));
        assert_eq!(resolver.calls.get(), 0);
    }

    #[test]
    fn test_unknown_table_propagates() {
        let resolver = orders();

        let result = compute_constraint_name(ConstraintKind::Unique, 1, 1, &resolver);

        assert_eq!(result, Err(ResolveError::TableNotFound(1)));
    }

    #[test]
    fn test_unknown_column_propagates() {
        let resolver = orders();

        let result = compute_constraint_name(ConstraintKind::PrimaryKey, ORDERS, 10, &resolver);

        assert_eq!(
            result,
            Err(ResolveError::ColumnNotFound {
                table: ORDERS,
                column: 10
            })
        );
    }

    #[test]
    fn test_descriptor_uses_first_column() {
        let resolver = orders();
        let namer = ConstraintNamer::new(&resolver);
        let descriptor = ConstraintDescriptor::unique_composite("ignored", ORDERS, [2, 1]);

        assert_eq!(
            namer.descriptor_name(&descriptor),
            Ok(Some("orders_customer_id_key".to_string()))
        );
    }

    #[test]
    fn test_descriptor_without_columns() {
        let resolver = orders();
        let namer = ConstraintNamer::new(&resolver);
        let descriptor = ConstraintDescriptor::check("orders_check", ORDERS, Vec::new(), "true");

        assert_eq!(namer.descriptor_name(&descriptor), Ok(None));
    }

    #[test]
    fn test_custom_convention() {
        let resolver = orders();
        let convention = NamingConvention::postgres().with_template(
            ConstraintKind::Exclude,
            NamingTemplate::new("{table_name}_{column_0_name}_excl").unwrap(),
        );
        let namer = ConstraintNamer::new(&resolver).with_convention(&convention);

        assert_eq!(
            namer.constraint_name(ConstraintKind::Exclude, ORDERS, 3),
            Ok(Some("orders_total_excl".to_string()))
        );
    }

    #[test]
    fn test_index_name() {
        let resolver = orders();

        assert_eq!(
            compute_index_name(ORDERS, 2, &resolver),
            Ok(Some("orders_customer_id_idx".to_string()))
        );

        let namer = ConstraintNamer::new(&resolver);
        let convention = NamingConvention::empty();
        assert_eq!(namer.with_convention(&convention).index_name(ORDERS, 2), Ok(None));
    }
}
