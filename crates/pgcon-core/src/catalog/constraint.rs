//! Structural constraint descriptors and raw catalog rows.

use rkyv::{Archive, Deserialize, Serialize};

use super::types::{ConstraintKind, MatchPolicy, ReferentialAction};
use super::{AttrNumber, Oid};
use crate::codec;

/// A constraint described by its structure.
///
/// The first five variants are the structural forms the kind classifier
/// understands. Anything else the catalog can hold (constraint triggers,
/// not-null entries on newer servers) is kept as `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub enum ConstraintDescriptor {
    /// Check constraint (expression must evaluate to true).
    Check {
        /// Constraint name.
        name: String,
        /// Table the constraint is defined on.
        table: Oid,
        /// Columns referenced by the expression.
        columns: Vec<AttrNumber>,
        /// Expression source text.
        expression: String,
    },
    /// Foreign key constraint.
    ForeignKey {
        /// Constraint name.
        name: String,
        /// Referencing table.
        table: Oid,
        /// Referencing columns.
        columns: Vec<AttrNumber>,
        /// Referenced table.
        referenced_table: Oid,
        /// Referenced columns.
        referenced_columns: Vec<AttrNumber>,
        /// Action on update of the referenced key.
        on_update: Option<ReferentialAction>,
        /// Action on delete of the referenced row.
        on_delete: Option<ReferentialAction>,
        /// Null matching rule.
        match_policy: Option<MatchPolicy>,
    },
    /// Primary key constraint.
    PrimaryKey {
        /// Constraint name.
        name: String,
        /// Table the constraint is defined on.
        table: Oid,
        /// Key columns.
        columns: Vec<AttrNumber>,
    },
    /// Uniqueness constraint (single or composite).
    Unique {
        /// Constraint name.
        name: String,
        /// Table the constraint is defined on.
        table: Oid,
        /// Columns that must be unique together.
        columns: Vec<AttrNumber>,
    },
    /// Exclusion constraint.
    Exclude {
        /// Constraint name.
        name: String,
        /// Table the constraint is defined on.
        table: Oid,
        /// Columns compared by the exclusion operators.
        columns: Vec<AttrNumber>,
    },
    /// A catalog entry whose structural form is not one of the above.
    Unrecognized {
        /// Constraint name.
        name: String,
        /// Table the constraint is defined on.
        table: Oid,
        /// The raw type code from the catalog.
        code: char,
    },
}

impl ConstraintDescriptor {
    /// Create a unique constraint on a single column.
    pub fn unique(name: impl Into<String>, table: Oid, column: AttrNumber) -> Self {
        ConstraintDescriptor::Unique {
            name: name.into(),
            table,
            columns: vec![column],
        }
    }

    /// Create a composite unique constraint.
    pub fn unique_composite(
        name: impl Into<String>,
        table: Oid,
        columns: impl IntoIterator<Item = AttrNumber>,
    ) -> Self {
        ConstraintDescriptor::Unique {
            name: name.into(),
            table,
            columns: columns.into_iter().collect(),
        }
    }

    /// Create a primary key constraint.
    pub fn primary_key(
        name: impl Into<String>,
        table: Oid,
        columns: impl IntoIterator<Item = AttrNumber>,
    ) -> Self {
        ConstraintDescriptor::PrimaryKey {
            name: name.into(),
            table,
            columns: columns.into_iter().collect(),
        }
    }

    /// Create a single-column foreign key with no explicit actions.
    pub fn foreign_key(
        name: impl Into<String>,
        table: Oid,
        column: AttrNumber,
        referenced_table: Oid,
        referenced_column: AttrNumber,
    ) -> Self {
        ConstraintDescriptor::ForeignKey {
            name: name.into(),
            table,
            columns: vec![column],
            referenced_table,
            referenced_columns: vec![referenced_column],
            on_update: None,
            on_delete: None,
            match_policy: None,
        }
    }

    /// Create a check constraint.
    pub fn check(
        name: impl Into<String>,
        table: Oid,
        columns: impl IntoIterator<Item = AttrNumber>,
        expression: impl Into<String>,
    ) -> Self {
        ConstraintDescriptor::Check {
            name: name.into(),
            table,
            columns: columns.into_iter().collect(),
            expression: expression.into(),
        }
    }

    /// Create an exclusion constraint.
    pub fn exclude(
        name: impl Into<String>,
        table: Oid,
        columns: impl IntoIterator<Item = AttrNumber>,
    ) -> Self {
        ConstraintDescriptor::Exclude {
            name: name.into(),
            table,
            columns: columns.into_iter().collect(),
        }
    }

    /// Build a descriptor from a raw catalog row.
    ///
    /// The type code picks the structural form. Unknown action or match codes
    /// on a foreign key are kept as `None`.
    pub fn from_row(row: &CatalogConstraintRow) -> Self {
        let name = row.name.clone();
        let table = row.table;
        let columns = row.columns.clone();

        let Some(kind) = codec::classify_by_catalog_char(row.code) else {
            tracing::trace!(
                constraint = %row.name,
                code = %row.code,
                "unrecognized constraint type code"
            );
            return ConstraintDescriptor::Unrecognized {
                name,
                table,
                code: row.code,
            };
        };

        match kind {
            ConstraintKind::Check => ConstraintDescriptor::Check {
                name,
                table,
                columns,
                expression: row.check_source.clone().unwrap_or_default(),
            },
            ConstraintKind::ForeignKey => ConstraintDescriptor::ForeignKey {
                name,
                table,
                columns,
                referenced_table: row.referenced_table.unwrap_or_default(),
                referenced_columns: row.referenced_columns.clone(),
                on_update: row.on_update.and_then(codec::decode_action),
                on_delete: row.on_delete.and_then(codec::decode_action),
                match_policy: row.match_code.and_then(codec::decode_match),
            },
            ConstraintKind::PrimaryKey => ConstraintDescriptor::PrimaryKey {
                name,
                table,
                columns,
            },
            ConstraintKind::Unique => ConstraintDescriptor::Unique {
                name,
                table,
                columns,
            },
            ConstraintKind::Exclude => ConstraintDescriptor::Exclude {
                name,
                table,
                columns,
            },
        }
    }

    /// Set the referential actions of a foreign key. No-op for other forms.
    pub fn with_actions(
        mut self,
        update: ReferentialAction,
        delete: ReferentialAction,
    ) -> Self {
        if let ConstraintDescriptor::ForeignKey {
            on_update,
            on_delete,
            ..
        } = &mut self
        {
            *on_update = Some(update);
            *on_delete = Some(delete);
        }
        self
    }

    /// Set the match policy of a foreign key. No-op for other forms.
    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        if let ConstraintDescriptor::ForeignKey { match_policy, .. } = &mut self {
            *match_policy = Some(policy);
        }
        self
    }

    /// Get the constraint name.
    pub fn name(&self) -> &str {
        match self {
            ConstraintDescriptor::Check { name, .. } => name,
            ConstraintDescriptor::ForeignKey { name, .. } => name,
            ConstraintDescriptor::PrimaryKey { name, .. } => name,
            ConstraintDescriptor::Unique { name, .. } => name,
            ConstraintDescriptor::Exclude { name, .. } => name,
            ConstraintDescriptor::Unrecognized { name, .. } => name,
        }
    }

    /// Get the table this constraint is defined on.
    pub fn table(&self) -> Oid {
        match self {
            ConstraintDescriptor::Check { table, .. }
            | ConstraintDescriptor::ForeignKey { table, .. }
            | ConstraintDescriptor::PrimaryKey { table, .. }
            | ConstraintDescriptor::Unique { table, .. }
            | ConstraintDescriptor::Exclude { table, .. }
            | ConstraintDescriptor::Unrecognized { table, .. } => *table,
        }
    }

    /// Get the constrained columns, in catalog order.
    pub fn columns(&self) -> &[AttrNumber] {
        match self {
            ConstraintDescriptor::Check { columns, .. }
            | ConstraintDescriptor::ForeignKey { columns, .. }
            | ConstraintDescriptor::PrimaryKey { columns, .. }
            | ConstraintDescriptor::Unique { columns, .. }
            | ConstraintDescriptor::Exclude { columns, .. } => columns,
            ConstraintDescriptor::Unrecognized { .. } => &[],
        }
    }

    /// The first constrained column, the only one naming looks at.
    pub fn first_column(&self) -> Option<AttrNumber> {
        self.columns().first().copied()
    }

    /// Classify this descriptor. `None` for unrecognized forms.
    pub fn kind(&self) -> Option<ConstraintKind> {
        codec::classify_by_descriptor(self)
    }
}

/// A constraint tuple as read from the system catalog.
///
/// Codes are the single characters the catalog stores. Non-foreign-key rows
/// leave the action and match codes unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConstraintRow {
    /// Constraint name.
    pub name: String,
    /// Table the constraint is defined on.
    pub table: Oid,
    /// Constraint type code.
    pub code: char,
    /// Constrained column ordinals.
    pub columns: Vec<AttrNumber>,
    /// Referenced table, for foreign keys.
    pub referenced_table: Option<Oid>,
    /// Referenced column ordinals, for foreign keys.
    pub referenced_columns: Vec<AttrNumber>,
    /// On-update action code.
    pub on_update: Option<char>,
    /// On-delete action code.
    pub on_delete: Option<char>,
    /// Match policy code.
    pub match_code: Option<char>,
    /// Check expression source.
    pub check_source: Option<String>,
}

impl CatalogConstraintRow {
    /// Create a row with the given name, table, and type code.
    pub fn new(name: impl Into<String>, table: Oid, code: char) -> Self {
        Self {
            name: name.into(),
            table,
            code,
            columns: Vec::new(),
            referenced_table: None,
            referenced_columns: Vec::new(),
            on_update: None,
            on_delete: None,
            match_code: None,
            check_source: None,
        }
    }

    /// Set the constrained columns.
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = AttrNumber>) -> Self {
        self.columns = columns.into_iter().collect();
        self
    }

    /// Set the referenced table and columns.
    pub fn with_reference(
        mut self,
        table: Oid,
        columns: impl IntoIterator<Item = AttrNumber>,
    ) -> Self {
        self.referenced_table = Some(table);
        self.referenced_columns = columns.into_iter().collect();
        self
    }

    /// Set the on-update and on-delete action codes.
    pub fn with_action_codes(mut self, update: char, delete: char) -> Self {
        self.on_update = Some(update);
        self.on_delete = Some(delete);
        self
    }

    /// Set the match policy code.
    pub fn with_match_code(mut self, code: char) -> Self {
        self.match_code = Some(code);
        self
    }

    /// Set the check expression source.
    pub fn with_check_source(mut self, source: impl Into<String>) -> Self {
        self.check_source = Some(source.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_descriptor() {
        let constraint = ConstraintDescriptor::unique("orders_email_key", 16384, 2);

        assert_eq!(constraint.kind(), Some(ConstraintKind::Unique));
        assert_eq!(constraint.name(), "orders_email_key");
        assert_eq!(constraint.table(), 16384);
        assert_eq!(constraint.first_column(), Some(2));
    }

    #[test]
    fn test_composite_unique_first_column() {
        let constraint =
            ConstraintDescriptor::unique_composite("order_items_key", 16400, [3, 1]);

        assert_eq!(constraint.columns(), &[3, 1]);
        assert_eq!(constraint.first_column(), Some(3));
    }

    #[test]
    fn test_foreign_key_builders() {
        let constraint = ConstraintDescriptor::foreign_key("items_order_fkey", 16400, 2, 16384, 1)
            .with_actions(ReferentialAction::NoAction, ReferentialAction::Cascade)
            .with_match_policy(MatchPolicy::Simple);

        match constraint {
            ConstraintDescriptor::ForeignKey {
                on_update,
                on_delete,
                match_policy,
                ..
            } => {
                assert_eq!(on_update, Some(ReferentialAction::NoAction));
                assert_eq!(on_delete, Some(ReferentialAction::Cascade));
                assert_eq!(match_policy, Some(MatchPolicy::Simple));
            }
            other => panic!("Expected foreign key, got {:?}", other),
        }
    }

    #[test]
    fn test_actions_ignored_on_other_forms() {
        let constraint = ConstraintDescriptor::primary_key("orders_pkey", 16384, [1])
            .with_actions(ReferentialAction::Cascade, ReferentialAction::Cascade);

        assert_eq!(
            constraint,
            ConstraintDescriptor::primary_key("orders_pkey", 16384, [1])
        );
    }

    #[test]
    fn test_from_foreign_key_row() {
        let row = CatalogConstraintRow::new("items_order_fkey", 16400, 'f')
            .with_columns([2])
            .with_reference(16384, [1])
            .with_action_codes('a', 'c')
            .with_match_code('s');

        let descriptor = ConstraintDescriptor::from_row(&row);

        assert_eq!(
            descriptor,
            ConstraintDescriptor::foreign_key("items_order_fkey", 16400, 2, 16384, 1)
                .with_actions(ReferentialAction::NoAction, ReferentialAction::Cascade)
                .with_match_policy(MatchPolicy::Simple)
        );
    }

    #[test]
    fn test_from_row_with_unknown_action_code() {
        let row = CatalogConstraintRow::new("items_order_fkey", 16400, 'f')
            .with_columns([2])
            .with_reference(16384, [1])
            .with_action_codes(' ', 'r');

        if let ConstraintDescriptor::ForeignKey {
            on_update,
            on_delete,
            match_policy,
            ..
        } = ConstraintDescriptor::from_row(&row)
        {
            assert_eq!(on_update, None);
            assert_eq!(on_delete, Some(ReferentialAction::Restrict));
            assert_eq!(match_policy, None);
        } else {
            panic!("Expected foreign key");
        }
    }

    #[test]
    fn test_from_check_row() {
        let row = CatalogConstraintRow::new("orders_total_check", 16384, 'c')
            .with_columns([4])
            .with_check_source("(total >= 0)");

        let descriptor = ConstraintDescriptor::from_row(&row);

        assert_eq!(descriptor.kind(), Some(ConstraintKind::Check));
        if let ConstraintDescriptor::Check { expression, .. } = descriptor {
            assert_eq!(expression, "(total >= 0)");
        }
    }

    #[test]
    fn test_from_row_unrecognized_code() {
        let row = CatalogConstraintRow::new("orders_audit", 16384, 't').with_columns([1]);

        let descriptor = ConstraintDescriptor::from_row(&row);

        assert_eq!(descriptor.kind(), None);
        assert!(descriptor.columns().is_empty());
        assert_eq!(descriptor.name(), "orders_audit");
    }
}
