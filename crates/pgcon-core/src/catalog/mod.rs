//! Semantic model of catalog constraint metadata.
//!
//! Enumerations for constraint kinds, referential actions and match
//! policies, plus the structural descriptors they are derived from.

mod constraint;
mod types;

pub use constraint::{CatalogConstraintRow, ConstraintDescriptor};
pub use types::{
    ArchivedConstraintKind, ArchivedMatchPolicy, ArchivedReferentialAction, ConstraintKind,
    MatchPolicy, ReferentialAction,
};

/// Object identifier of a table in the system catalog.
pub type Oid = u32;

/// Ordinal of a column within its table, starting at 1.
pub type AttrNumber = i16;
