//! pgcon Core - catalog code translation and constraint naming.
//!
//! Translates the single-character codes PostgreSQL keeps in its constraint
//! catalog into typed values, and derives conventional constraint names from
//! table and column metadata supplied by the caller.

pub mod catalog;
pub mod codec;
pub mod error;
pub mod naming;

pub use catalog::{
    AttrNumber, CatalogConstraintRow, ConstraintDescriptor, ConstraintKind, MatchPolicy, Oid,
    ReferentialAction,
};
pub use codec::{
    classify_by_catalog_char, classify_by_descriptor, decode_action, decode_match, encode_action,
    encode_kind, encode_match, CharCodec,
};
pub use error::{Error, Result};
pub use naming::{
    compute_constraint_name, compute_index_name, CatalogResolver, ConstraintNamer,
    MemoryResolver, NamingConvention, NamingTemplate, ResolveError,
};
