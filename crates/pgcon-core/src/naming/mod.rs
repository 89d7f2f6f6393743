//! Constraint naming.
//!
//! A [`NamingConvention`] maps constraint kinds to templates; a
//! [`ConstraintNamer`] fills a template in with names looked up through a
//! [`CatalogResolver`].

mod convention;
mod generator;
mod resolver;

pub use convention::{NamingConvention, NamingTemplate};
pub use generator::{compute_constraint_name, compute_index_name, ConstraintNamer};
pub use resolver::{CatalogResolver, MemoryResolver, ResolveError};
