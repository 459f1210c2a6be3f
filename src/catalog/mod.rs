//! Read-only vocabulary catalog
//!
//! A fixed, ordered mapping from category name to its display icon and word
//! list. The catalog is supplied from outside (a JSON file for the CLI) and
//! is never mutated or persisted by this crate.

mod models;

pub use models::{Catalog, CatalogError, CategoryData, WordPair};
