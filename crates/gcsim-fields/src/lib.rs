//! Partial-response field selection for object listings.
//!
//! Clients narrow a listing with the `fields` query parameter, e.g.
//! `fields=kind,items(name,size)`. This crate turns that expression into a
//! [`Selection`] and projects a listing down to it.
//!
//! ```text
//! "kind,items(name)" --parse--> Selection --project(prefixes, objects)--> ResponseDocument
//! ```
//!
//! Both steps are pure. The only shared data is the const field registry
//! ([`ItemField`], [`TopLevelField`]), so callers may run them from any
//! number of tasks without coordination.

pub mod error;
pub mod parser;
pub mod projector;
pub mod registry;
pub mod selection;

pub use error::{FieldsError, FieldsResult};
pub use parser::parse;
pub use projector::{project, PartialItems, PartialListing, ResponseDocument};
pub use registry::{ItemField, TopLevelField, NEXT_PAGE_TOKEN};
pub use selection::Selection;
