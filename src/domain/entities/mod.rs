//! Domain entities representing core business objects.
//!
//! - [`Entry`] - A single path-to-URL route record
//! - [`LookupTable`] - Immutable path-to-URL map built from one source

pub mod entry;
pub mod lookup_table;

pub use entry::Entry;
pub use lookup_table::{LookupTable, build_lookup};
