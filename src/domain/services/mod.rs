//! Domain Services
//!
//! Stateless logic that does not belong to a single value.

mod references;

pub use references::{parse_file_references, resolve_references};
