//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod file_kind;
mod mapping_rule;
pub mod variables;

pub use file_kind::FileKind;
pub use mapping_rule::MappingRule;
pub use variables::{substitute, VariableSet};
