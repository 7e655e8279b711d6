//! Domain Layer
//!
//! Pure logic of qtac without process or filesystem access.
//!
//! ## Structure
//!
//! - `entities/` - Resolved targets and their outcomes
//! - `value_objects/` - File kinds, mapping rules, variable sets
//! - `services/` - Resource descriptor reference parsing
//! - `ports/` - The compiler interface implemented by infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
