//! Console output for the qtac binary.

pub mod context;
pub mod icon;
pub mod json;
pub mod render;
pub mod terminal;
pub mod theme;
