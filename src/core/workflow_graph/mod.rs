//! Task-graph construction and workflow manifest composition.

pub mod assemble;
pub mod builder;
pub mod dot;
pub mod sanitize;
pub mod schema;
