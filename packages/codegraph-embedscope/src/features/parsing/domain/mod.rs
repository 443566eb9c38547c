//! Structural analysis domain models

mod error;
mod facts;

pub use error::ParseError;
pub use facts::{PatternKind, StructuralFacts};
