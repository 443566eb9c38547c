//! Structural analysis error

use serde::Serialize;
use thiserror::Error;

use crate::shared::models::Location;

/// Snippet text violates the source grammar
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Parse error in snippet {snippet_index}{}: {message}", location_suffix(.location))]
pub struct ParseError {
    pub snippet_index: usize,
    pub message: String,
    pub location: Option<Location>,
}

impl ParseError {
    pub fn new(snippet_index: usize, message: impl Into<String>) -> Self {
        Self {
            snippet_index,
            message: message.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

fn location_suffix(location: &Option<Location>) -> String {
    match location {
        Some(loc) => format!(" at {loc}"),
        None => String::new(),
    }
}
