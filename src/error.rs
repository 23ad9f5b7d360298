use std::fmt::{self, Display};

use crate::model::InputPosition;

/// Error for the fallible surfaces of the crate.
///
/// The tokenize / build / render pipeline never fails, so this type only
/// covers the serde conversion path. An error carries a
/// source position when one exists; `Display` reports it in the same
/// row/column terms the tokenizer tracks.
#[derive(Debug, Clone)]
pub struct IndentError {
    message: String,
    position: Option<InputPosition>,
}

impl IndentError {
    pub fn simple(message: impl Into<String>) -> Self {
        Self { message: message.into(), position: None }
    }

    pub fn at(message: impl Into<String>, position: InputPosition) -> Self {
        Self { message: message.into(), position: Some(position) }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> Option<InputPosition> {
        self.position
    }
}

impl Display for IndentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(p) => write!(f, "{} (row {}, column {})", self.message, p.row, p.column),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for IndentError {}
