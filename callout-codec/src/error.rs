//! Error types for codec and settings operations

use thiserror::Error;

/// Errors raised by settings mutations, imports and rendering.
///
/// Every variant is recoverable: callers report it and keep the prior state.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A required field of a definition was empty
    #[error("{entity} {field} cannot be empty")]
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },

    /// A definition with the same name already exists
    #[error("A {entity} with the name '{name}' already exists")]
    DuplicateName { entity: &'static str, name: String },

    /// An index-addressed edit or removal pointed past the end of the list
    #[error("No {entity} at index {index} (list has {len})")]
    IndexOutOfRange {
        entity: &'static str,
        index: usize,
        len: usize,
    },

    /// An import file did not have the expected shape
    #[error("Invalid or malformed import file: {0}")]
    InvalidImport(String),

    /// A list asked for an edit but has no editor to hand it to
    #[error("Creator component not linked")]
    EditorNotLinked,

    /// Markdown or HTML rendering failed
    #[error("Render error: {0}")]
    Render(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results carrying a [`CodecError`]
pub type Result<T> = std::result::Result<T, CodecError>;
