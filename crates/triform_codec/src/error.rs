use core::fmt;
use std::io;

use thiserror::Error;

/// The textual encoding a diagnostic refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Xml,
    Ini,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "JSON",
            Self::Xml => "XML",
            Self::Ini => "INI",
        };
        f.write_str(name)
    }
}

/// Errors a codec reports instead of silently skipping.
///
/// Only document-level failures surface here. Member-level mismatches
/// inside a parsed document stay best effort and never abort a decode.
#[derive(Debug, Error)]
pub enum MarshalError {
    /// The document text is not well formed.
    #[error("{format} parse error: {message}")]
    Parse { format: Format, message: String },

    /// The XML document's root element has a different name.
    #[error("root element `{expected}` not found")]
    MissingRoot { expected: String },

    /// The INI document has no section of that name.
    #[error("section `{name}` not found")]
    MissingSection { name: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}
