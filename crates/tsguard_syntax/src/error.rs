//! Error types for the tsguard workspace.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use thiserror::Error;

/// Convenient result alias for tsguard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for tsguard operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional name of the file being processed.
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Attaches the name of the file being processed.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>, line: u32, column: u32, context: String) -> Self {
        Self::new(ErrorKind::Parse {
            message: message.into(),
            line,
            column,
            context,
        })
    }

    /// Creates an unsupported field type error.
    #[must_use]
    pub fn unsupported_field_type(
        interface: impl Into<String>,
        field: impl Into<String>,
        type_text: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::UnsupportedFieldType {
            interface: interface.into(),
            field: field.into(),
            type_text: type_text.into(),
        })
    }

    /// Creates an unresolved reference error.
    #[must_use]
    pub fn unresolved_reference(interface: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnresolvedReference {
            interface: interface.into(),
            name: name.into(),
        })
    }

    /// Creates a no-interfaces error.
    #[must_use]
    pub fn no_interfaces(file: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoInterfaces { file: file.into() })
    }

    /// Formats the error together with its file context, if any.
    #[must_use]
    pub fn display_with_context(&self) -> String {
        match &self.context {
            Some(file) => format!("{file}: {self}"),
            None => self.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Parse error in a declaration file.
    #[error("parse error at {line}:{column}: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// A field type that is neither a primitive nor a single named reference.
    #[error("unsupported type for field {interface}.{field}: {type_text}")]
    UnsupportedFieldType {
        /// The interface containing the field.
        interface: String,
        /// The field name.
        field: String,
        /// Source text of the offending type annotation.
        type_text: String,
    },

    /// A referenced name that was neither imported nor declared in the file.
    #[error("unresolved reference in {interface}: {name} was never imported or declared")]
    UnresolvedReference {
        /// The interface referencing the name.
        interface: String,
        /// The unresolved name.
        name: String,
    },

    /// The input file contains no interface declarations.
    #[error("no interface declarations found in {file}")]
    NoInterfaces {
        /// The input file.
        file: String,
    },

    /// Underlying I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
