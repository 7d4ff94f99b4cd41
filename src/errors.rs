use std::fmt;

/// An error that can occur when processing a document
#[derive(Debug)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error(Box::new(kind))
    }

    pub(crate) fn eof() -> Error {
        Error::new(ErrorKind::Eof)
    }

    /// Return the specific type of error
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }

    /// Returns true if the error represents a clean end of the input stream
    pub fn is_eof(&self) -> bool {
        matches!(*self.0, ErrorKind::Eof)
    }

    /// Returns the row and column where the error occurred (if available)
    ///
    /// Rows start at 1, columns at 0.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.0.position()
    }
}

/// Specific type of error
#[derive(Debug)]
pub enum ErrorKind {
    /// End of the input stream
    Eof,

    /// The underlying reader failed
    Io {
        row: usize,
        col: usize,
        source: std::io::Error,
    },

    /// The input contained a byte sequence that is not valid UTF-8
    InvalidUtf8 { row: usize, col: usize },

    /// The input ended while a quote was still open
    UnclosedQuote { quote: char, row: usize, col: usize },

    /// An expected keyword, identifier, or newline was not found
    Syntax { msg: String, row: usize, col: usize },

    /// The same option was declared as both a scalar and a list
    TypeConflict {
        option: String,
        row: usize,
        col: usize,
    },
}

impl ErrorKind {
    pub fn position(&self) -> Option<(usize, usize)> {
        match *self {
            ErrorKind::Io { row, col, .. } => Some((row, col)),
            ErrorKind::InvalidUtf8 { row, col } => Some((row, col)),
            ErrorKind::UnclosedQuote { row, col, .. } => Some((row, col)),
            ErrorKind::Syntax { row, col, .. } => Some((row, col)),
            ErrorKind::TypeConflict { row, col, .. } => Some((row, col)),
            ErrorKind::Eof => None,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self.0 {
            ErrorKind::Io { ref source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ErrorKind::Eof => write!(f, "unexpected end of file"),
            ErrorKind::Io {
                row,
                col,
                ref source,
            } => {
                write!(f, "io error: {} (row {}, column {})", source, row, col)
            }
            ErrorKind::InvalidUtf8 { row, col } => {
                write!(f, "invalid utf-8 sequence (row {}, column {})", row, col)
            }
            ErrorKind::UnclosedQuote { quote, row, col } => {
                let which = if quote == '\'' { "single" } else { "double" };
                write!(f, "unclosed {} quote (row {}, column {})", which, row, col)
            }
            ErrorKind::Syntax { ref msg, row, col } => {
                write!(f, "syntax error: {} (row {}, column {})", msg, row, col)
            }
            ErrorKind::TypeConflict {
                ref option,
                row,
                col,
            } => write!(
                f,
                "option '{}' redeclared with a different type (row {}, column {})",
                option, row, col
            ),
        }
    }
}
