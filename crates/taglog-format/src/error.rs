//! Error types for template evaluation.

use thiserror::Error;

/// Errors raised while scanning a template or resolving its arguments.
///
/// All of these describe a broken call site (bad template or wrong argument
/// list), so the evaluator stops at the first one and returns no output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A `{` was opened but the template ended before the closing `}`.
    #[error("unterminated placeholder starting at byte {position}")]
    MalformedTemplate { position: usize },

    /// Something other than a decimal digit appeared inside the braces.
    #[error("placeholder at byte {position} is not an integer index{}", found_suffix(.found))]
    InvalidIndex {
        position: usize,
        found: Option<char>,
    },

    /// The placeholder index is past the end of the argument list.
    #[error("argument index {index} out of range ({count} arguments supplied)")]
    IndexOutOfRange { index: usize, count: usize },

    /// The argument has a type the formatter cannot render.
    #[error("unsupported argument type: {type_name}")]
    UnsupportedType { type_name: String },

    /// A rendered argument exceeded the configured per-argument limit.
    #[error("argument {index} renders to {len} bytes, limit is {limit}")]
    ScratchOverflow {
        index: usize,
        len: usize,
        limit: usize,
    },
}

fn found_suffix(found: &Option<char>) -> String {
    match found {
        Some(c) => format!(" (found {:?})", c),
        None => String::new(),
    }
}

impl FormatError {
    pub(crate) fn unsupported(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }
}

/// Result type for formatting operations.
pub type Result<T> = std::result::Result<T, FormatError>;
