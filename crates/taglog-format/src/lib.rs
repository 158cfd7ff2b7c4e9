//! # taglog-format - Positional Template Evaluation
//!
//! Evaluates templates containing `{N}` placeholders against an ordered list
//! of typed [`Value`]s. Each placeholder is replaced by the rendering of the
//! argument at that zero-based position; indices may repeat and appear in
//! any order.
//!
//! This crate is the formatting core of the `taglog` logger, but has no I/O
//! and can be used on its own.
//!
//! ## Quick Start
//!
//! ```rust
//! use taglog_format::{evaluate, Level, Value};
//!
//! let out = evaluate(
//!     Level::Info,
//!     "different params: {0} {0} {0} {0}",
//!     &[Value::from("haha")],
//! )
//! .unwrap();
//! assert_eq!(out, "Info: different params: haha haha haha haha");
//! ```
//!
//! ## Rendering
//!
//! | Value | Rendering |
//! |-------|-----------|
//! | `Int`, `UInt`, `Byte` | decimal, no padding |
//! | `Float`, `Double` | fixed-point, six fractional digits |
//! | `Char` | the character |
//! | `Text` | verbatim, no escaping |
//!
//! ## Errors
//!
//! Evaluation stops at the first problem and returns a [`FormatError`]:
//! an unterminated `{`, a non-digit inside braces, an index past the end of
//! the argument list, or (with a configured limit) an oversize argument.

mod error;
mod evaluator;
mod level;
mod resolver;
pub mod scanner;
mod value;

pub use error::{FormatError, Result};
pub use evaluator::{evaluate, format, validate_template, FormatOptions, Formatter};
pub use level::{Level, ParseLevelError};
pub use resolver::{render_argument, resolve};
pub use value::{values_from_json, Value, FLOAT_PRECISION};
