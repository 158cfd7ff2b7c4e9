//! Template evaluation.
//!
//! [`Formatter`] drives the scanner over a template, copying literal text and
//! substituting each `{N}` with the rendering of argument `N`. The whole
//! result is built in memory; on error nothing is returned.

use crate::error::{FormatError, Result};
use crate::level::Level;
use crate::resolver::render_argument;
use crate::scanner::{placeholders, scan_index};
use crate::value::Value;

/// Options controlling evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Upper bound, in bytes, on a single argument's rendering.
    ///
    /// `None` (the default) lets renderings grow as needed.
    pub max_argument_len: Option<usize>,
}

/// Evaluates templates against positional argument lists.
///
/// # Example
///
/// ```
/// use taglog_format::{Formatter, Level, Value};
///
/// let formatter = Formatter::new();
/// let out = formatter
///     .evaluate(
///         Level::Warning,
///         "Here we go: {0} {2} {1} {0}",
///         &[Value::from("zero"), Value::from(1.0), Value::from(2)],
///     )
///     .unwrap();
/// assert_eq!(out, "Warning: Here we go: zero 2 1.000000 zero");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    /// Creates a formatter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a formatter with the given options.
    pub fn with_options(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Limits each argument's rendering to `limit` bytes.
    pub fn max_argument_len(mut self, limit: usize) -> Self {
        self.options.max_argument_len = Some(limit);
        self
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Evaluates `template`, prefixed with the level's tag.
    pub fn evaluate(&self, level: Level, template: &str, args: &[Value<'_>]) -> Result<String> {
        let prefix = level.prefix();
        let mut out = String::with_capacity(prefix.len() + template.len());
        out.push_str(prefix);
        self.evaluate_into(template, args, &mut out)?;
        Ok(out)
    }

    /// Evaluates `template` without any level prefix.
    pub fn format(&self, template: &str, args: &[Value<'_>]) -> Result<String> {
        let mut out = String::with_capacity(template.len());
        self.evaluate_into(template, args, &mut out)?;
        Ok(out)
    }

    fn evaluate_into(&self, template: &str, args: &[Value<'_>], out: &mut String) -> Result<()> {
        let mut cursor = 0;

        while let Some(ch) = template.get(cursor..).and_then(|rest| rest.chars().next()) {
            match scan_index(template, &mut cursor)? {
                Some(index) => {
                    render_argument(index, args, self.options.max_argument_len, out)?;
                }
                None => {
                    out.push(ch);
                    cursor += ch.len_utf8();
                }
            }
        }

        Ok(())
    }
}

/// Evaluates `template` with default options, prefixed with the level's tag.
pub fn evaluate(level: Level, template: &str, args: &[Value<'_>]) -> Result<String> {
    Formatter::new().evaluate(level, template, args)
}

/// Evaluates `template` with default options and no prefix.
///
/// ```
/// use taglog_format::{format, Value};
///
/// assert_eq!(format("{0}", &[Value::from(15)]).unwrap(), "15");
/// ```
pub fn format(template: &str, args: &[Value<'_>]) -> Result<String> {
    Formatter::new().format(template, args)
}

/// Checks a template against an argument count without rendering anything.
///
/// Reports the first malformed placeholder, or the first index that is not
/// below `arg_count`.
///
/// ```
/// use taglog_format::{validate_template, FormatError};
///
/// assert!(validate_template("{0} and {1}", 2).is_ok());
/// assert_eq!(
///     validate_template("{0} and {2}", 2),
///     Err(FormatError::IndexOutOfRange { index: 2, count: 2 })
/// );
/// ```
pub fn validate_template(template: &str, arg_count: usize) -> Result<()> {
    for index in placeholders(template) {
        let index = index?;
        if index >= arg_count {
            return Err(FormatError::IndexOutOfRange {
                index,
                count: arg_count,
            });
        }
    }
    Ok(())
}
