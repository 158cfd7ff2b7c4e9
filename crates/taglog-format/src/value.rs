//! Typed argument values.
//!
//! [`Value`] is the closed set of argument types a template can reference.
//! Each call site supplies an ordered slice of values; placeholders pick them
//! out by position.
//!
//! # Example
//!
//! ```
//! use taglog_format::Value;
//!
//! assert_eq!(Value::from(15).render(), "15");
//! assert_eq!(Value::from(1.0).render(), "1.000000");
//! assert_eq!(Value::from("zero").render(), "zero");
//! assert_eq!(Value::from('x').render(), "x");
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::error::FormatError;

/// Number of fractional digits used for `Float` and `Double`.
pub const FLOAT_PRECISION: usize = 6;

/// A single call-site argument with its type tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Unsigned byte, rendered as a number rather than a character.
    Byte(u8),
    /// Single-precision float.
    Float(f32),
    /// Double-precision float.
    Double(f64),
    /// A single character.
    Char(char),
    /// Text, borrowed or owned.
    Text(Cow<'a, str>),
}

impl<'a> Value<'a> {
    /// Returns the name of this value's type tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Byte(_) => "byte",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::Char(_) => "char",
            Value::Text(_) => "text",
        }
    }

    /// Renders the value to text.
    ///
    /// Integers render in plain decimal, floats in fixed-point with
    /// [`FLOAT_PRECISION`] fractional digits, characters and text verbatim.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Appends the rendering to `out`.
    pub fn render_into(&self, out: &mut String) {
        use std::fmt::Write;

        // Writing into a String cannot fail.
        let _ = match self {
            Value::Int(n) => write!(out, "{}", n),
            Value::UInt(n) => write!(out, "{}", n),
            Value::Byte(n) => write!(out, "{}", n),
            // f32 widens to f64 first so both render the same digits.
            Value::Float(x) => write_fixed(out, f64::from(*x)),
            Value::Double(x) => write_fixed(out, *x),
            Value::Char(c) => {
                out.push(*c);
                Ok(())
            }
            Value::Text(s) => {
                out.push_str(s);
                Ok(())
            }
        };
    }

    /// Builds a value from untyped text, picking the narrowest matching tag.
    ///
    /// Tries, in order: signed integer, unsigned integer, float (as `Double`),
    /// single character, and falls back to text.
    ///
    /// ```
    /// use taglog_format::Value;
    ///
    /// assert_eq!(Value::infer("-3"), Value::Int(-3));
    /// assert_eq!(Value::infer("18446744073709551615"), Value::UInt(u64::MAX));
    /// assert_eq!(Value::infer("8.6"), Value::Double(8.6));
    /// assert_eq!(Value::infer("x"), Value::Char('x'));
    /// assert_eq!(Value::infer("hello"), Value::from("hello"));
    /// ```
    pub fn infer(raw: &'a str) -> Self {
        if let Ok(n) = raw.parse::<i64>() {
            return Value::Int(n);
        }
        if let Ok(n) = raw.parse::<u64>() {
            return Value::UInt(n);
        }
        // Words like "inf" or "nan" stay text.
        if raw.bytes().any(|b| b.is_ascii_digit()) {
            if let Ok(x) = raw.parse::<f64>() {
                return Value::Double(x);
            }
        }
        let mut chars = raw.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Value::Char(c);
        }
        Value::Text(Cow::Borrowed(raw))
    }

    /// Detaches the value from any borrowed text.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Int(n) => Value::Int(n),
            Value::UInt(n) => Value::UInt(n),
            Value::Byte(n) => Value::Byte(n),
            Value::Float(x) => Value::Float(x),
            Value::Double(x) => Value::Double(x),
            Value::Char(c) => Value::Char(c),
            Value::Text(s) => Value::Text(Cow::Owned(s.into_owned())),
        }
    }
}

fn write_fixed(out: &mut String, x: f64) -> fmt::Result {
    use std::fmt::Write;

    if x.is_nan() {
        out.push_str("nan");
        Ok(())
    } else {
        write!(out, "{:.*}", FLOAT_PRECISION, x)
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// Conversions from primitive types

impl From<i8> for Value<'_> {
    fn from(n: i8) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<i16> for Value<'_> {
    fn from(n: i16) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<i32> for Value<'_> {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<i64> for Value<'_> {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<isize> for Value<'_> {
    fn from(n: isize) -> Self {
        Value::Int(n as i64)
    }
}

impl From<u16> for Value<'_> {
    fn from(n: u16) -> Self {
        Value::UInt(u64::from(n))
    }
}

impl From<u32> for Value<'_> {
    fn from(n: u32) -> Self {
        Value::UInt(u64::from(n))
    }
}

impl From<u64> for Value<'_> {
    fn from(n: u64) -> Self {
        Value::UInt(n)
    }
}

impl From<usize> for Value<'_> {
    fn from(n: usize) -> Self {
        Value::UInt(n as u64)
    }
}

impl From<u8> for Value<'_> {
    fn from(n: u8) -> Self {
        Value::Byte(n)
    }
}

impl From<f32> for Value<'_> {
    fn from(x: f32) -> Self {
        Value::Float(x)
    }
}

impl From<f64> for Value<'_> {
    fn from(x: f64) -> Self {
        Value::Double(x)
    }
}

impl From<char> for Value<'_> {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Text(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        Value::Text(s)
    }
}

/// Converts dynamically typed JSON into an argument.
///
/// Only strings and numbers have a matching tag; everything else is
/// [`FormatError::UnsupportedType`].
impl<'a> TryFrom<&'a serde_json::Value> for Value<'a> {
    type Error = FormatError;

    fn try_from(value: &'a serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(s) => Ok(Value::Text(Cow::Borrowed(s))),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Value::UInt(u))
                } else {
                    n.as_f64()
                        .map(Value::Double)
                        .ok_or_else(|| FormatError::unsupported("number"))
                }
            }
            serde_json::Value::Null => Err(FormatError::unsupported("null")),
            serde_json::Value::Bool(_) => Err(FormatError::unsupported("bool")),
            serde_json::Value::Array(_) => Err(FormatError::unsupported("array")),
            serde_json::Value::Object(_) => Err(FormatError::unsupported("object")),
        }
    }
}

/// Converts a JSON array into an argument list.
///
/// ```
/// use serde_json::json;
/// use taglog_format::{values_from_json, Value};
///
/// let input = json!(["zero", 1.5, 2]);
/// let args = values_from_json(&input).unwrap();
/// assert_eq!(args, vec![Value::from("zero"), Value::Double(1.5), Value::Int(2)]);
/// ```
pub fn values_from_json(value: &serde_json::Value) -> Result<Vec<Value<'_>>, FormatError> {
    match value {
        serde_json::Value::Array(items) => items.iter().map(Value::try_from).collect(),
        single => Ok(vec![Value::try_from(single)?]),
    }
}
