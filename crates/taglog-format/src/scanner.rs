//! Placeholder scanning.
//!
//! A placeholder is `{` followed by decimal digits and `}`. Empty braces `{}`
//! name index 0. There is no escape for a literal `{`; every opening brace must
//! start a valid placeholder.

use crate::error::{FormatError, Result};

/// Checks whether `template[*cursor..]` begins a placeholder.
///
/// Returns `Ok(None)` without moving the cursor when the current character is
/// not `{`; the caller copies it as literal text. On success the cursor is
/// left just past the closing `}` and the parsed index is returned.
///
/// Characters between the braces are checked in order, so `{a` reports
/// [`FormatError::InvalidIndex`] while `{0` reports
/// [`FormatError::MalformedTemplate`].
///
/// ```
/// use taglog_format::scanner::scan_index;
///
/// let template = "{12} rest";
/// let mut cursor = 0;
/// assert_eq!(scan_index(template, &mut cursor), Ok(Some(12)));
/// assert_eq!(cursor, 4);
/// assert_eq!(scan_index(template, &mut cursor), Ok(None));
/// assert_eq!(cursor, 4);
/// ```
pub fn scan_index(template: &str, cursor: &mut usize) -> Result<Option<usize>> {
    let start = *cursor;
    let bytes = template.as_bytes();

    if bytes.get(start) != Some(&b'{') {
        return Ok(None);
    }

    let mut index: usize = 0;
    let mut pos = start + 1;

    loop {
        match bytes.get(pos) {
            None => return Err(FormatError::MalformedTemplate { position: start }),
            Some(b'}') => break,
            Some(b) if b.is_ascii_digit() => {
                // Saturate; a huge index is simply out of range downstream.
                index = index
                    .saturating_mul(10)
                    .saturating_add(usize::from(b - b'0'));
                pos += 1;
            }
            Some(_) => {
                return Err(FormatError::InvalidIndex {
                    position: pos,
                    found: template.get(pos..).and_then(|rest| rest.chars().next()),
                })
            }
        }
    }

    *cursor = pos + 1;
    Ok(Some(index))
}

/// Iterator over the placeholder indices of a template, in order.
///
/// Stops after yielding the first error.
pub struct Placeholders<'t> {
    template: &'t str,
    cursor: usize,
    done: bool,
}

/// Returns an iterator over every placeholder index in `template`.
///
/// ```
/// use taglog_format::scanner::placeholders;
///
/// let found: Vec<usize> = placeholders("{0} {2} {1} {0}").map(Result::unwrap).collect();
/// assert_eq!(found, vec![0, 2, 1, 0]);
/// ```
pub fn placeholders(template: &str) -> Placeholders<'_> {
    Placeholders {
        template,
        cursor: 0,
        done: false,
    }
}

impl Iterator for Placeholders<'_> {
    type Item = Result<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        // Literal runs contain no '{', so jump straight to the next one.
        let offset = self.template.get(self.cursor..)?.find('{')?;
        self.cursor += offset;
        match scan_index(self.template, &mut self.cursor) {
            Ok(Some(index)) => Some(Ok(index)),
            Ok(None) => None,
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(template: &str) -> Result<Option<usize>> {
        let mut cursor = 0;
        scan_index(template, &mut cursor)
    }

    #[test]
    fn test_literal_leaves_cursor() {
        let mut cursor = 0;
        assert_eq!(scan_index("abc", &mut cursor), Ok(None));
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_end_of_template_is_not_placeholder() {
        let mut cursor = 3;
        assert_eq!(scan_index("abc", &mut cursor), Ok(None));
    }

    #[test]
    fn test_single_and_multi_digit() {
        assert_eq!(scan("{0}"), Ok(Some(0)));
        assert_eq!(scan("{42}"), Ok(Some(42)));
        assert_eq!(scan("{007}"), Ok(Some(7)));
    }

    #[test]
    fn test_cursor_advances_past_brace() {
        let mut cursor = 2;
        assert_eq!(scan_index("a {10}b", &mut cursor), Ok(Some(10)));
        assert_eq!(cursor, 6);
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(scan("{0"), Err(FormatError::MalformedTemplate { position: 0 }));
        assert_eq!(scan("{"), Err(FormatError::MalformedTemplate { position: 0 }));
    }

    #[test]
    fn test_non_digit() {
        assert_eq!(
            scan("{x}"),
            Err(FormatError::InvalidIndex {
                position: 1,
                found: Some('x')
            })
        );
        assert_eq!(
            scan("{-1}"),
            Err(FormatError::InvalidIndex {
                position: 1,
                found: Some('-')
            })
        );
    }

    #[test]
    fn test_non_digit_reported_before_missing_brace() {
        assert!(matches!(scan("{1a"), Err(FormatError::InvalidIndex { position: 2, .. })));
    }

    #[test]
    fn test_empty_braces_are_index_zero() {
        let mut cursor = 1;
        assert_eq!(scan_index("a{}b", &mut cursor), Ok(Some(0)));
        assert_eq!(cursor, 3);
    }

    #[test]
    fn test_multibyte_inside_braces() {
        assert_eq!(
            scan("{é}"),
            Err(FormatError::InvalidIndex {
                position: 1,
                found: Some('é')
            })
        );
    }

    #[test]
    fn test_huge_index_saturates() {
        assert_eq!(scan("{99999999999999999999999999}"), Ok(Some(usize::MAX)));
    }

    #[test]
    fn test_placeholders_iterator() {
        let found: Vec<_> = placeholders("a{1}b{0}c").collect();
        assert_eq!(found, vec![Ok(1), Ok(0)]);
        assert_eq!(placeholders("no placeholders").count(), 0);
    }

    #[test]
    fn test_placeholders_stops_after_error() {
        let found: Vec<_> = placeholders("{0} {x} {1}").collect();
        assert_eq!(found.len(), 2);
        assert!(found[1].is_err());
    }
}
