//! Positional argument lookup and rendering.

use crate::error::{FormatError, Result};
use crate::value::Value;

/// Finds the argument at `index`.
///
/// Walks the list from the head, counting down until the target is reached.
/// Each call starts over from the first argument, so repeated or
/// out-of-order indices always land on the same value.
pub fn resolve<'v, 'a>(index: usize, args: &'v [Value<'a>]) -> Result<&'v Value<'a>> {
    let mut remaining = index;
    for arg in args {
        if remaining == 0 {
            return Ok(arg);
        }
        remaining -= 1;
    }
    Err(FormatError::IndexOutOfRange {
        index,
        count: args.len(),
    })
}

/// Resolves `index` and appends its rendering to `out`.
///
/// With a `limit`, a rendering longer than `limit` bytes fails with
/// [`FormatError::ScratchOverflow`] and `out` is left as it was.
pub fn render_argument(
    index: usize,
    args: &[Value<'_>],
    limit: Option<usize>,
    out: &mut String,
) -> Result<()> {
    let value = resolve(index, args)?;
    let mark = out.len();
    value.render_into(out);

    if let Some(limit) = limit {
        let len = out.len() - mark;
        if len > limit {
            out.truncate(mark);
            return Err(FormatError::ScratchOverflow { index, len, limit });
        }
    }
    Ok(())
}
