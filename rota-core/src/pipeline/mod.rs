//! The four pipeline stages, in the order they run:
//!
//! 1. [`prep`] - thousands separators, possessives, hyphens and slashes.
//! 2. [`substitute`] - every substitution rule, in priority order.
//! 3. [`remove`] - removal rules; each match becomes one space.
//! 4. [`finalize`] - punctuation, whitespace and case.
//!
//! Each stage is a pure `&str -> String` function so it can be tested and
//! traced on its own.

pub mod finalize;
pub mod prep;
pub mod remove;
pub mod substitute;

pub use finalize::finalize;
pub use prep::prep;
pub use remove::{apply_removal, remove};
pub use substitute::{apply_substitution, apply_substitutions, substitute};

use std::borrow::Cow;

use fancy_regex::{Captures, Regex};

/// Leftmost, non-overlapping replace-all over `text`, writing each
/// replacement through `rep`. Borrows `text` when nothing matched.
///
/// Unlike `Regex::replace_all`, a matcher error (backtrack limit) is returned
/// instead of panicking.
pub(crate) fn replace_all<'t, F>(
    regex: &Regex,
    text: &'t str,
    mut rep: F,
) -> Result<Cow<'t, str>, fancy_regex::Error>
where
    F: FnMut(&Captures<'_>, &mut String),
{
    let mut out: Option<String> = None;
    let mut last = 0;

    for caps in regex.captures_iter(text) {
        let caps = caps?;
        let whole = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };
        let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 16));
        buf.push_str(&text[last..whole.start()]);
        rep(&caps, buf);
        last = whole.end();
    }

    Ok(match out {
        Some(mut buf) => {
            buf.push_str(&text[last..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(text),
    })
}
