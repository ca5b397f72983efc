//! Stage 1: light-touch cleanup before any rule runs. Case is left alone.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Lazy on both sides, so "1,2,3" only loses its first comma.
    static ref THOUSANDS_SEPARATOR: Regex =
        Regex::new(r"(\d+?),(\d+?)").expect("thousands separator regex is valid");
    // Case-sensitive: only a lowercase `s` after the apostrophe.
    static ref POSSESSIVE: Regex =
        Regex::new(r"\b(\S+?)'(s)").expect("possessive regex is valid");
}

/// Prepares raw text for the substitution rules.
///
/// 1. Deletes a comma between digits (`25,000` -> `25000`).
/// 2. Collapses possessives (`driver's` -> `drivers`).
/// 3. Hyphens become spaces.
/// 4. Forward slashes become spaces.
pub fn prep(text: &str) -> String {
    let text = THOUSANDS_SEPARATOR.replace_all(text, "${1}${2}");
    let text = POSSESSIVE.replace_all(&text, "${1}${2}");
    text.replace('-', " ").replace('/', " ")
}
