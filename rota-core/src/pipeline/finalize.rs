//! Stage 4: punctuation, whitespace and case.

/// Non-ASCII marks stripped along with ASCII punctuation.
pub const EXTRA_PUNCTUATION: [char; 5] = ['\u{2018}', '\u{2019}', '\u{00B7}', '\u{2014}', '\u{00BB}'];

/// Dollar amounts carry meaning in offense text, so `$` is kept.
pub const PRESERVED_SYMBOL: char = '$';

/// True for characters that `finalize` turns into whitespace.
pub fn is_stripped_punctuation(c: char) -> bool {
    c != PRESERVED_SYMBOL && (c.is_ascii_punctuation() || EXTRA_PUNCTUATION.contains(&c))
}

/// ASCII file, group, record and unit separators. Treated as whitespace
/// alongside `char::is_whitespace`.
pub const INFORMATION_SEPARATORS: std::ops::RangeInclusive<char> = '\u{1c}'..='\u{1f}';

/// True for characters that separate words in the final text.
pub fn is_separator_whitespace(c: char) -> bool {
    c.is_whitespace() || INFORMATION_SEPARATORS.contains(&c)
}

/// Replaces punctuation with spaces, collapses whitespace runs to a single
/// space, trims, and lowercases.
pub fn finalize(text: &str) -> String {
    let spaced: String = text
        .chars()
        .map(|c| if is_stripped_punctuation(c) { ' ' } else { c })
        .collect();
    spaced
        .split(is_separator_whitespace)
        .filter(|word| !word.is_empty())
        .collect::<Vec<&str>>()
        .join(" ")
        .to_lowercase()
}
