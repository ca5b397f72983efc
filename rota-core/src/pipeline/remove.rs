//! Stage 3: removal rules, run after every substitution.

use std::borrow::Cow;

use log::warn;

use super::replace_all;
use crate::catalog::RemovalRule;

/// Applies each removal rule in slice order. Matches become a single space
/// rather than vanishing, so neighbouring tokens never fuse.
pub fn remove(text: &str, rules: &[RemovalRule]) -> String {
    let mut current = text.to_string();
    for rule in rules {
        let next = match apply_removal(rule, &current) {
            Cow::Owned(next) => next,
            Cow::Borrowed(_) => continue,
        };
        current = next;
    }
    current
}

pub fn apply_removal<'t>(rule: &RemovalRule, text: &'t str) -> Cow<'t, str> {
    match replace_all(&rule.regex, text, |_, dst| dst.push(' ')) {
        Ok(out) => out,
        Err(e) => {
            warn!("Removal #{} '{}' skipped: {}", rule.index, rule.description, e);
            Cow::Borrowed(text)
        }
    }
}
