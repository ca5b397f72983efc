//! Stage 2: the substitution engine.
//!
//! Rules run one after another over the *current* text, so a rule sees the
//! output of every rule before it and none of the rules after it. There is a
//! single forward pass; earlier rules are never re-run.

use std::borrow::Cow;

use log::warn;

use super::replace_all;
use crate::catalog::SubstitutionRule;

/// Applies `rules` after a stable sort by priority (ties keep slice order).
pub fn substitute(text: &str, rules: &[SubstitutionRule]) -> String {
    let mut ordered: Vec<&SubstitutionRule> = rules.iter().collect();
    ordered.sort_by_key(|rule| rule.priority);
    apply_substitutions(text, ordered)
}

/// Applies `rules` exactly in the order given.
pub fn apply_substitutions<'r, I>(text: &str, rules: I) -> String
where
    I: IntoIterator<Item = &'r SubstitutionRule>,
{
    let mut current = text.to_string();
    for rule in rules {
        let next = match apply_substitution(rule, &current) {
            Cow::Owned(next) => next,
            Cow::Borrowed(_) => continue,
        };
        current = next;
    }
    current
}

/// Replaces every match of one rule. On a matcher error the text is returned
/// unchanged for this rule.
pub fn apply_substitution<'t>(rule: &SubstitutionRule, text: &'t str) -> Cow<'t, str> {
    match replace_all(&rule.regex, text, |caps, dst| rule.replacement.expand_into(caps, dst)) {
        Ok(out) => out,
        Err(e) => {
            warn!(
                "Substitution #{} '{}' skipped: {}",
                rule.index, rule.description, e
            );
            Cow::Borrowed(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{compile_catalog, RuleCatalog};
    use crate::config::{CatalogConfig, SubstitutionDef};

    fn build(defs: &[(&str, &str, &str, i32)]) -> RuleCatalog {
        let config = CatalogConfig {
            substitutions: defs
                .iter()
                .map(|(d, p, r, pr)| SubstitutionDef {
                    description: d.to_string(),
                    pattern: p.to_string(),
                    replacement: r.to_string(),
                    priority: *pr,
                    note: None,
                })
                .collect(),
            removals: vec![],
        };
        compile_catalog(&config).unwrap()
    }

    #[test]
    fn later_rules_see_earlier_output() {
        let catalog = build(&[
            ("With Intent", r"\bw{sep}int\b", "with intent", 10),
            ("possession with intent", r"\bp{sep}with{sep}intent", "possession with intent", 30),
        ]);
        assert_eq!(substitute("P W INT", catalog.substitutions()), "possession with intent");
    }

    #[test]
    fn priority_decides_which_rule_wins() {
        // Same rules, priorities swapped: the composite rule runs first and
        // finds nothing to match.
        let catalog = build(&[
            ("With Intent", r"\bw{sep}int\b", "with intent", 30),
            ("possession with intent", r"\bp{sep}with{sep}intent", "possession with intent", 10),
        ]);
        assert_eq!(substitute("P W INT", catalog.substitutions()), "P with intent");
    }

    #[test]
    fn each_rule_runs_once() {
        let catalog = build(&[
            ("a to b", r"\ba\b", "b", 10),
            ("b to a", r"\bb\b", "a", 10),
        ]);
        assert_eq!(substitute("a b", catalog.substitutions()), "a a");
    }

    #[test]
    fn ties_keep_authored_order() {
        let catalog = build(&[
            ("first", r"\bx\b", "y", 10),
            ("second", r"\by\b", "z", 10),
        ]);
        assert_eq!(substitute("x", catalog.substitutions()), "z");
    }

    #[test]
    fn capture_groups_are_available_to_templates() {
        let catalog = build(&[("swap", r"(\d+)\s*(gr|gms)\b", "$1 grams", 10)]);
        assert_eq!(substitute("28GMS of", catalog.substitutions()), "28 grams of");
    }

    #[test]
    fn matching_ignores_case() {
        let catalog = build(&[("Weapon", r"\bwpn\b", "weapon", 20)]);
        assert_eq!(substitute("DEADLY WPN", catalog.substitutions()), "DEADLY weapon");
    }
}
