// rota-core/tests/catalog_tests.rs
use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use test_log::test;

use rota_core::config::CatalogConfig;
use rota_core::{catalog_fingerprint, compile_catalog, RuleCatalog};

static CATALOG: Lazy<RuleCatalog> =
    Lazy::new(|| RuleCatalog::builtin().expect("built-in catalog compiles"));

#[test]
fn test_builtin_catalog_size() {
    assert_eq!(CATALOG.substitutions().len(), 529);
    assert_eq!(CATALOG.removals().len(), 3);
    assert_eq!(CATALOG.len(), 532);
}

#[test]
fn test_removals_are_in_authored_order() {
    let names: Vec<&str> = CATALOG.removals().iter().map(|r| r.description.as_str()).collect();
    assert_eq!(names, vec!["OBSCIS", "MO Suffix", "Statute Prefix"]);
}

#[test]
fn test_priority_levels() {
    let levels: BTreeSet<i32> = CATALOG.substitutions().iter().map(|r| r.priority).collect();
    assert_eq!(levels, BTreeSet::from([3, 4, 5, 9, 10, 20, 30]));

    let default_count = CATALOG.substitutions().iter().filter(|r| r.priority == 10).count();
    assert_eq!(default_count, 428);
}

#[test]
fn test_execution_order_is_sorted_and_complete() {
    let ordered: Vec<_> = CATALOG.by_priority().collect();
    assert_eq!(ordered.len(), CATALOG.substitutions().len());
    for pair in ordered.windows(2) {
        assert!(pair[0].priority <= pair[1].priority);
        if pair[0].priority == pair[1].priority {
            assert!(pair[0].index < pair[1].index, "ties must keep authored order");
        }
    }
}

#[test]
fn test_duplicate_descriptions_are_preserved() {
    let count = |d: &str| CATALOG.substitutions().iter().filter(|r| r.description == d).count();
    assert_eq!(count("heroine"), 2);
    assert_eq!(count("assault and battery 2"), 2);
}

#[test]
fn test_escaped_separator_is_kept_literal() {
    let rule = CATALOG
        .substitutions()
        .iter()
        .find(|r| r.description == "With Out")
        .expect("With Out rule present");
    assert_eq!(rule.pattern, r"\bw\{sep\}(?:o|out)\b");
    assert!(rule.regex.is_match("w{sep}o").unwrap());
    assert!(!rule.regex.is_match("w o").unwrap());
}

#[test]
fn test_separator_is_expanded_in_composite_rules() {
    assert!(CATALOG
        .substitutions()
        .iter()
        .any(|r| r.pattern.contains(rota_core::SEPARATOR)));
    assert!(CATALOG
        .substitutions()
        .iter()
        .all(|r| !r.pattern.contains("{sep}")));
}

#[test]
fn test_fingerprint_is_stable() {
    let config = CatalogConfig::load_default().unwrap();
    assert_eq!(CATALOG.fingerprint(), catalog_fingerprint(&config));

    let again = compile_catalog(&config).unwrap();
    assert_eq!(again.fingerprint(), CATALOG.fingerprint());
}

#[test]
fn test_custom_catalog_from_yaml() {
    let yaml = r#"
substitutions:
  - description: "Weapon"
    pattern: '\bwpn\b'
    replacement: "weapon"
    priority: 20
  - description: "Possession"
    pattern: '\bposs\b'
    replacement: "possession"
removals:
  - description: "Tag"
    pattern: '(OBSCIS)'
"#;
    let config = CatalogConfig::from_yaml_str(yaml).unwrap();
    let catalog = compile_catalog(&config).unwrap();
    let order: Vec<&str> = catalog.by_priority().map(|r| r.description.as_str()).collect();
    assert_eq!(order, vec!["Possession", "Weapon"]);
    assert_ne!(catalog.fingerprint(), CATALOG.fingerprint());
}

#[test]
fn test_invalid_catalog_is_rejected_whole() {
    let yaml = r#"
substitutions:
  - description: "broken"
    pattern: '(unclosed'
    replacement: "x"
  - description: "fine"
    pattern: 'ok'
    replacement: "x"
"#;
    let config = CatalogConfig::from_yaml_str(yaml).unwrap();
    let err = compile_catalog(&config).unwrap_err();
    assert!(err.to_string().contains("Failed to compile 1 rule(s)"));
}
