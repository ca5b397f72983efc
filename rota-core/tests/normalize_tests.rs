// rota-core/tests/normalize_tests.rs
use once_cell::sync::Lazy;
use test_log::test;

use rota_core::{BatchNormalizer, OffenseNormalizer, RuleEngine, Stage};

static ENGINE: Lazy<RuleEngine> = Lazy::new(|| RuleEngine::builtin().expect("built-in catalog compiles"));

fn norm(text: &str) -> String {
    ENGINE.normalize(Some(text))
}

#[test]
fn test_reference_descriptions() {
    let cases = [
        (
            "POSS W INT DIST CDS SCH II",
            "possession with intent distribute controlled dangerous substances schedule two",
        ),
        (
            "BURGLARY - OVERNIGHT ACCOMMODATION, PERSON PRESENT",
            "burglary overnight accommodation person present",
        ),
        (
            "FRAUDULENT USE OF A CREDIT CARD OR DEBT CARD >= $25,000",
            "fraudulent use of a credit card or debt card greater than $25000",
        ),
        ("AGG ASSLT W/DEADLY WPN", "aggravated assault with deadly weapon"),
        ("POSS MARIJ < 20 GR", "possession marijuana less than 20 grams"),
        ("THEFT > $500", "theft greater than $500"),
        ("DUI 2ND OFF", "driving under the influence second offense"),
        ("POSS W/INT TO DIST", "possession with intent to distribute"),
        ("ASSAULT 1ST DEG", "assault first degree"),
    ];
    for (raw, expected) in cases {
        assert_eq!(norm(raw), expected, "input: {:?}", raw);
    }
}

#[test]
fn test_abbreviations() {
    let cases = [
        ("DUI", "driving under the influence"),
        ("DWLS", "driving while license suspended"),
        ("MIP", "minor in possession"),
        ("VP", "vice president"),
        ("A&B", "assault and battery"),
        ("A&B C", "assault and battery c"),
        ("A B C", "assault and battery c"),
        ("CONT SUB", "controlled substance"),
        ("C/S", "controlled substance"),
        ("3RD DEG", "third degree"),
        ("sch ii", "schedule two"),
        ("schedule 1", "schedule one"),
        ("sex off reg", "sexual offense reg"),
        ("ROBBERY/ARMED", "robbery armed"),
        ("TRAF COC 28G-200G", "traffick crack or cocaine 28g 200g"),
    ];
    for (raw, expected) in cases {
        assert_eq!(norm(raw), expected, "input: {:?}", raw);
    }
}

#[test]
fn test_lookaround_context() {
    assert_eq!(norm("ILL POSSESSION"), "illegal possession");
    assert_eq!(norm("mentally ill"), "mentally ill");
    assert_eq!(norm("MENTALLY ILL"), "mentally ill");
    assert_eq!(norm("at risk"), "at risk");
    assert_eq!(norm("by offense"), "by offense");
    assert_eq!(norm("lt5 grams"), "lt5 grams");
}

#[test]
fn test_priority_ordering_pairs() {
    // "With Intent" runs before the composite "possession with intent".
    assert_eq!(norm("P W INT DIST"), "possession with intent distribute");
    assert_eq!(norm("P W/INT"), "possession with intent");
    // "criminal assistance" runs before "assistance first degree".
    assert_eq!(norm("CRIM ASSIST 1"), "criminal assistance first degree");
    assert_eq!(norm("assistance 1"), "assistance first degree");

    let trace = ENGINE.trace("P W INT");
    assert!(trace.fired("With Intent"));
    let with_intent = trace.hits.iter().position(|h| h.description == "With Intent");
    let composite = trace.hits.iter().position(|h| h.description == "possession with intent");
    assert!(with_intent.is_some() && composite.is_some());
    assert!(with_intent < composite);
}

#[test]
fn test_literal_separator_rules_match_only_literal_text() {
    assert_eq!(norm("w{sep}o"), "without");
    assert_eq!(norm("w/o consent"), "w o consent");
    assert_eq!(norm("vehicle w/o owner consent"), "vehicle witho owner consent");
    assert_eq!(norm("dist peace"), "dist peace");
}

#[test]
fn test_preprocessing_edge_cases() {
    assert_eq!(norm("1,2,3"), "12 3");
    assert_eq!(norm("JOHN'S CAR"), "john s car");
    assert_eq!(norm("john's car"), "johns car");
    assert_eq!(norm("12-34"), "12 34");
    assert_eq!(norm("Rock'n'roll"), "rock n roll");
    assert_eq!(norm("FRAUD 18.2-178 OBTAIN MONEY"), "fraud 18 2 178 obtain money");
}

#[test]
fn test_removals() {
    assert_eq!(norm("OBSCIS"), "");
    assert_eq!(norm("THEFT OBSCIS"), "theft");
    assert!(ENGINE.trace("THEFT OBSCIS").hits_in(Stage::Removal).any(|h| h.description == "OBSCIS"));
}

#[test]
fn test_degenerate_inputs() {
    assert_eq!(ENGINE.normalize(None), "");
    assert_eq!(norm(""), "");
    assert_eq!(norm("   "), "");
    assert_eq!(norm("!!!"), "");
    assert_eq!(norm("12345"), "12345");
}

/// Deterministic xorshift64 generator for input strings.
struct InputGenerator(u64);

impl InputGenerator {
    const CHARS: &'static [u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~\t\n\x1c\x1d\x1e\x1f";
    const TOKENS: [&'static str; 25] = [
        "POSS", "W", "INT", "DIST", "CDS", "SCH", "II", "DUI", "A&B", "OBSCIS", "1ST", "DEG", "$500", ">", "<",
        "18.2.95", "'s", "W/O", "C/S", "MENTALLY", "ILL", "25,000", "AGG", "ASSLT", "WPN",
    ];

    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }

    /// Mixes catalog abbreviations with arbitrary ASCII characters.
    fn description(&mut self) -> String {
        let mut out = String::new();
        for _ in 0..self.below(24) {
            if self.below(3) == 0 {
                out.push_str(Self::TOKENS[self.below(Self::TOKENS.len())]);
            } else {
                out.push(Self::CHARS[self.below(Self::CHARS.len())] as char);
            }
            if self.below(2) == 0 {
                out.push(' ');
            }
        }
        out
    }
}

fn assert_canonical_shape(raw: &str, out: &str) {
    assert!(
        out.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ' || c == '$'),
        "unexpected character in {:?} (input {:?})",
        out,
        raw
    );
    assert!(!out.starts_with(' ') && !out.ends_with(' '), "untrimmed {:?}", out);
    assert!(!out.contains("  "), "double space in {:?}", out);
}

#[test]
fn test_output_shape() {
    let mut generator = InputGenerator(0x9E37_79B9_7F4A_7C15);
    for _ in 0..3000 {
        let raw = generator.description();
        assert_canonical_shape(&raw, &norm(&raw));
    }
}

#[test]
fn test_control_separators_are_whitespace() {
    assert_eq!(norm("x\u{1c}y"), "x y");
    assert_eq!(norm("DUI\u{1f}2ND\u{1e}OFF"), "driving under the influence second offense");
}

#[test]
fn test_case_insensitive_input() {
    // Possessive collapsing is the one case-sensitive step, so these avoid "'s".
    let inputs = [
        "poss w int dist cds sch ii",
        "Agg Asslt W/Deadly Wpn",
        "burglary - overnight accommodation, person present",
        "dui 2nd off",
        "Sex Off Reg",
        "cont sub",
        "theft > $500",
    ];
    for raw in inputs {
        let expected = norm(raw);
        assert_eq!(norm(&raw.to_uppercase()), expected, "upper of {:?}", raw);
        assert_eq!(norm(&raw.to_lowercase()), expected, "lower of {:?}", raw);
    }
}

#[test]
fn test_deterministic_and_thread_safe() {
    let expected = norm("POSS W INT DIST CDS SCH II");
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = ENGINE.clone();
            std::thread::spawn(move || engine.normalize(Some("POSS W INT DIST CDS SCH II")))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_trace_matches_normalize() {
    for raw in ["DUI 2ND OFF", "THEFT OBSCIS", "1,2,3", "mentally ill", ""] {
        let trace = ENGINE.trace(raw);
        assert_eq!(trace.canonical, norm(raw));
        assert_eq!(trace.input, raw);
    }
}

#[test]
fn test_batch_agrees_with_single_calls() {
    let rows = vec![Some("DUI"), None, Some("MIP"), Some("DUI"), Some("THEFT > $500")];
    let mut batch = BatchNormalizer::new(&*ENGINE);
    let out = batch.normalize_batch(rows.clone());
    let single: Vec<String> = rows.into_iter().map(|r| ENGINE.normalize(r)).collect();
    assert_eq!(out, single);
    assert_eq!(batch.stats().cache_hits, 1);
}

#[test]
fn test_drift_is_reported_not_fixed() {
    // The catalog is not idempotent; record which inputs drift without
    // asserting their absence.
    let inputs = ["POSS W INT DIST CDS SCH II", "DUI 2ND OFF", "A B C", "MIP"];
    for raw in inputs {
        match ENGINE.drift(raw) {
            Some(drift) => {
                log::info!("drift: {:?} -> {:?} -> {:?}", drift.input, drift.first_pass, drift.second_pass);
                assert_ne!(drift.first_pass, drift.second_pass);
                assert_eq!(drift.first_pass, norm(raw));
            }
            None => assert_eq!(norm(&norm(raw)), norm(raw)),
        }
    }
}

#[test]
fn test_drift_over_full_catalog() {
    // Every rule's description and replacement goes through two passes.
    // Drift is a catalog-quality finding: it is logged, not failed on.
    let mut checked = 0;
    let mut drifted = Vec::new();
    for rule in ENGINE.catalog().substitutions() {
        for raw in [rule.description.to_uppercase(), rule.replacement_source.clone()] {
            checked += 1;
            if let Some(drift) = ENGINE.drift(&raw) {
                log::warn!(
                    "rule #{} '{}': {:?} -> {:?} -> {:?}",
                    rule.index, rule.description, drift.input, drift.first_pass, drift.second_pass
                );
                assert_eq!(drift.first_pass, norm(&raw));
                drifted.push(drift);
            }
        }
    }
    assert_eq!(checked, 2 * ENGINE.catalog().substitutions().len());
    log::info!("drift {} of {}", drifted.len(), checked);
}
