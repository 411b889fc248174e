//! End-to-end tests of the mutation pipeline, driving the engine the way the
//! CLI does: build, iterate, collect.

use std::collections::HashMap;
use std::collections::HashSet;

use password_stretcher::core::caps::canonical_variants;
use password_stretcher::{MangleConfig, Mangler};

fn words(input: &[&str]) -> Vec<Vec<u8>> {
    input.iter().map(|w| w.as_bytes().to_vec()).collect()
}

fn stream(input: &[&str], config: MangleConfig) -> Vec<String> {
    Mangler::new(words(input), config)
        .unwrap()
        .into_iter()
        .map(|w| String::from_utf8(w).unwrap())
        .collect()
}

#[test]
fn plain_config_is_identity_in_length_order() {
    let out = stream(&["monkey", "ox", "goat"], MangleConfig::default());
    assert_eq!(out, vec!["ox", "goat", "monkey"]);
}

#[test]
fn doubling_follows_each_word() {
    let config = MangleConfig {
        double: true,
        ..Default::default()
    };
    let out = stream(&["pass"], config);
    assert_eq!(out, vec!["pass", "passpass"]);
}

#[test]
fn leet_emits_the_word_first_then_substitutions() {
    let config = MangleConfig {
        leet: true,
        ..Default::default()
    };
    let out = stream(&["pass"], config);
    assert_eq!(out[0], "pass");
    assert!(out.contains(&"p@ss".to_string()));
}

#[test]
fn leet_starved_to_one_variant_still_passes_the_word_through() {
    let config = MangleConfig {
        leet: true,
        target_size: Some(1),
        ..Default::default()
    };
    let out = stream(&["sss"], config);
    assert_eq!(out, vec!["sss"]);
}

#[test]
fn depth_two_permutations_cover_the_product_exactly_once() {
    let config = MangleConfig {
        perm_depth: 2,
        ..Default::default()
    };
    let out = stream(&["Cat", "Dog"], config);

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in &out {
        *counts.entry(word.as_str()).or_default() += 1;
    }
    for expected in ["CatCat", "CatDog", "DogCat", "DogDog"] {
        assert_eq!(counts.get(expected), Some(&1), "missing or repeated {expected}");
    }
}

#[test]
fn capswap_of_ab_is_exactly_the_four_case_forms() {
    let config = MangleConfig {
        capswap: true,
        ..Default::default()
    };
    let out = stream(&["ab"], config);
    let produced: HashSet<String> = out.iter().cloned().collect();
    let expected: HashSet<String> = ["ab", "Ab", "aB", "AB"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    assert_eq!(produced, expected);
    assert_eq!(out.len(), 4);
    assert_eq!(out[0], "ab");
}

#[test]
fn common_cap_output_is_bounded_and_length_preserving() {
    let config = MangleConfig {
        cap: true,
        ..Default::default()
    };
    let out = stream(&["PaSsWoRd"], config);
    assert!(out.len() <= 6);
    assert!(out.iter().all(|w| w.len() == "PaSsWoRd".len()));
    assert_eq!(out[0], "PaSsWoRd");
}

#[test]
fn case_canonicalization_is_stable_for_lowercased_words() {
    let once = canonical_variants(b"pass");
    // the head of the canonical set of a lowercased word is the word itself;
    // canonicalizing that head again changes nothing
    let twice = canonical_variants(&once[0]);
    let once_set: HashSet<_> = once.iter().cloned().collect();
    let twice_set: HashSet<_> = twice.iter().cloned().collect();
    assert_eq!(once_set, twice_set);
    assert!(once.len() <= 6);
}

#[test]
fn quota_carry_forward_makes_output_track_the_target() {
    // "zz" admits one substitution variant against a per-word quota of 4;
    // its spare 3 roll into "ssss", which has plenty to spend them on
    let config = MangleConfig {
        leet: true,
        target_size: Some(8),
        ..Default::default()
    };
    let mangler = Mangler::new(words(&["zz", "ssss"]), config).unwrap();
    assert_eq!(mangler.budget().max_leet, 4);

    let out: Vec<Vec<u8>> = mangler.into_iter().collect();
    assert_eq!(out.len(), 8, "unused quota must carry across words");
    assert_eq!(out[0], b"zz");
    assert_eq!(out[1], b"ssss");
}

#[test]
fn composed_axes_still_emit_every_base_word_first() {
    let config = MangleConfig {
        leet: true,
        capswap: true,
        double: true,
        target_size: Some(500),
        ..Default::default()
    };
    let out = stream(&["cat", "dog"], config);
    // base words survive mutation and arrive in vocabulary order
    let cat = out.iter().position(|w| w == "cat").unwrap();
    let dog = out.iter().position(|w| w == "dog").unwrap();
    assert!(cat < dog);
    assert!(out.contains(&"catcat".to_string()));
    assert!(out.len() <= 500 + 4, "output must stay near the target");
}

#[test]
fn empty_input_yields_an_exhausted_stream() {
    let config = MangleConfig {
        leet: true,
        cap: true,
        double: true,
        ..Default::default()
    };
    let mangler = Mangler::new(words(&[]), config).unwrap();
    assert_eq!(mangler.estimated_len(), 0);
    assert_eq!(mangler.into_iter().count(), 0);
}
