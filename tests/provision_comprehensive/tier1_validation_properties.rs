//! Tier 1: Input validation properties
//!
//! Properties of the parameter and secret resolution rules, checked through
//! the public `resolve_*` functions.

use proptest::prelude::*;
use svcat::{resolve_parameters, resolve_secrets, Error, ParameterPayload, ParseError};

proptest! {
    /// An entry without `=` always fails and names the entry.
    #[test]
    fn entry_without_equals_fails_naming_it(
        good in proptest::collection::vec("[a-z]{1,6}=[a-z0-9]{0,6}", 0..4),
        bad in "[a-zA-Z0-9_-]{1,12}",
    ) {
        let mut raw = good.clone();
        raw.push(bad.clone());
        let err = resolve_parameters(&raw, "").unwrap_err();
        match err {
            Error::InvalidParam { flag, source } => {
                prop_assert_eq!(flag, "--param");
                // Earlier good entries may collide on name; either way the error names an entry.
                match source {
                    ParseError::MissingSeparator { entry } => prop_assert_eq!(entry, bad),
                    ParseError::DuplicateName { .. } => {}
                    other => prop_assert!(false, "unexpected error: {:?}", other),
                }
            }
            other => prop_assert!(false, "unexpected error: {:?}", other),
        }
    }

    /// A successful parse keeps every entry.
    #[test]
    fn success_keeps_every_entry(names in proptest::collection::btree_set("[a-z][a-z0-9_]{0,10}", 0..16)) {
        let raw: Vec<String> = names.iter().map(|n| format!("{}=value", n)).collect();
        let payload = resolve_parameters(&raw, "").unwrap();
        let flat = payload.as_flat().unwrap();
        prop_assert_eq!(flat.len(), raw.len());
        let order: Vec<&str> = flat.names().collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(order, expected);
    }

    /// Both parameter sources together always fail with the exclusion error.
    #[test]
    fn both_sources_always_conflict(
        params in proptest::collection::vec(".{0,12}", 1..4),
        json in ".{1,24}",
    ) {
        let err = resolve_parameters(&params, &json).unwrap_err();
        prop_assert!(err.is_usage());
        prop_assert_eq!(err.to_string(), "--params-json cannot be used with --param");
    }

    /// Well-formed JSON round-trips to the same value.
    #[test]
    fn json_roundtrips(
        keys in proptest::collection::btree_map("[a-z]{1,8}", any::<i32>(), 0..6),
        flag in any::<bool>(),
    ) {
        let value = serde_json::json!({ "limits": keys, "encrypt": flag });
        let payload = resolve_parameters::<&str>(&[], &value.to_string()).unwrap();
        prop_assert_eq!(payload, ParameterPayload::Structured(value));
    }

    /// Well-formed `SECRET[KEY]` entries map secret to key.
    #[test]
    fn secret_refs_map_name_to_key(name in "[a-z][a-z0-9-]{0,10}", key in "[a-zA-Z0-9_.-]{1,10}") {
        let refs = resolve_secrets(&[format!("{}[{}]", name, key)]).unwrap();
        prop_assert_eq!(refs.len(), 1);
        prop_assert_eq!(refs.get(&name), Some(key.as_str()));
    }

    /// Entries missing a bracket or a part always fail.
    #[test]
    fn malformed_secret_refs_fail(
        name in "[a-z]{0,6}",
        key in "[a-z]{0,6}",
        shape in 0usize..4,
    ) {
        let raw = match shape {
            0 => format!("{}{}]", name, key),
            1 => format!("{}[{}", name, key),
            2 => format!("[{}]", key),
            _ => format!("{}[]", name),
        };
        let err = resolve_secrets(&[raw.clone()]).unwrap_err();
        prop_assert_eq!(err.parse_error().and_then(|e| e.entry()), Some(raw.as_str()));
    }
}

#[test]
fn empty_input_is_empty_flat_mapping() {
    let payload = resolve_parameters::<&str>(&[], "").unwrap();
    assert_eq!(payload, ParameterPayload::default());
    assert!(resolve_secrets::<&str>(&[]).unwrap().is_empty());
}
