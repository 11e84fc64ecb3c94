//! Property tests pinning the resolution invariants: determinism,
//! instance independence, and duplicate-key collapse.

use proptest::prelude::*;

use stagehand::{DesignNode, RecordCollection, RecordDescriptor, Value};

fn key() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn pairs() -> impl Strategy<Value = Vec<(String, i64)>> {
    proptest::collection::vec((key(), any::<i64>()), 0..16)
}

/// Last value per key, in first-seen key order. The reference model for
/// sequence-order writes into an insertion-ordered map.
fn collapsed(pairs: &[(String, i64)]) -> Vec<(String, i64)> {
    let mut result: Vec<(String, i64)> = Vec::new();
    for (key, value) in pairs {
        match result.iter_mut().find(|(existing, _)| existing == key) {
            Some(slot) => slot.1 = *value,
            None => result.push((key.clone(), *value)),
        }
    }
    result
}

proptest! {
    #[test]
    fn resolving_twice_yields_equal_content(pairs in pairs()) {
        let record = RecordDescriptor::from_pairs(pairs).unwrap();
        prop_assert_eq!(record.resolve(&()), record.resolve(&()));
    }

    #[test]
    fn resolutions_are_independent_instances(pairs in pairs()) {
        let record = RecordDescriptor::from_pairs(pairs).unwrap();
        let mut first = record.resolve(&());
        let second = record.resolve(&());

        first.insert("__mutated", Value::Null);
        prop_assert!(second.get("__mutated").is_none());
    }

    #[test]
    fn duplicate_keys_collapse_to_the_last_value(pairs in pairs()) {
        let record = RecordDescriptor::from_pairs(pairs.clone()).unwrap();
        let object = record.resolve(&());

        let expected = collapsed(&pairs);
        prop_assert_eq!(object.len(), expected.len());

        let actual: Vec<(String, i64)> = object
            .iter()
            .map(|(key, value)| match value {
                Value::Int(int) => (key.to_string(), *int),
                other => panic!("unexpected value shape: {other:?}"),
            })
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn collections_pass_scalars_through_in_order(items in proptest::collection::vec(any::<i64>(), 0..32)) {
        let collection: RecordCollection =
            items.iter().map(|item| DesignNode::from(*item)).collect();

        let resolved: Vec<Value> = collection.resolve(&()).collect();
        let expected: Vec<Value> = items.into_iter().map(Value::Int).collect();
        prop_assert_eq!(resolved, expected);
    }
}
