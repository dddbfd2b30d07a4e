#![no_main]

use arbitrary::Arbitrary;
use jcmp::{Comparison, DiffEvent};
use libfuzzer_sys::fuzz_target;
use serde_json::{json, Value};

#[derive(Arbitrary, Debug)]
enum FuzzValue {
    Null,
    Bool(bool),
    Number(i64),
    Text(String),
    List(Vec<FuzzValue>),
    Map(Vec<(String, FuzzValue)>),
}

fn to_json(value: &FuzzValue) -> Value {
    match value {
        FuzzValue::Null => Value::Null,
        FuzzValue::Bool(b) => json!(b),
        FuzzValue::Number(n) => json!(n),
        FuzzValue::Text(s) => json!(s),
        FuzzValue::List(items) => Value::Array(items.iter().map(to_json).collect()),
        FuzzValue::Map(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), to_json(value)))
                .collect(),
        ),
    }
}

fuzz_target!(|pair: (FuzzValue, FuzzValue)| {
    let old = to_json(&pair.0);
    let new = to_json(&pair.1);

    // The walk should never panic, and each distinct path must be
    // classified at most once per run.
    let events = Comparison::new(&old, &new).run("");

    let mut classified = std::collections::HashSet::new();
    for event in &events {
        if matches!(event, DiffEvent::Exists { .. }) {
            continue;
        }
        assert!(
            classified.insert(event.path().to_string()),
            "path {:?} classified more than once",
            event.path()
        );
    }
});
