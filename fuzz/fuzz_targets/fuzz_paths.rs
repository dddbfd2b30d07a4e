#![no_main]

use jcmp::path;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|keys: Vec<String>| {
    // Backslashes in keys are a documented limitation of the escaping rule
    // (only '.' is escaped), and the empty key is indistinguishable from
    // the root. Skip those inputs; everything else must round-trip.
    if keys.iter().any(|k| k.is_empty() || k.contains('\\')) {
        return;
    }

    let mut canonical = String::new();
    for key in &keys {
        canonical = path::encode_child(&canonical, key);
    }

    // Prettifying must never panic, whatever the path looks like
    let _ = path::display_form(&canonical);

    let segments = path::split(&canonical);
    assert_eq!(segments, keys, "canonical form {:?} did not round-trip", canonical);
});
