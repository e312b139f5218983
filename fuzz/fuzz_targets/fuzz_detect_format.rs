#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the format detection logic on any input that parses as JSON.
fuzz_target!(|data: &[u8]| {
    if let Ok(doc) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = sbom_compare::parsers::detect_format(&doc);
    }
});
