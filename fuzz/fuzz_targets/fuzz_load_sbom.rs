#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz SBOM loading with format detection.
///
/// Arbitrary bytes must yield a mapping or an error, never a panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = sbom_compare::parsers::load_sbom_str(s, None);
    }
});
