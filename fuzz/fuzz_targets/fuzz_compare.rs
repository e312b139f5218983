#![no_main]
use libfuzzer_sys::fuzz_target;
use sbom_compare::{Comparator, PackageLoader, SbomFormat};

/// Fuzz loading both profiles from the same document and comparing them.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let spdx = PackageLoader::for_format(SbomFormat::Spdx).load_str(s);
    let cdx = PackageLoader::for_format(SbomFormat::CycloneDx).load_str(s);
    if let (Ok(left), Ok(right)) = (spdx, cdx) {
        let table = Comparator::new().compare(&left, &right);
        assert!(table.len() <= left.len() + right.len());
    }
});
