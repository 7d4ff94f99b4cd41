#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(package) = uci::Package::from_slice(data) else {
        return;
    };

    // Re-encoding is lossy at the edges (tabs inside quoted values are
    // normalized to spaces, section types are emitted bare), so only the
    // coarse shape is asserted here; exact round-tripping is covered by the
    // quickcheck suite over the representable subset.
    let text = package.to_string();
    if let Ok(reparsed) = uci::Package::from_slice(text.as_bytes()) {
        assert_eq!(package.name, reparsed.name);
        assert_eq!(package.sections.len(), reparsed.sections.len());
    }
});
