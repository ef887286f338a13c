use std::path::PathBuf;

/// Reads a JSON fixture from `tests/testdata/fhir5-json/`.
pub fn load_fixture(name: &str) -> Vec<u8> {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/testdata/fhir5-json");
    path.push(name);
    std::fs::read(&path).unwrap_or_else(|e| panic!("could not read fixture {name}: {e}"))
}

/// Parses emitted bytes back into a JSON tree for structural comparison.
pub fn as_json(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes).expect("emitted document is valid JSON")
}
