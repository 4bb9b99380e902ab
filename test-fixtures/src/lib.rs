//! Test fixture loader for Recall knowledge documents and golden query sets.
//!
//! Provides typed deserialization of fixture JSON files for tests across
//! crates.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Absolute path of a file under the fixture tree.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative_path)
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).is_file()
}

/// Read a fixture and deserialize it into `T`.
///
/// # Panics
/// On a missing file or a document that does not match `T`.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()));
    serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("fixture {} does not parse: {e}", path.display()))
}

/// A fixture as untyped JSON, the form knowledge documents are built from.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// One case of a golden evaluation set.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenCase {
    pub query: String,
    /// `"confident"`, `"hedge"`, `"reject"`, `"blocked"`, `"out_of_domain"`
    /// or `"empty"`.
    pub outcome: String,
    /// Expected answer prefix, when the outcome carries one.
    #[serde(default)]
    pub answer_starts_with: Option<String>,
}

/// A golden evaluation set: a knowledge fixture plus the cases run against it.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenSet {
    pub knowledge: String,
    pub cases: Vec<GoldenCase>,
}

/// Load a golden evaluation set.
pub fn load_golden(relative_path: &str) -> GoldenSet {
    load_fixture(relative_path)
}
