//! Shared test helpers for workspace crates.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read a fixture file as UTF-8 text.
pub fn fixture_text(name: &str) -> String {
	let path = fixture_path(name);
	std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("fixture {} unreadable: {err}", path.display()))
}

/// Read a fixture file as JSON.
pub fn fixture_json(name: &str) -> serde_json::Value {
	serde_json::from_str(&fixture_text(name)).unwrap_or_else(|err| panic!("fixture {name} is not json: {err}"))
}

/// Assert `haystack` holds `needle` at least once.
#[track_caller]
pub fn assert_contains<S: AsRef<str>>(haystack: &[S], needle: &str) {
	assert!(
		haystack.iter().any(|item| item.as_ref() == needle),
		"expected {:?} to contain {needle:?} but it didn't",
		haystack.iter().map(AsRef::as_ref).collect::<Vec<_>>()
	);
}

/// Assert both slices hold the same strings with the same multiplicity, in any order.
#[track_caller]
pub fn assert_same_multiset<S: AsRef<str>, T: AsRef<str>>(got: &[S], expected: &[T]) {
	assert_eq!(counts(got), counts(expected), "multisets differ");
}

fn counts<S: AsRef<str>>(items: &[S]) -> HashMap<&str, usize> {
	let mut out = HashMap::new();
	for item in items {
		*out.entry(item.as_ref()).or_insert(0) += 1;
	}
	out
}
