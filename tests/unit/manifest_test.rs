//! Tests for manifest loading and rewriting on disk

use serde_json::{Value, json};

use esmap::manifest::{Manifest, ManifestError};

use crate::common::TestProject;

#[test]
fn write_rewrites_the_loaded_file() {
    let project = TestProject::new();
    project.set_manifest("{\n  \"name\": \"fixture\",\n  \"main\": \"./src/index.js\"\n}\n");

    let mut manifest = Manifest::load(&project.manifest_path()).unwrap();
    manifest.set_browser(json!({ "./src/index.js": "./es/src/index.js" }));
    manifest.write().unwrap();

    let content = project.read_manifest();
    assert!(content.ends_with('\n'));

    let value: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["browser"]["./src/index.js"], "./es/src/index.js");
    assert_eq!(value["main"], "./src/index.js");
}

#[test]
fn dir_is_the_manifest_parent() {
    let project = TestProject::new();
    let manifest = Manifest::load(&project.manifest_path()).unwrap();
    assert_eq!(manifest.dir(), project.path());
    assert_eq!(manifest.path(), project.manifest_path());
}

#[test]
fn existing_browser_value_is_replaced_wholesale() {
    let project = TestProject::new();
    project.set_manifest(
        "{\n  \"name\": \"fixture\",\n  \"browser\": {\n    \"./stale.js\": \"./gone.js\"\n  }\n}\n",
    );

    let mut manifest = Manifest::load(&project.manifest_path()).unwrap();
    manifest.set_browser(json!({ "./fresh.js": "./es/fresh.js" }));

    let value: Value = serde_json::from_str(&manifest.render().unwrap()).unwrap();
    let browser = value["browser"].as_object().unwrap();
    assert!(!browser.contains_key("./stale.js"));
    assert_eq!(browser["./fresh.js"], "./es/fresh.js");
}

#[test]
fn parse_failure_names_the_file() {
    let project = TestProject::new();
    project.set_manifest("{ \"name\": }");

    let err = Manifest::load(&project.manifest_path()).unwrap_err();
    assert!(matches!(err, ManifestError::Parse { .. }));
    assert!(err.to_string().contains("cannot parse manifest"));
}
