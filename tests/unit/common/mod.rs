//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing esmap components.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway npm-style project with a manifest and a small source tree
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Create a project with a standard layout:
    /// ```text
    /// /
    /// ├── package.json
    /// └── src/
    ///     ├── index.js
    ///     ├── util.js
    ///     └── nested/
    ///         └── helper.js
    /// ```
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        fs::create_dir_all(dir.path().join("src/nested")).unwrap();
        fs::write(
            dir.path().join("package.json"),
            "{\n  \"name\": \"fixture\",\n  \"version\": \"1.0.0\"\n}\n",
        )
        .unwrap();
        fs::write(dir.path().join("src/index.js"), "module.exports = {};\n").unwrap();
        fs::write(dir.path().join("src/util.js"), "module.exports.u = 1;\n").unwrap();
        fs::write(dir.path().join("src/nested/helper.js"), "module.exports.h = 2;\n").unwrap();

        Self { dir }
    }

    /// Root path of the project
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path to the project's package.json
    pub fn manifest_path(&self) -> PathBuf {
        self.dir.path().join("package.json")
    }

    /// Overwrite package.json with `content`
    pub fn set_manifest(&self, content: &str) {
        fs::write(self.manifest_path(), content).unwrap();
    }

    /// Read the manifest back as a string
    pub fn read_manifest(&self) -> String {
        fs::read_to_string(self.manifest_path()).unwrap()
    }

    /// Add a file, creating parent directories as needed
    pub fn add_file(&self, path: &str, content: &str) {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Create the transpiled ES files for the standard source tree
    pub fn add_es_build(&self, folder: &str) {
        self.add_file(&format!("{folder}/src/index.js"), "export default {};\n");
        self.add_file(&format!("{folder}/src/util.js"), "export const u = 1;\n");
        self.add_file(&format!("{folder}/src/nested/helper.js"), "export const h = 2;\n");
    }

    /// Absolute path to a file inside the project
    pub fn file(&self, path: &str) -> PathBuf {
        self.dir.path().join(path)
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}
