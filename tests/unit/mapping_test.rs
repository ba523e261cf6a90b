//! Tests for mapping derivation against a real project tree
//!
//! Pure path arithmetic is covered where it lives; these tests exercise the
//! advisory target probe, which needs files on disk.

use std::io::ErrorKind;

use esmap::fileset::FileSet;
use esmap::mapping::PathMapping;

use crate::common::TestProject;

#[test]
fn probe_passes_when_every_target_exists() {
    let project = TestProject::new();
    project.add_es_build("dist-es");

    let files = FileSet::build(&[project.file("src/**/*.js")], &[]).unwrap();
    let mapping = PathMapping::build(
        &files,
        project.path(),
        &project.file("dist-es"),
        project.path(),
    )
    .unwrap();

    assert!(mapping.probe_targets().is_empty());
}

#[test]
fn probe_reports_missing_targets_without_failing() {
    let project = TestProject::new();
    // Only index.js has a transpiled counterpart.
    project.add_file("dist-es/src/index.js", "export default {};\n");

    let files = FileSet::build(&[project.file("src/*.js")], &[]).unwrap();
    let mapping = PathMapping::build(
        &files,
        project.path(),
        &project.file("dist-es"),
        project.path(),
    )
    .unwrap();

    let failures = mapping.probe_targets();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].target, "./dist-es/src/util.js");
    assert_eq!(failures[0].path, project.file("dist-es/src/util.js"));
    assert_eq!(failures[0].error.kind(), ErrorKind::NotFound);
}

#[test]
fn probe_resolves_targets_against_the_manifest_dir() {
    let project = TestProject::new();
    project.add_file("pkg/package.json", "{}\n");
    project.add_file("pkg/dist-es/src/index.js", "export default {};\n");

    let files = FileSet::build(&[project.file("src/index.js")], &[]).unwrap();
    let mapping = PathMapping::build(
        &files,
        &project.file("pkg"),
        &project.file("dist-es"),
        project.path(),
    )
    .unwrap();

    // The target specifier is manifest-relative, so the probe must be too.
    assert_eq!(mapping.entries()[0].source, "./../src/index.js");
    assert_eq!(mapping.entries()[0].target, "./dist-es/src/index.js");
    assert!(mapping.probe_targets().is_empty());
}
