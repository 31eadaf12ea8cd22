#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn docpeek_cmd() -> Command {
    let mut cmd = Command::cargo_bin("docpeek").unwrap();
    cmd.env_remove("DOCPEEK_CONFIG");
    cmd.env_remove("DOCPEEK_RUNTIME");
    cmd.env_remove("DOCPEEK_MAX_LINES");
    cmd.env_remove("DOCPEEK_FORMATTER");
    cmd.env_remove("RUST_LOG");
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/docpeek-test-config");
    cmd
}

/// Lay out `<root>/doc/tags` and the given documents
pub fn write_runtime(root: &Path, tags: &str, docs: &[(&str, &str)]) {
    let doc = root.join("doc");
    fs::create_dir_all(&doc).unwrap();
    fs::write(doc.join("tags"), tags).unwrap();
    for (name, text) in docs {
        fs::write(doc.join(name), text).unwrap();
    }
}
