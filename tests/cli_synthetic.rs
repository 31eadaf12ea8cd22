//! Fixture-driven CLI synthetic tests.
//!
//! Each case under `tests/fixtures/synthetic/<case>/` provides:
//! - `runtime/`      a vim runtime tree copied to a temp directory
//! - `scenario.toml` command list and command-level assertions
//!
//! Arguments equal to `{root}` are replaced by the copied runtime path.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
struct Scenario {
    #[serde(rename = "command")]
    commands: Vec<CommandSpec>,
}

#[derive(Debug, Deserialize)]
struct CommandSpec {
    args: Vec<String>,
    #[serde(default = "default_exit_code")]
    expect_exit: i32,
    #[serde(default)]
    stdout_equals: Option<String>,
    #[serde(default)]
    stdout_contains: Vec<String>,
    #[serde(default)]
    stdout_not_contains: Vec<String>,
    #[serde(default)]
    stderr_contains: Vec<String>,
}

fn default_exit_code() -> i32 {
    0
}

#[test]
fn test_synthetic_fixtures() {
    let root = Path::new("tests").join("fixtures").join("synthetic");
    assert!(
        root.exists(),
        "Synthetic fixture root missing: {}",
        root.display()
    );

    let mut case_dirs: Vec<PathBuf> = fs::read_dir(&root)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    case_dirs.sort();
    assert!(!case_dirs.is_empty(), "No synthetic test cases found");

    for case_dir in case_dirs {
        run_case(&case_dir);
    }
}

fn run_case(case_dir: &Path) {
    let case_name = case_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown-case>");

    let runtime_dir = case_dir.join("runtime");
    let scenario_path = case_dir.join("scenario.toml");

    assert!(
        scenario_path.exists(),
        "Case '{}' is missing scenario.toml: {}",
        case_name,
        scenario_path.display()
    );

    let scenario_content = fs::read_to_string(&scenario_path).unwrap_or_else(|e| {
        panic!(
            "Case '{}' failed to read scenario file {}: {}",
            case_name,
            scenario_path.display(),
            e
        )
    });
    let scenario: Scenario = toml::from_str(&scenario_content).unwrap_or_else(|e| {
        panic!(
            "Case '{}' has invalid scenario TOML in {}: {}",
            case_name,
            scenario_path.display(),
            e
        )
    });

    let temp = tempfile::TempDir::new().unwrap();
    if runtime_dir.exists() {
        copy_tree(&runtime_dir, temp.path());
    }

    for (idx, command) in scenario.commands.iter().enumerate() {
        let args: Vec<String> = command
            .args
            .iter()
            .map(|arg| {
                if arg == "{root}" {
                    temp.path().display().to_string()
                } else {
                    arg.clone()
                }
            })
            .collect();

        let output = run_docpeek(&args);
        let code = output.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        assert_eq!(
            code,
            command.expect_exit,
            "Case '{}', command #{} ({:?}) exit code mismatch.\nstdout:\n{}\nstderr:\n{}",
            case_name,
            idx + 1,
            command.args,
            stdout,
            stderr
        );

        if let Some(expected) = &command.stdout_equals {
            assert_eq!(
                &stdout,
                expected,
                "Case '{}', command #{} ({:?}) stdout mismatch",
                case_name,
                idx + 1,
                command.args
            );
        }

        for needle in &command.stdout_contains {
            assert!(
                stdout.contains(needle),
                "Case '{}', command #{} ({:?}) expected stdout to contain {:?}.\nstdout:\n{}",
                case_name,
                idx + 1,
                command.args,
                needle,
                stdout
            );
        }

        for needle in &command.stdout_not_contains {
            assert!(
                !stdout.contains(needle),
                "Case '{}', command #{} ({:?}) expected stdout to NOT contain {:?}.\nstdout:\n{}",
                case_name,
                idx + 1,
                command.args,
                needle,
                stdout
            );
        }

        for needle in &command.stderr_contains {
            assert!(
                stderr.contains(needle),
                "Case '{}', command #{} ({:?}) expected stderr to contain {:?}.\nstderr:\n{}",
                case_name,
                idx + 1,
                command.args,
                needle,
                stderr
            );
        }
    }
}

fn run_docpeek(args: &[String]) -> Output {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_docpeek"));
    cmd.env_remove("DOCPEEK_CONFIG")
        .env_remove("DOCPEEK_RUNTIME")
        .env_remove("DOCPEEK_MAX_LINES")
        .env_remove("DOCPEEK_FORMATTER")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", "/nonexistent/docpeek-test-config")
        .args(args);

    cmd.output().unwrap_or_else(|e| {
        panic!("Failed to execute docpeek with args {:?}: {}", args, e)
    })
}

fn copy_tree(from: &Path, to: &Path) {
    for entry in WalkDir::new(from).into_iter().filter_map(|e| e.ok()) {
        let src_path = entry.path();
        let rel_path = src_path.strip_prefix(from).unwrap();
        if rel_path.as_os_str().is_empty() {
            continue;
        }

        let dest_path = to.join(rel_path);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest_path).unwrap();
        } else if entry.file_type().is_file() {
            if let Some(parent) = dest_path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::copy(src_path, &dest_path).unwrap();
        }
    }
}
