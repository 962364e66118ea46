use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use corner::{CornerError, diagnostics::ErrorCode};
use corner_cli::{Args, run};

/// Collects all .corner files from a directory
fn collect_corner_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("corner")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demos live at the workspace root, not in the crate
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args_for(input: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
        trace_tokens: false,
        deny_warnings: false,
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let valid_demos = collect_corner_files(demos_dir());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        if let Err(e) = run(&args_for(demo_path)) {
            failed_demos.push((demo_path.clone(), e));
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let error_demos = collect_corner_files(demos_dir().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        if run(&args_for(demo_path)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_error_demos_report_expected_codes() {
    let errors = demos_dir().join("errors");
    let cases = [
        ("syntax.corner", ErrorCode::E100),
        ("missing_identifier.corner", ErrorCode::E101),
        ("edge_source.corner", ErrorCode::E102),
        ("duplicate.corner", ErrorCode::E200),
        ("dangling.corner", ErrorCode::E201),
        ("empty.corner", ErrorCode::E202),
    ];

    for (file, code) in cases {
        let err = run(&args_for(&errors.join(file))).unwrap_err();
        let codes: Vec<_> = err.diagnostics().iter().map(|d| d.code()).collect();
        assert_eq!(codes, vec![Some(code)], "codes for {file}");
    }
}

#[test]
fn e2e_warnings_are_returned_and_can_be_denied() {
    let unused = demos_dir().join("unused.corner");

    let checked = run(&args_for(&unused)).expect("warnings do not fail by default");
    assert_eq!(checked.warnings.len(), 1);
    assert_eq!(checked.warnings[0].code(), Some(ErrorCode::E203));
    assert!(checked.source.contains("legacy"));

    let denied = Args {
        deny_warnings: true,
        ..args_for(&unused)
    };
    let err = run(&denied).unwrap_err();
    assert!(matches!(err, CornerError::Check { .. }));
    assert!(err.diagnostics()[0].severity().is_error());
}

#[test]
fn e2e_config_file_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[analysis]\nreport_unreachable = false\n").unwrap();

    let args = Args {
        config: Some(config_path.to_string_lossy().to_string()),
        ..args_for(&demos_dir().join("unused.corner"))
    };

    let checked = run(&args).unwrap();
    assert!(checked.warnings.is_empty());
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let err = run(&args_for(&temp_dir.path().join("absent.corner"))).unwrap_err();
    assert!(matches!(err, CornerError::Io(_)));
    assert!(err.diagnostics().is_empty());
}

#[test]
fn e2e_temp_input_is_checked() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input = temp_dir.path().join("inline.corner");
    fs::write(&input, "node a { calls b { } } node b { calls a { } }").unwrap();

    let checked = run(&args_for(&input)).unwrap();
    assert!(checked.warnings.is_empty());
}
