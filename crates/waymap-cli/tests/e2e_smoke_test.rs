use std::{fs, path::PathBuf};

use tempfile::tempdir;

use waymap_cli::{Args, run};

/// Collects all .xml files from a directory
fn collect_xml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("xml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

#[test]
fn e2e_smoke_test_valid_fixtures() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_fixtures = collect_xml_files(fixtures_dir());
    assert!(
        !valid_fixtures.is_empty(),
        "No valid fixtures found in tests/fixtures/"
    );

    let mut failed_fixtures = Vec::new();

    for fixture_path in &valid_fixtures {
        let output_filename = format!(
            "{}.json",
            fixture_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        let args = Args {
            input: fixture_path.to_string_lossy().to_string(),
            output: output_path.to_string_lossy().to_string(),
            config: None,
            log_level: "off".to_string(),
        };

        if let Err(e) = run(&args) {
            failed_fixtures.push((fixture_path.clone(), e));
            continue;
        }

        let json = fs::read_to_string(&output_path).expect("output file should exist");
        assert!(
            json.contains("traffic_lights"),
            "output of {} should contain record collections",
            fixture_path.display()
        );
    }

    if !failed_fixtures.is_empty() {
        eprintln!("\nValid fixtures that failed:");
        for (path, err) in &failed_fixtures {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!(
            "{} valid fixture(s) failed unexpectedly",
            failed_fixtures.len()
        );
    }
}

#[test]
fn e2e_smoke_test_error_fixtures() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_fixtures = collect_xml_files(fixtures_dir().join("errors"));
    assert!(
        !error_fixtures.is_empty(),
        "No error fixtures found in tests/fixtures/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for fixture_path in &error_fixtures {
        let output_filename = format!(
            "error_{}.json",
            fixture_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        let args = Args {
            input: fixture_path.to_string_lossy().to_string(),
            output: output_path.to_string_lossy().to_string(),
            config: None,
            log_level: "off".to_string(),
        };

        if run(&args).is_ok() {
            unexpectedly_succeeded.push(fixture_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError fixtures that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error fixture(s) parsed successfully",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_decoded_records_appear_in_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("intersection.json");

    let args = Args {
        input: fixtures_dir()
            .join("intersection.xml")
            .to_string_lossy()
            .to_string(),
        output: output_path.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    };

    run(&args).expect("intersection fixture should decode");

    let json = fs::read_to_string(&output_path).unwrap();
    assert!(json.contains("tl_main_north"));
    assert!(json.contains("stop_oak_east"));
    assert!(json.contains("yield_oak_ramp"));
    // The crosswalk signal is out of scope and must not produce a record.
    assert!(!json.contains("cw_main_1"));
}
