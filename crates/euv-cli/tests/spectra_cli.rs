use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

fn fixture_coeffs() -> PathBuf {
    workspace_root().join("crates/euv-core/tests/fixtures/coefficients")
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_euv-rs"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("euv-rs should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn assert_close(actual: &Value, expected: f64) {
    let actual = actual.as_f64().expect("value should be a number");
    assert!(
        (actual - expected).abs() <= 1.0e-12,
        "{} != {}",
        actual,
        expected
    );
}

#[test]
fn spectra_command_writes_json_for_both_domains() {
    let temp = TempDir::new().expect("tempdir should be created");
    let coeffs = temp.path().join("coefficients");
    fs::create_dir_all(&coeffs).expect("coefficient dir should be created");
    for entry in fs::read_dir(fixture_coeffs()).expect("fixtures should be listed") {
        let entry = entry.expect("fixture entry should be readable");
        fs::copy(entry.path(), coeffs.join(entry.file_name())).expect("fixture should copy");
    }
    let report_path = temp.path().join("out/spectra.json");

    let output = run_cli(&[
        "spectra",
        "--model",
        "serf2",
        "--f107",
        "150,70",
        "--lya",
        "4e11,3.5e11",
        "--coeffs",
        coeffs.to_str().unwrap(),
        "--format",
        "json",
        "--output",
        report_path.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());

    let report: Value = serde_json::from_str(
        &fs::read_to_string(&report_path).expect("report should be written"),
    )
    .expect("report should be valid json");
    let spectra = report.as_array().expect("report should be an array");
    assert_eq!(spectra.len(), 2);

    assert_eq!(spectra[0]["model"], "serf2");
    assert_eq!(spectra[0]["domain"], "bands");
    assert_eq!(spectra[0]["sampleCount"], 2);
    assert_eq!(spectra[0]["bins"][2], "150-200A");
    assert_close(&spectra[0]["irradiance"][0][0], 0.06964368987899676);
    assert_close(&spectra[0]["irradiance"][2][1], 0.013143980402576357);

    assert_eq!(spectra[1]["domain"], "lines");
    assert_eq!(spectra[1]["bins"][0], "He II 303.78A");
    assert_close(&spectra[1]["irradiance"][0][1], 0.015653049311593607);
}

#[test]
fn bands_command_renders_text_for_a_scalar_proxy() {
    let coeffs = fixture_coeffs();
    let output = run_cli(&[
        "bands",
        "--f107",
        "150",
        "--lya",
        "4e11",
        "--coeffs",
        coeffs.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "# model=serf2 domain=bands bins=3 samples=1");
    assert!(lines[1].contains("sample0"));
    assert!(lines[2].trim_start().starts_with("50-100A"));
    assert_eq!(lines.len(), 5);
}

#[test]
fn proxy_file_input_is_accepted() {
    let temp = TempDir::new().expect("tempdir should be created");
    let input_path = temp.path().join("proxies.json");
    fs::write(&input_path, r#"{"f107": [150, 70], "lya": [4e11, 3.5e11]}"#)
        .expect("input should be written");
    let coeffs = fixture_coeffs();

    let output = run_cli(&[
        "lines",
        "--input",
        input_path.to_str().unwrap(),
        "--coeffs",
        coeffs.to_str().unwrap(),
        "--format",
        "json",
    ]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let report: Value = serde_json::from_str(&stdout(&output)).expect("stdout should be json");
    assert_eq!(report[0]["domain"], "lines");
    assert_eq!(report[0]["sampleCount"], 2);
    assert_close(&report[0]["irradiance"][0][0], 0.01970662778467841);
}

#[test]
fn mismatched_proxy_lengths_exit_with_input_validation_code() {
    let coeffs = fixture_coeffs();
    let output = run_cli(&[
        "spectra",
        "--f107",
        "1,2,3",
        "--lya",
        "1,2",
        "--coeffs",
        coeffs.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(2));
    let diagnostics = stderr(&output);
    assert!(diagnostics.contains("ERROR: [INPUT.PROXY_LENGTH]"));
    assert!(diagnostics.contains("f107 contained 3 elements, lya contained 2 elements"));
    assert!(diagnostics.contains("FATAL EXIT CODE: 2"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn non_numeric_proxy_file_is_an_input_type_error() {
    let temp = TempDir::new().expect("tempdir should be created");
    let input_path = temp.path().join("proxies.json");
    fs::write(&input_path, r#"{"f107": "high", "lya": 4e11}"#).expect("input should be written");
    let coeffs = fixture_coeffs();

    let output = run_cli(&[
        "bands",
        "--input",
        input_path.to_str().unwrap(),
        "--coeffs",
        coeffs.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("[INPUT.PROXY_TYPE]"));
}

#[test]
fn non_finite_proxies_exit_with_input_validation_code() {
    let coeffs = fixture_coeffs();
    for (f107, lya) in [("NaN", "4e11"), ("150", "inf"), ("150,-inf", "4e11,3.5e11")] {
        let output = run_cli(&[
            "bands",
            "--f107",
            f107,
            "--lya",
            lya,
            "--coeffs",
            coeffs.to_str().unwrap(),
            "--format",
            "json",
        ]);

        assert_eq!(output.status.code(), Some(2), "f107={f107} lya={lya}");
        assert!(stderr(&output).contains("[INPUT.PROXY_TYPE]"));
        assert!(stderr(&output).contains("must be finite"));
        assert!(stdout(&output).is_empty());
    }
}

#[test]
fn non_numeric_flag_values_match_proxy_file_errors() {
    let coeffs = fixture_coeffs();
    let output = run_cli(&[
        "bands",
        "--f107",
        "abc",
        "--lya",
        "4e11",
        "--coeffs",
        coeffs.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(2));
    let diagnostics = stderr(&output);
    assert!(diagnostics.contains("[INPUT.PROXY_TYPE]"));
    assert!(diagnostics.contains("f107 was the string 'abc'"));
}

#[test]
fn legacy_model_spectra_are_reported_as_not_implemented() {
    let coeffs = fixture_coeffs();
    let output = run_cli(&[
        "bands",
        "--model",
        "euv91",
        "--f107",
        "150",
        "--lya",
        "4e11",
        "--coeffs",
        coeffs.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("[RUN.NOT_IMPLEMENTED]"));
    assert!(stderr(&output).contains("euv91"));
}

#[test]
fn missing_coefficient_directory_exits_with_io_code() {
    let temp = TempDir::new().expect("tempdir should be created");
    let missing = temp.path().join("absent");
    let output = run_cli(&[
        "bands",
        "--f107",
        "150",
        "--lya",
        "4e11",
        "--coeffs",
        missing.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("[IO.COEFFICIENT_TABLE]"));
}

#[test]
fn config_file_supplies_the_coefficient_directory() {
    let temp = TempDir::new().expect("tempdir should be created");
    let config_path = temp.path().join("engine.json");
    fs::write(
        &config_path,
        serde_json::json!({ "coefficientDir": fixture_coeffs() }).to_string(),
    )
    .expect("config should be written");

    let output = run_cli(&["tables", "--config", config_path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("euv91/bands"));
    assert!(lines[0].contains("3 bins"));
    assert!(lines[3].starts_with("serf2/lines"));
    assert!(lines[3].contains("2 bins"));
}

#[test]
fn missing_proxies_are_a_usage_error() {
    let output = run_cli(&["bands", "--coeffs", "unused"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("[INPUT.CLI_USAGE]"));
}

#[test]
fn unknown_model_is_a_usage_error() {
    let output = run_cli(&["spectra", "--model", "nrlssi", "--f107", "1", "--lya", "1"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("unknown model 'nrlssi'"));
}

#[test]
fn help_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("spectra"));
}
