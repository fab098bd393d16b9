use std::fs;
use std::process::Command;

const FULL_SCORE: &str = r#"{"result":"success","message":"All good","score":1.0}"#;

#[test]
fn render_keeps_stdout_free_of_log_lines() {
    let dir = tempfile::tempdir().unwrap();
    let response = dir.path().join("response.json");
    let log_file = dir.path().join("logs").join("feedback.log");
    fs::write(&response, FULL_SCORE).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_judge-feedback"))
        .current_dir(dir.path())
        .env("LOG_LEVEL", "info")
        .env("LOG_FILE", &log_file)
        .env_remove("MAX_OUTPUT_LEN")
        .args(["--env", "missing.env", "render", "--format", "html"])
        .arg(&response)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "<i aria-hidden=\"true\" class=\"fa fa-check\" style=\"color:green\"></i> All good\n"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("model answer unlocked"));
    assert!(fs::read_to_string(&log_file).unwrap().contains("model answer unlocked"));
}

#[test]
fn diff_prints_only_the_rendered_pair() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("expected.txt"), "abc").unwrap();
    fs::write(dir.path().join("actual.txt"), "abd").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_judge-feedback"))
        .current_dir(dir.path())
        .env("LOG_LEVEL", "debug")
        .env("LOG_FILE", dir.path().join("feedback.log"))
        .args([
            "--env",
            "missing.env",
            "diff",
            "--expected",
            "expected.txt",
            "--actual",
            "actual.txt",
            "--format",
            "text",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "--- actual\nab>>d<<\n--- expected\nab>>c<<\n"
    );
}
