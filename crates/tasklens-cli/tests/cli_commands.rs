use std::path::PathBuf;
use std::process::Command;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_backup.xml")
}

fn tasklens() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tasklens"))
}

#[test]
fn report_plain_prints_to_stdout() {
    let output = tasklens()
        .args(["report", "--plain"])
        .arg(fixture_path())
        .output()
        .expect("run tasklens report");
    assert!(
        output.status.success(),
        "expected success.\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Project: Home\n"));
    assert!(stdout.contains("        Entry Task: Quiet\n"));
    assert!(!stdout.contains("<span"));
}

#[test]
fn report_writes_html_file() {
    let dir = std::env::temp_dir().join(format!("tasklens-report-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let out = dir.join("report.html");
    let output = tasklens()
        .arg("report")
        .arg(fixture_path())
        .arg("--output")
        .arg(&out)
        .output()
        .expect("run tasklens report");
    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let html = std::fs::read_to_string(&out).expect("read report");
    assert!(html.contains("<title>sample_backup.xml</title>"));
    assert!(html.contains("&nbsp;&nbsp;&nbsp;&nbsp;"));
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn report_rejects_non_backup_documents() {
    let dir = std::env::temp_dir().join(format!("tasklens-bad-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("page.xml");
    std::fs::write(&path, "<html/>").expect("write input");
    let output = tasklens()
        .arg("report")
        .arg(&path)
        .output()
        .expect("run tasklens report");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected <TaskerData>"), "stderr:\n{stderr}");
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn codes_json_lists_state_codes() {
    let output = tasklens()
        .args(["codes", "--kind", "state", "--json"])
        .output()
        .expect("run tasklens codes");
    assert!(output.status.success());
    let rows: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("codes output is JSON");
    let rows = rows.as_array().expect("JSON array");
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|row| row["kind"] == "state"));
    assert!(rows
        .iter()
        .any(|row| row["code"] == "120" && row["name"] == "Display State"));
}

#[test]
fn check_succeeds_on_builtin_data() {
    let output = tasklens()
        .arg("check")
        .output()
        .expect("run tasklens check");
    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("task: "));
    assert!(stdout.contains("OK"));
}

#[test]
fn check_reports_bad_config() {
    let dir = std::env::temp_dir().join(format!("tasklens-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("tasklens.toml");
    std::fs::write(&path, "[render]\ncontinuation_cap = 0\n").expect("write config");
    let output = tasklens()
        .arg("check")
        .arg("--config")
        .arg(&path)
        .output()
        .expect("run tasklens check");
    assert!(!output.status.success());
    let _ = std::fs::remove_dir_all(dir);
}
