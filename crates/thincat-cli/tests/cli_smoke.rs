use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "thincat-cli-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_thincat<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_thincat");
    Command::new(bin)
        .args(args)
        .env_remove("THINCAT_LOG")
        .output()
        .expect("thincat command should execute")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "command failed with status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn parse_json_stdout(output: &Output) -> Value {
    serde_json::from_slice::<Value>(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "expected valid JSON stdout, got error: {e}\nstdout:\n{}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

/// Writes the chain `a -> b -> c` (TOML) and the arrow `x -> y` (JSON).
fn write_fixtures(dir: &Path) -> (PathBuf, PathBuf) {
    let chain = dir.join("chain.toml");
    fs::write(
        &chain,
        r#"name = "chain"
objects = ["a", "b", "c"]
generators = [["a", "b"], ["b", "c"]]
"#,
    )
    .expect("chain fixture should be written");

    let arrow = dir.join("arrow.json");
    fs::write(
        &arrow,
        r#"{"name": "arrow", "objects": ["x", "y"], "relation": {"x": ["x", "y"], "y": ["y"]}, "verify": true}"#,
    )
    .expect("arrow fixture should be written");

    (chain, arrow)
}

#[test]
fn closure_json_reports_closed_relation() {
    let tmp = TempDirGuard::new("closure");
    let (chain, _) = write_fixtures(tmp.path());

    let output = run_thincat([
        OsStr::new("closure"),
        chain.as_os_str(),
        OsStr::new("--verify"),
        OsStr::new("--json"),
    ]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    assert_eq!(payload["category"], "chain");
    assert_eq!(payload["arrowCount"], 6);
    assert_eq!(payload["relation"]["a"], serde_json::json!(["a", "b", "c"]));
    assert_eq!(payload["relation"]["c"], serde_json::json!(["c"]));
    assert_eq!(payload["verified"], true);
}

#[test]
fn closure_text_lists_reachable_sets() {
    let tmp = TempDirGuard::new("closure-text");
    let (chain, _) = write_fixtures(tmp.path());

    let output = run_thincat([OsStr::new("closure"), chain.as_os_str()]);
    assert_success(&output);
    let text = stdout_text(&output);
    assert!(text.contains("  a -> a, b, c"), "stdout:\n{text}");
    assert!(text.contains("  b -> b, c"), "stdout:\n{text}");
}

#[test]
fn arrow_answers_both_directions() {
    let tmp = TempDirGuard::new("arrow");
    let (chain, _) = write_fixtures(tmp.path());

    let forward = run_thincat([
        OsStr::new("arrow"),
        chain.as_os_str(),
        OsStr::new("a"),
        OsStr::new("c"),
        OsStr::new("--json"),
    ]);
    assert_success(&forward);
    assert_eq!(parse_json_stdout(&forward)["arrow"], true);

    let backward = run_thincat([
        OsStr::new("arrow"),
        chain.as_os_str(),
        OsStr::new("c"),
        OsStr::new("a"),
    ]);
    assert_success(&backward);
    assert!(stdout_text(&backward).contains("c -> a: no"));
}

#[test]
fn arrow_with_unknown_object_fails() {
    let tmp = TempDirGuard::new("arrow-unknown");
    let (chain, _) = write_fixtures(tmp.path());

    let output = run_thincat([
        OsStr::new("arrow"),
        chain.as_os_str(),
        OsStr::new("a"),
        OsStr::new("z"),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).contains("unknown object `z`"));
}

#[test]
fn functors_json_lists_monotone_maps() {
    let tmp = TempDirGuard::new("functors");
    let (chain, arrow) = write_fixtures(tmp.path());

    let output = run_thincat([
        OsStr::new("functors"),
        chain.as_os_str(),
        arrow.as_os_str(),
        OsStr::new("--json"),
    ]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    assert_eq!(payload["source"], "chain");
    assert_eq!(payload["target"], "arrow");
    assert_eq!(payload["count"], 4);
    assert_eq!(
        payload["functors"][2],
        serde_json::json!({"a": "x", "b": "y", "c": "y"})
    );
}

#[test]
fn functors_count_only() {
    let tmp = TempDirGuard::new("functors-count");
    let (chain, arrow) = write_fixtures(tmp.path());

    let output = run_thincat([
        OsStr::new("functors"),
        chain.as_os_str(),
        arrow.as_os_str(),
        OsStr::new("--count"),
    ]);
    assert_success(&output);
    assert!(stdout_text(&output).contains("chain -> arrow: 4"));
}

#[test]
fn transform_reports_obstructions() {
    let tmp = TempDirGuard::new("transform");
    let (chain, arrow) = write_fixtures(tmp.path());

    let output = run_thincat([
        OsStr::new("transform"),
        chain.as_os_str(),
        arrow.as_os_str(),
        OsStr::new("--json"),
    ]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    let rows = payload["transformations"]
        .as_array()
        .expect("transformations should be an array");
    assert_eq!(rows.len(), 12);

    // F0 = constant x, F2 = a->x, b->y, c->y
    let forward = rows
        .iter()
        .find(|row| row["from"] == "F0" && row["to"] == "F2")
        .expect("F0 => F2 row");
    assert_eq!(forward["exists"], true);

    let backward = rows
        .iter()
        .find(|row| row["from"] == "F2" && row["to"] == "F0")
        .expect("F2 => F0 row");
    assert_eq!(backward["exists"], false);
    assert_eq!(backward["obstruction"], "b");
}

#[test]
fn malformed_document_fails_with_exit_one() {
    let tmp = TempDirGuard::new("malformed");
    let bad = tmp.path().join("bad.json");
    fs::write(&bad, r#"{"objects": ["a"], "generators": [["a", "q"]]}"#)
        .expect("bad fixture should be written");

    let output = run_thincat([OsStr::new("closure"), bad.as_os_str()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).contains("undeclared object `q`"));
}
