use std::io::Write;
use std::process::{Command, Output, Stdio};

fn edge_event(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_edge-event"))
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

#[test]
fn prints_the_handled_request() {
    let output = edge_event(r#"{"Records":[{"cf":{"request":{"uri":"/test/"}}}]}"#);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(r#""uri": "/index.html""#), "stdout: {}", stdout);
}

#[test]
fn invalid_json_fails() {
    let output = edge_event("{");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid event JSON"), "stderr: {}", stderr);
}

#[test]
fn event_without_records_fails() {
    let output = edge_event(r#"{"Records":[]}"#);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("event has no records"), "stderr: {}", stderr);
}
