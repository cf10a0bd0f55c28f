use std::io::Write;
use std::process::{Command, Output, Stdio};

fn binconv(args: &[&str], stdin: &str) -> Output {
  let mut child = Command::new(env!("CARGO_BIN_EXE_binconv"))
    .args(args)
    .env("RUST_LOG", "off")
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()
    .expect("spawn binconv");
  child
    .stdin
    .take()
    .expect("stdin")
    .write_all(stdin.as_bytes())
    .expect("write stdin");
  child.wait_with_output().expect("wait for binconv")
}

fn text(bytes: &[u8]) -> String {
  String::from_utf8_lossy(bytes).into_owned()
}

#[test]
fn converts_argument() {
  let out = binconv(&["hi!"], "");
  assert!(out.status.success());
  assert_eq!(text(&out.stdout), "1101000 1101001\n");
  assert_eq!(text(&out.stderr), "");
}

#[test]
fn missing_terminator_message_is_exact() {
  let out = binconv(&["hello"], "");
  assert_eq!(out.status.code(), Some(1));
  assert_eq!(
    text(&out.stderr),
    "Invalid login! Finally entered \"!\" must be.\n"
  );
  assert_eq!(text(&out.stdout), "");
}

#[test]
fn stdin_failures_are_reported_and_fail_the_run() {
  let out = binconv(&[], "hi!\nhello\n1 0 !\n");
  assert_eq!(out.status.code(), Some(1));
  assert_eq!(text(&out.stdout), "1101000 1101001\n");
  let stderr = text(&out.stderr);
  assert!(stderr.contains("Invalid login! Finally entered \"!\" must be.\n"));
  assert!(stderr.contains("empty binary group"));
}

#[test]
fn stdin_all_good_exits_zero() {
  let out = binconv(&[], "hi!\n1101000 1101001!\n");
  assert!(out.status.success());
  assert_eq!(text(&out.stdout), "1101000 1101001\nhi\n");
}

#[test]
fn unknown_option_is_usage_error() {
  let out = binconv(&["--verbose"], "");
  assert_eq!(out.status.code(), Some(64));
}
