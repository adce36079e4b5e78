// SPDX-License-Identifier: MIT OR Apache-2.0
use assert_cmd::Command;
use std::fs;

const EMPTY_MD5: &str = "d41d8cd98f00b204e9800998ecf8427e";
const ABC_SHA256: &str =
	"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

#[allow(deprecated)]
fn hashpipe() -> Command {
	let mut cmd =
		Command::cargo_bin("hashpipe").expect("binary hashpipe available");
	cmd.env_remove("RUST_LOG");
	cmd
}

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
	String::from_utf8(assert.get_output().stdout.clone())
		.expect("stdout should be UTF-8")
}

fn stderr_of(assert: &assert_cmd::assert::Assert) -> String {
	String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}

#[test]
fn empty_stdin_defaults_to_md5() {
	let assert = hashpipe().arg("--nb").write_stdin("").assert().success();
	assert_eq!(stdout_of(&assert), format!("{EMPTY_MD5}\n"));
}

#[test]
fn stdin_sentinel_matches_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("abc.txt");
	fs::write(&path, "abc").unwrap();

	let from_stdin = hashpipe()
		.args(["--nb", "-h", "sha256", "-i", "."])
		.write_stdin("abc")
		.assert()
		.success();
	let from_file = hashpipe()
		.args(["--nb", "-h", "sha256", "-f"])
		.arg(&path)
		.assert()
		.success();

	assert_eq!(stdout_of(&from_stdin), format!("{ABC_SHA256}\n"));
	assert_eq!(stdout_of(&from_stdin), stdout_of(&from_file));
}

#[test]
fn unknown_algorithm_is_rejected_before_io() {
	let dir = tempfile::tempdir().unwrap();
	let output = dir.path().join("out.bin");
	let assert = hashpipe()
		.args(["-h", "sha9999", "-i", "does-not-exist.txt", "-o"])
		.arg(&output)
		.assert()
		.failure()
		.code(1);
	let stderr = stderr_of(&assert);
	assert!(stderr.contains("unknown hash algorithm"), "{stderr}");
	assert!(!stderr.contains("not found"), "{stderr}");
	assert!(!output.exists());
}

#[test]
fn missing_input_writes_nothing() {
	let dir = tempfile::tempdir().unwrap();
	let output = dir.path().join("out.bin");
	let assert = hashpipe()
		.arg("-i")
		.arg(dir.path().join("missing.txt"))
		.arg("-o")
		.arg(&output)
		.assert()
		.failure()
		.code(1);
	assert!(stderr_of(&assert).contains("file not found"));
	assert!(!output.exists());
}

#[test]
fn base64_encode_from_stdin() {
	let assert = hashpipe()
		.args(["--nb", "-h", "base64encoder"])
		.write_stdin("hello")
		.assert()
		.success();
	assert_eq!(stdout_of(&assert), "aGVsbG8=\n");
}

#[test]
fn base64_decode_tolerates_trailing_newline() {
	let assert = hashpipe()
		.args(["--nb", "-h", "base64decoder"])
		.write_stdin("aGVsbG8=\n")
		.assert()
		.success();
	assert_eq!(stdout_of(&assert), "hello\n");
}

#[test]
fn base64_decode_rejects_invalid_character() {
	let assert = hashpipe()
		.args(["--nb", "-h", "base64decoder"])
		.write_stdin("aGVs!G8=")
		.assert()
		.failure();
	assert!(stderr_of(&assert).contains("invalid base64"));
	assert!(stdout_of(&assert).is_empty());
}

#[test]
fn output_file_holds_raw_digest() {
	let dir = tempfile::tempdir().unwrap();
	let output = dir.path().join("digest.bin");
	hashpipe()
		.args(["--nb", "-h", "sha256", "-o"])
		.arg(&output)
		.write_stdin("abc")
		.assert()
		.success();
	let written = fs::read(&output).unwrap();
	assert_eq!(hex::encode(written), ABC_SHA256);
}

#[test]
fn format_override_writes_hex_file() {
	let dir = tempfile::tempdir().unwrap();
	let output = dir.path().join("digest.txt");
	hashpipe()
		.args(["--nb", "-h", "sha256", "--format", "hex", "-o"])
		.arg(&output)
		.write_stdin("abc")
		.assert()
		.success();
	assert_eq!(fs::read_to_string(&output).unwrap(), ABC_SHA256);
}

#[test]
fn multiple_files_are_prefixed_unless_banner_suppressed() {
	let dir = tempfile::tempdir().unwrap();
	let a = dir.path().join("a.txt");
	let b = dir.path().join("b.txt");
	fs::write(&a, "").unwrap();
	fs::write(&b, "abc").unwrap();

	let assert = hashpipe()
		.args(["-h", "sha256", "-i"])
		.arg(&a)
		.arg(&b)
		.assert()
		.success();
	let stdout = stdout_of(&assert);
	let lines: Vec<&str> = stdout.lines().collect();
	assert_eq!(lines.len(), 2);
	assert_eq!(lines[1], format!("{}: {ABC_SHA256}", b.display()));
	assert!(lines[0].starts_with(&format!("{}: ", a.display())));

	let assert = hashpipe()
		.args(["--nb", "-h", "sha256", "-i"])
		.arg(&a)
		.arg(&b)
		.assert()
		.success();
	let stdout = stdout_of(&assert);
	assert_eq!(stdout.lines().nth(1), Some(ABC_SHA256));
}

#[test]
fn fail_fast_stops_on_first_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let good = dir.path().join("good.txt");
	fs::write(&good, "abc").unwrap();
	let assert = hashpipe()
		.args(["--nb", "-h", "sha256", "-i"])
		.arg(dir.path().join("missing.txt"))
		.arg(&good)
		.assert()
		.failure()
		.code(1);
	assert!(stdout_of(&assert).is_empty());
}

#[test]
fn continue_reports_all_failures() {
	let dir = tempfile::tempdir().unwrap();
	let good = dir.path().join("good.txt");
	fs::write(&good, "abc").unwrap();
	let assert = hashpipe()
		.args(["--nb", "--continue", "-h", "sha256", "-i"])
		.arg(dir.path().join("missing.txt"))
		.arg(&good)
		.assert()
		.failure()
		.code(2);
	assert_eq!(stdout_of(&assert), format!("{ABC_SHA256}\n"));
	assert!(stderr_of(&assert).contains("file not found"));
}

#[test]
fn banner_goes_to_stderr() {
	let assert = hashpipe().write_stdin("").assert().success();
	assert_eq!(stdout_of(&assert), format!("{EMPTY_MD5}\n"));
	assert!(stderr_of(&assert).contains("hashpipe v"));
}

#[test]
fn completions_are_generated() {
	let assert = hashpipe()
		.args(["--generate-completions", "bash"])
		.assert()
		.success();
	assert!(stdout_of(&assert).contains("hashpipe"));
}
