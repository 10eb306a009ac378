#![cfg(unix)]

use std::{fs, path::Path, process::Command as StdCommand};

use assert_cmd::Command;
use predicates::prelude::*;

fn filterexec() -> Command {
	Command::cargo_bin("filterexec").unwrap()
}

/// A scratch Git repository with the given files, of which only `tracked`
/// are added to the index. No commit is needed: `git ls-files` reads the
/// index.
fn scratch_repo(dir: &Path, tracked: &[&str], untracked: &[&str]) {
	let status = StdCommand::new("git")
		.arg("-C")
		.arg(dir)
		.args(["init", "-q"])
		.status()
		.expect("git init");
	assert!(status.success(), "git init failed");

	for file in tracked.iter().chain(untracked) {
		fs::write(dir.join(file), "contents\n").expect("write file");
	}

	if !tracked.is_empty() {
		let status = StdCommand::new("git")
			.arg("-C")
			.arg(dir)
			.arg("add")
			.args(tracked)
			.status()
			.expect("git add");
		assert!(status.success(), "git add failed");
	}
}

#[test]
fn default_command_echoes_each_path() {
	filterexec()
		.arg("-G")
		.write_stdin("a.txt\nb/c.txt\n")
		.assert()
		.success()
		.stdout("a.txt\nb/c.txt\n");
}

#[test]
fn placeholder_is_replaced_at_every_occurrence() {
	filterexec()
		.args(["-G", "echo", "{}:{}"])
		.write_stdin("a b\n")
		.assert()
		.success()
		.stdout("a b:a b\n");
}

#[test]
fn command_without_placeholder_gets_the_path_appended() {
	filterexec()
		.args(["-G", "printf", "%s-"])
		.write_stdin("a.txt\n")
		.assert()
		.success()
		.stdout("a.txt-");
}

#[test]
fn prefix_gates_and_strips_before_substitution() {
	filterexec()
		.args(["-G", "-p", "src/", "echo"])
		.write_stdin("src/a.py\nlib/b.py\n")
		.assert()
		.success()
		.stdout("a.py\n");
}

#[test]
fn verbose_logs_runs_and_skips_to_stderr() {
	filterexec()
		.args(["-G", "-v", "-v", "-p", "src/", "echo"])
		.write_stdin("src/a.py\nother.txt\n")
		.assert()
		.success()
		.stdout("a.py\n")
		.stderr(predicate::str::contains("Running: echo a.py"))
		.stderr(predicate::str::contains("Skipping: other.txt"));
}

#[test]
fn failing_command_halts_the_stream() {
	let dir = tempfile::tempdir().unwrap();
	let log = dir.path().join("seen.log");
	let script = format!("echo {{}} >> {}; exit 2", log.display());

	filterexec()
		.args(["-G", "sh", "-c", &script])
		.write_stdin("one\ntwo\nthree\n")
		.assert()
		.failure()
		.stderr(predicate::str::contains("command failed"));

	// only the first line was acted on
	assert_eq!(fs::read_to_string(&log).unwrap(), "one\n");
}

#[test]
fn git_filter_passes_only_tracked_paths() {
	let dir = tempfile::tempdir().unwrap();
	scratch_repo(dir.path(), &["tracked.txt"], &["untracked.txt"]);

	filterexec()
		.current_dir(dir.path())
		.arg("echo")
		.write_stdin("tracked.txt\nuntracked.txt\nmissing.txt\n")
		.assert()
		.success()
		.stdout("tracked.txt\n");
}

#[test]
fn git_metadata_line_refreshes_the_listing() {
	let dir = tempfile::tempdir().unwrap();
	scratch_repo(dir.path(), &["tracked.txt"], &["untracked.txt"]);

	// every passing line first stages untracked.txt, so the listing taken
	// at startup is stale by the time the .git/ line arrives; the refresh
	// must pick up the new index, letting the last line through
	let script = "git add -- untracked.txt; echo {}";
	filterexec()
		.current_dir(dir.path())
		.args(["-v", "sh", "-c", script])
		.write_stdin("untracked.txt\ntracked.txt\n.git/index\nuntracked.txt\n")
		.assert()
		.success()
		.stdout("tracked.txt\nuntracked.txt\n")
		.stderr(predicate::str::contains(
			"Refreshing Git file list (.git/index)",
		));
}

#[test]
fn stale_listing_skips_until_refreshed() {
	let dir = tempfile::tempdir().unwrap();
	scratch_repo(dir.path(), &["tracked.txt"], &["untracked.txt"]);

	// same stream as above minus the .git/ line: without a refresh the
	// stale listing applies to the end, so untracked.txt never passes
	let script = "git add -- untracked.txt; echo {}";
	filterexec()
		.current_dir(dir.path())
		.args(["sh", "-c", script])
		.write_stdin("untracked.txt\ntracked.txt\nuntracked.txt\n")
		.assert()
		.success()
		.stdout("tracked.txt\n");
}

#[test]
fn outside_a_repository_fails_before_reading_input() {
	let dir = tempfile::tempdir().unwrap();

	filterexec()
		.current_dir(dir.path())
		.env_remove("GIT_DIR")
		.arg("echo")
		.write_stdin("a.txt\n")
		.assert()
		.failure()
		.stdout("");
}

#[test]
fn no_git_filter_skips_the_startup_query() {
	// outside a repository, -G must work: the collaborator is never asked
	let dir = tempfile::tempdir().unwrap();

	filterexec()
		.current_dir(dir.path())
		.env_remove("GIT_DIR")
		.args(["-G", "echo"])
		.write_stdin("anything/not/tracked.txt\n")
		.assert()
		.success()
		.stdout("anything/not/tracked.txt\n");
}
