use std::process::Command;

use tracing::debug;

use crate::error::{Result, RuntimeError};

/// Lists the paths currently tracked by Git, relative to the working
/// directory's repository, one per `git ls-files` output line.
///
/// Empty lines are dropped; order is whatever Git emits. A missing `git`
/// binary or a non-zero exit (e.g. not inside a work tree) is fatal.
pub fn tracked_files() -> Result<Vec<String>> {
	let output = Command::new("git")
		.arg("ls-files")
		.output()
		.map_err(|err| RuntimeError::GitSpawn { err })?;

	if !output.status.success() {
		return Err(RuntimeError::GitExit {
			status: output.status,
		});
	}

	let files: Vec<String> = String::from_utf8_lossy(&output.stdout)
		.lines()
		.filter(|line| !line.is_empty())
		.map(String::from)
		.collect();

	debug!(count = files.len(), "listed git-tracked files");
	Ok(files)
}
