use std::{io, process::ExitStatus};

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Errors which stop the filter loop. Every variant is fatal: the tool's
/// contract is to halt at the first failure and leave restart policy to
/// whatever supervises it.
#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum RuntimeError {
	/// An I/O error occurred reading the input stream.
	#[error("io({about}): {err}")]
	#[diagnostic(code(filterexec::io_error))]
	IoError {
		/// What it was about.
		about: &'static str,

		/// The I/O error which occurred.
		#[source]
		err: io::Error,
	},

	/// `git ls-files` could not be spawned at all.
	#[error("failed to run git ls-files: {err}")]
	#[diagnostic(
		code(filterexec::git::spawn),
		help("filterexec must be run inside a Git work tree, or with --no-git-filter")
	)]
	GitSpawn {
		/// The spawn error.
		#[source]
		err: io::Error,
	},

	/// `git ls-files` ran but exited non-zero.
	#[error("git ls-files exited with {status}")]
	#[diagnostic(
		code(filterexec::git::exit),
		help("filterexec must be run inside a Git work tree, or with --no-git-filter")
	)]
	GitExit {
		/// The listing command's exit status.
		status: ExitStatus,
	},

	/// The per-path command could not be spawned.
	#[error("failed to spawn `{program}`: {err}")]
	#[diagnostic(code(filterexec::command::spawn))]
	CommandSpawn {
		/// The program that was being spawned.
		program: String,

		/// The spawn error.
		#[source]
		err: io::Error,
	},

	/// The per-path command exited non-zero, halting the stream.
	#[error("command failed with {status}: {command}")]
	#[diagnostic(code(filterexec::command::exit))]
	CommandExit {
		/// The fully-substituted command, shell-quoted for display.
		command: String,

		/// The command's exit status.
		status: ExitStatus,
	},
}
