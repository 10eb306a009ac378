use std::{io::BufRead, process::Command};

use tracing::debug;

use crate::{
	args::ARG_PLACEHOLDER,
	error::{Result, RuntimeError},
	filter::{Disposition, PathFilter},
	git,
};

/// The line loop: reads paths from the input stream, filters each one, and
/// synchronously runs the substituted command for those that pass.
///
/// Strictly sequential by design: a child process runs to completion before
/// the next line is even read, so commands never overlap and the stream
/// acts as a queue.
pub struct Runner {
	filter: PathFilter,
	template: Vec<String>,
	verbosity: u8,
}

impl Runner {
	pub fn new(filter: PathFilter, template: Vec<String>, verbosity: u8) -> Self {
		Self {
			filter,
			template,
			verbosity,
		}
	}

	/// Processes the stream until EOF, or until the first failing command
	/// or failing Git listing.
	pub fn run(&mut self, input: impl BufRead) -> Result<()> {
		for line in input.lines() {
			let file = line.map_err(|err| RuntimeError::IoError {
				about: "reading input line",
				err,
			})?;

			match self.filter.classify(&file) {
				Disposition::Run(path) => self.invoke(path)?,
				Disposition::Refresh => {
					self.vlog(1, &format!("Refreshing Git file list ({file})"));
					self.filter.replace_tracked(git::tracked_files()?);
				}
				Disposition::Skip => {
					self.vlog(2, &format!("Skipping: {file}"));
				}
			}
		}

		Ok(())
	}

	/// Substitutes the path into the template and runs the result, waiting
	/// for it to exit. Non-zero exit halts the whole stream.
	fn invoke(&self, path: &str) -> Result<()> {
		let cmd: Vec<String> = self
			.template
			.iter()
			.map(|arg| arg.replace(ARG_PLACEHOLDER, path))
			.collect();

		let displayed = shell_join(&cmd);
		self.vlog(1, &format!("Running: {displayed}"));
		debug!(command = %displayed, "executing");

		let Some((program, rest)) = cmd.split_first() else {
			// normalization guarantees at least the placeholder element
			return Ok(());
		};

		let status = Command::new(program)
			.args(rest)
			.status()
			.map_err(|err| RuntimeError::CommandSpawn {
				program: program.clone(),
				err,
			})?;

		if status.success() {
			Ok(())
		} else {
			Err(RuntimeError::CommandExit {
				command: displayed,
				status,
			})
		}
	}

	fn vlog(&self, level: u8, msg: &str) {
		if self.verbosity >= level {
			eprintln!("{msg}");
		}
	}
}

/// Joins an argv into a single display string, single-quoting any argument
/// a POSIX shell would mangle. Only used for log and error output; the
/// actual invocation passes the argv through unchanged.
fn shell_join(cmd: &[String]) -> String {
	cmd.iter()
		.map(|arg| shell_quote(arg))
		.collect::<Vec<_>>()
		.join(" ")
}

fn shell_quote(arg: &str) -> String {
	let safe = !arg.is_empty()
		&& arg
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || "_@%+=:,./-".contains(c));

	if safe {
		String::from(arg)
	} else {
		format!("'{}'", arg.replace('\'', r"'\''"))
	}
}
