use clap::{ArgAction, Parser};

const OPTSET_FILTERING: &str = "Filtering options";
const OPTSET_COMMAND: &str = "Command options";
const OPTSET_DEBUGGING: &str = "Debugging options";

/// Placeholder token replaced with the current file path in every command
/// argument at invocation time.
pub const ARG_PLACEHOLDER: &str = "{}";

/// Filter changed files streamed by a watch tool; by default, only
/// Git-tracked files pass.
///
/// Reads newline-delimited paths from stdin (e.g. the output of
/// `watchman-wait -m0 <dir>`) and runs COMMAND for each path that passes
/// the filters, with `{}` in the command replaced by the path.
#[derive(Debug, Clone, Parser)]
#[command(name = "filterexec", author, version, about)]
pub struct Args {
	/// Bypass filtering to Git-tracked files
	#[arg(
		short = 'G',
		long,
		help_heading = OPTSET_FILTERING,
	)]
	pub no_git_filter: bool,

	/// Only pass paths beginning with this prefix (and strip the prefix)
	///
	/// The prefix is matched and removed literally, not as a pattern. The
	/// stripped path is what gets substituted into the command.
	#[arg(
		short,
		long,
		help_heading = OPTSET_FILTERING,
	)]
	pub prefix: Option<String>,

	/// Log filter decisions to stderr
	///
	/// Once: log each executed command and each refresh of the Git file
	/// list. Twice: also log each skipped path.
	#[arg(
		short,
		long,
		help_heading = OPTSET_DEBUGGING,
		action = ArgAction::Count,
	)]
	pub verbose: u8,

	/// Command to run for each path
	///
	/// Every occurrence of `{}` in any argument is replaced with the path.
	/// If no argument contains `{}`, the path is appended as a final
	/// argument. Defaults to `echo`.
	#[arg(
		help_heading = OPTSET_COMMAND,
		trailing_var_arg = true,
	)]
	pub command: Vec<String>,
}

impl Args {
	/// The normalized argv template: `echo` when no command was given, and
	/// with a trailing placeholder appended when none of the arguments
	/// contain one, so every invocation receives the current path.
	pub fn command_template(&self) -> Vec<String> {
		let mut template = if self.command.is_empty() {
			vec![String::from("echo")]
		} else {
			self.command.clone()
		};

		if template.iter().all(|arg| !arg.contains(ARG_PLACEHOLDER)) {
			template.push(String::from(ARG_PLACEHOLDER));
		}

		template
	}
}
