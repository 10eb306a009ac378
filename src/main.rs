#![deny(rust_2018_idioms)]

use std::{env::var, io};

use clap::Parser;
use miette::Result;
use tracing::debug;

mod args;
mod error;
mod filter;
mod git;
mod runner;

use args::Args;
use filter::PathFilter;
use runner::Runner;

fn main() -> Result<()> {
	let args = Args::parse();

	if var("RUST_LOG").is_ok() {
		tracing_subscriber::fmt::try_init().ok();
	} else {
		tracing_subscriber::fmt()
			.with_env_filter(match args.verbose {
				0 => "filterexec=warn",
				1 => "filterexec=debug",
				_ => "filterexec=trace",
			})
			.with_writer(io::stderr)
			.try_init()
			.ok();
	}

	debug!(version = %env!("CARGO_PKG_VERSION"), ?args, "constructing runner from CLI");

	let template = args.command_template();

	// the initial listing happens before any input is read, so a broken
	// Git setup fails fast instead of on the first passing line
	let tracked = if args.no_git_filter {
		None
	} else {
		Some(git::tracked_files()?)
	};

	let filter = PathFilter::new(tracked, args.prefix.clone());
	let mut runner = Runner::new(filter, template, args.verbose);
	runner.run(io::stdin().lock())?;

	Ok(())
}
