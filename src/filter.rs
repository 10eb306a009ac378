/// Prefix marking paths under Git's own metadata directory. A change there
/// is the cue that the tracked file list may be stale.
const GIT_DIR_PREFIX: &str = ".git/";

/// What to do with one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition<'a> {
	/// Run the command for this path (with the prefix already stripped).
	Run(&'a str),

	/// Re-list the tracked files; run nothing for this line.
	Refresh,

	/// Do nothing.
	Skip,
}

/// The per-line filter: an optional Git-tracked path set and an optional
/// literal path prefix.
///
/// The tracked set is `None` when Git filtering is bypassed. It is a plain
/// ordered list; membership is a linear scan, which is fine at the scale of
/// a repository file listing consulted once per changed file.
#[derive(Debug)]
pub struct PathFilter {
	tracked: Option<Vec<String>>,
	prefix: Option<String>,
}

impl PathFilter {
	pub fn new(tracked: Option<Vec<String>>, prefix: Option<String>) -> Self {
		Self { tracked, prefix }
	}

	/// Classifies one input line.
	///
	/// A path passes when it is Git-tracked (or tracking is bypassed) and
	/// carries the configured prefix. A path that fails but lies under
	/// `.git/` triggers a refresh of the tracked set instead, so the set is
	/// never stale by more than one metadata event. Everything else is
	/// skipped.
	pub fn classify<'a>(&self, file: &'a str) -> Disposition<'a> {
		let tracked_ok = match &self.tracked {
			None => true,
			Some(tracked) => tracked.iter().any(|t| t == file),
		};
		let prefix_ok = self
			.prefix
			.as_deref()
			.map_or(true, |prefix| file.starts_with(prefix));

		if tracked_ok && prefix_ok {
			let stripped = match self.prefix.as_deref() {
				Some(prefix) => &file[prefix.len()..],
				None => file,
			};
			Disposition::Run(stripped)
		} else if self.tracked.is_some() && file.starts_with(GIT_DIR_PREFIX) {
			Disposition::Refresh
		} else {
			Disposition::Skip
		}
	}

	/// Replaces the tracked set wholesale with a fresh listing.
	pub fn replace_tracked(&mut self, tracked: Vec<String>) {
		debug_assert!(self.tracked.is_some(), "refresh without git filtering");
		self.tracked = Some(tracked);
	}
}
