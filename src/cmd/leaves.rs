use std::path::PathBuf;

use leafwalk::walk::{LeafCollector, StopMode, WalkOptions, WalkStop, walk_with};
use serde::Serialize;

use crate::cmd::util::{input_format, load_value};

#[derive(clap::Args)]
pub struct Args {
	/// JSON input file, or `-` for stdin.
	pub path: PathBuf,
	/// Read the tagged value document format instead of plain JSON.
	#[arg(long)]
	pub tagged: bool,
	/// Print a JSON report instead of one leaf per line.
	#[arg(long)]
	pub json: bool,
	/// Deepest node depth to descend into (default 512).
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	/// Maximum number of leaves to print.
	#[arg(long = "limit")]
	pub limit: Option<usize>,
	/// Fail instead of truncating when a limit is hit.
	#[arg(long)]
	pub strict: bool,
}

#[derive(Serialize)]
struct LeavesJson<'a> {
	path: String,
	format: &'static str,
	leaves: &'a [String],
	count: usize,
	nodes: usize,
	deepest: u32,
	stop: Option<WalkStop>,
}

/// Walk the input and print every string leaf.
pub fn run(args: Args) -> leafwalk::walk::Result<()> {
	let Args {
		path,
		tagged,
		json,
		max_depth,
		limit,
		strict,
	} = args;

	let format = input_format(tagged);
	let value = load_value(&path, format)?;

	let mut options = WalkOptions {
		max_leaves: limit,
		on_limit: if strict { StopMode::Error } else { StopMode::Stop },
		..WalkOptions::default()
	};
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}

	let mut collector = LeafCollector::new();
	let report = walk_with(&value, &options, &mut collector)?;

	if json {
		let out = LeavesJson {
			path: path.display().to_string(),
			format: format.as_str(),
			leaves: &collector.leaves,
			count: report.leaves,
			nodes: report.nodes,
			deepest: report.deepest,
			stop: report.stop,
		};
		println!("{}", serde_json::to_string_pretty(&out)?);
		return Ok(());
	}

	for leaf in &collector.leaves {
		println!("{leaf}");
	}
	if let Some(stop) = report.stop {
		eprintln!("stopped at depth {}: {:?}", stop.depth, stop.reason);
	}

	Ok(())
}
