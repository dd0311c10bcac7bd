use std::path::PathBuf;

use leafwalk::walk::{CensusRow, ShapeCensus, walk};
use serde::Serialize;

use crate::cmd::util::{input_format, load_value};

#[derive(clap::Args)]
pub struct Args {
	/// JSON input file, or `-` for stdin.
	pub path: PathBuf,
	/// Read the tagged value document format instead of plain JSON.
	#[arg(long)]
	pub tagged: bool,
	/// Print the census as JSON.
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct ShapeJson {
	path: String,
	root: &'static str,
	nodes: usize,
	deepest: u32,
	kinds: Vec<CensusRow>,
}

/// Count reachable nodes per shape kind.
pub fn run(args: Args) -> leafwalk::walk::Result<()> {
	let value = load_value(&args.path, input_format(args.tagged))?;

	let mut census = ShapeCensus::new();
	walk(&value, &mut census);

	if args.json {
		let out = ShapeJson {
			path: args.path.display().to_string(),
			root: value.shape_kind().as_str(),
			nodes: census.total(),
			deepest: census.deepest(),
			kinds: census.rows(),
		};
		println!("{}", serde_json::to_string_pretty(&out)?);
		return Ok(());
	}

	println!("path: {}", args.path.display());
	println!("root: {}", value.shape_kind().as_str());
	println!("nodes: {}", census.total());
	println!("deepest: {}", census.deepest());
	println!("kind\tcount");
	for row in census.rows() {
		println!("{}\t{}", row.kind.as_str(), row.count);
	}

	Ok(())
}
