#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "leafwalk", about = "Visit every string leaf of a JSON value")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print every string leaf.
	Leaves(cmd::leaves::Args),
	/// Count nodes per shape kind.
	Shape(cmd::shape::Args),
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> leafwalk::walk::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Leaves(args) => cmd::leaves::run(args),
		Commands::Shape(args) => cmd::shape::run(args),
	}
}

/// Install a stderr subscriber when `RUST_LOG` is set, e.g. `RUST_LOG=leafwalk=trace`.
fn init_tracing() {
	use tracing_subscriber::{EnvFilter, fmt, prelude::*};

	if std::env::var("RUST_LOG").is_err() {
		return;
	}
	tracing_subscriber::registry()
		.with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
		.with(EnvFilter::from_default_env())
		.init();
}
