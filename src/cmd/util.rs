use std::io::Read;
use std::path::Path;

use leafwalk::walk::{InputFormat, Result, Value, parse};

/// Read `path` (or stdin for `-`) and parse it in `format`.
pub(crate) fn load_value(path: &Path, format: InputFormat) -> Result<Value> {
	let text = read_input(path)?;
	let value = parse(&text, format)?;
	tracing::debug!(path = %path.display(), format = format.as_str(), root = value.kind_name(), "loaded input");
	Ok(value)
}

/// Input format selected by the `--tagged` flag.
pub(crate) fn input_format(tagged: bool) -> InputFormat {
	if tagged { InputFormat::Tagged } else { InputFormat::Plain }
}

fn read_input(path: &Path) -> Result<String> {
	if path.as_os_str() == "-" {
		let mut text = String::new();
		std::io::stdin().read_to_string(&mut text)?;
		return Ok(text);
	}
	Ok(std::fs::read_to_string(path)?)
}
