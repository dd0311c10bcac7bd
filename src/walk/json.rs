use crate::walk::Result;
use crate::walk::value::{MapValue, Value};

/// Accepted textual input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
	/// Ordinary JSON; objects become associations.
	Plain,
	/// Adjacently tagged `Value` documents.
	Tagged,
}

impl InputFormat {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Plain => "plain",
			Self::Tagged => "tagged",
		}
	}
}

/// Map an ordinary JSON value onto the value model.
///
/// Objects are unordered in JSON, so they become [`Value::Map`] with string keys rather
/// than composites.
pub fn from_json(json: &serde_json::Value) -> Value {
	match json {
		serde_json::Value::Null => Value::Null,
		serde_json::Value::Bool(value) => Value::Bool(*value),
		serde_json::Value::Number(number) => {
			if let Some(value) = number.as_i64() {
				Value::I64(value)
			} else if let Some(value) = number.as_u64() {
				Value::U64(value)
			} else {
				Value::F64(number.as_f64().unwrap_or(f64::NAN))
			}
		}
		serde_json::Value::String(text) => Value::string(text.as_str()),
		serde_json::Value::Array(items) => Value::List(items.iter().map(from_json).collect()),
		serde_json::Value::Object(members) => Value::Map(members.iter().map(|(key, value)| (key.as_str(), from_json(value))).collect::<MapValue>()),
	}
}

/// Parse ordinary JSON text.
pub fn parse_plain(text: &str) -> Result<Value> {
	let json: serde_json::Value = serde_json::from_str(text)?;
	Ok(from_json(&json))
}

/// Parse a tagged `Value` document.
pub fn parse_tagged(text: &str) -> Result<Value> {
	Ok(serde_json::from_str(text)?)
}

/// Parse `text` in the given format.
pub fn parse(text: &str, format: InputFormat) -> Result<Value> {
	match format {
		InputFormat::Plain => parse_plain(text),
		InputFormat::Tagged => parse_tagged(text),
	}
}
