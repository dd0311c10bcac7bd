use std::collections::HashMap;
use std::collections::hash_map;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Runtime-typed value tree handed to the walker.
///
/// Serializes as adjacently tagged JSON (`{"kind": "...", "value": ...}`), which is
/// the tagged document format accepted by [`crate::walk::parse_tagged`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
	/// Absent dynamic value.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	I64(i64),
	/// Unsigned integer scalar.
	U64(u64),
	/// Floating point scalar.
	F64(f64),
	/// Single code point.
	Char(char),
	/// Opaque byte blob.
	Bytes(Vec<u8>),
	/// String leaf.
	String(Box<str>),
	/// Indirection to zero or one value.
	Ref(Option<Arc<Value>>),
	/// Fixed-length sequence.
	Array(Vec<Value>),
	/// Variable-length sequence.
	List(Vec<Value>),
	/// Unordered key->value association.
	Map(MapValue),
	/// Record with ordered named fields.
	Struct(StructValue),
	/// Host value with no traversable shape, tagged with its type name.
	Opaque(Box<str>),
}

impl Value {
	/// Build a string leaf.
	pub fn string(text: impl Into<Box<str>>) -> Self {
		Self::String(text.into())
	}

	/// Build a non-null reference to `target`.
	pub fn reference(target: Value) -> Self {
		Self::Ref(Some(Arc::new(target)))
	}

	/// Build a reference sharing an existing pointee.
	pub fn shared_ref(target: &Arc<Value>) -> Self {
		Self::Ref(Some(Arc::clone(target)))
	}

	/// Build a null reference.
	pub fn null_ref() -> Self {
		Self::Ref(None)
	}

	/// Build a variable-length sequence.
	pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
		Self::List(items.into_iter().collect())
	}

	/// Build a fixed-length sequence.
	pub fn array<const N: usize>(items: [Value; N]) -> Self {
		Self::Array(items.into())
	}

	/// Short lowercase label for the variant.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::I64(_) => "i64",
			Self::U64(_) => "u64",
			Self::F64(_) => "f64",
			Self::Char(_) => "char",
			Self::Bytes(_) => "bytes",
			Self::String(_) => "string",
			Self::Ref(_) => "ref",
			Self::Array(_) => "array",
			Self::List(_) => "list",
			Self::Map(_) => "map",
			Self::Struct(_) => "struct",
			Self::Opaque(_) => "opaque",
		}
	}
}

impl From<StructValue> for Value {
	fn from(value: StructValue) -> Self {
		Self::Struct(value)
	}
}

impl From<MapValue> for Value {
	fn from(value: MapValue) -> Self {
		Self::Map(value)
	}
}

/// Composite value with fields in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructValue {
	/// Record type name, empty when anonymous.
	pub type_name: Box<str>,
	/// Fields in declaration order.
	pub fields: Vec<FieldValue>,
}

impl StructValue {
	/// Start an empty composite of `type_name`.
	pub fn new(type_name: impl Into<Box<str>>) -> Self {
		Self {
			type_name: type_name.into(),
			fields: Vec::new(),
		}
	}

	/// Append one field, keeping declaration order.
	pub fn field(mut self, name: impl Into<Box<str>>, value: Value) -> Self {
		self.fields.push(FieldValue { name: name.into(), value });
		self
	}

	/// Look up a field value by name.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|item| item.name.as_ref() == name).map(|item| &item.value)
	}
}

/// One named field of a [`StructValue`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldValue {
	/// Field name.
	pub name: Box<str>,
	/// Field content.
	pub value: Value,
}

/// Association key. Keys are never traversed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MapKey {
	/// Boolean key.
	Bool(bool),
	/// Signed integer key.
	Int(i64),
	/// Unsigned integer key beyond `i64::MAX`.
	UInt(u64),
	/// String key.
	Str(Box<str>),
}

impl From<&str> for MapKey {
	fn from(value: &str) -> Self {
		Self::Str(value.into())
	}
}

impl From<String> for MapKey {
	fn from(value: String) -> Self {
		Self::Str(value.into_boxed_str())
	}
}

impl From<i64> for MapKey {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<bool> for MapKey {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

/// Unordered association of keys to values.
///
/// Iteration order is unspecified and may differ between two maps holding the same entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<MapEntry>", into = "Vec<MapEntry>")]
pub struct MapValue {
	entries: HashMap<MapKey, Value>,
}

impl MapValue {
	/// Create an empty association.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert one entry, returning the replaced value if the key existed.
	pub fn insert(&mut self, key: impl Into<MapKey>, value: Value) -> Option<Value> {
		self.entries.insert(key.into(), value)
	}

	/// Look up a value by key.
	pub fn get(&self, key: &MapKey) -> Option<&Value> {
		self.entries.get(key)
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when there are no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate entries in unspecified order.
	pub fn iter(&self) -> hash_map::Iter<'_, MapKey, Value> {
		self.entries.iter()
	}

	/// Iterate values in unspecified order.
	pub fn values(&self) -> hash_map::Values<'_, MapKey, Value> {
		self.entries.values()
	}
}

impl<K: Into<MapKey>> FromIterator<(K, Value)> for MapValue {
	fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().map(|(key, value)| (key.into(), value)).collect(),
		}
	}
}

/// Serialized form of one association entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapEntry {
	/// Entry key.
	pub key: MapKey,
	/// Entry value.
	pub value: Value,
}

impl From<Vec<MapEntry>> for MapValue {
	fn from(entries: Vec<MapEntry>) -> Self {
		entries.into_iter().map(|entry| (entry.key, entry.value)).collect()
	}
}

impl From<MapValue> for Vec<MapEntry> {
	fn from(map: MapValue) -> Self {
		let mut entries: Vec<MapEntry> = map.entries.into_iter().map(|(key, value)| MapEntry { key, value }).collect();
		entries.sort_by(|a, b| a.key.cmp(&b.key));
		entries
	}
}
