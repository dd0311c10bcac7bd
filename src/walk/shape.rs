use serde::Serialize;

use crate::walk::value::{MapValue, StructValue, Value};

/// Structural classification governing walker dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
	/// String leaf.
	ScalarString,
	/// Any non-string scalar.
	ScalarOther,
	/// Record with named fields.
	Composite,
	/// Indirection to zero or one value.
	Reference,
	/// Ordered fixed- or variable-length collection.
	Sequence,
	/// Unordered key->value collection.
	Association,
	/// Anything the walker does not traverse.
	Unsupported,
}

impl ShapeKind {
	/// Every kind, in a fixed reporting order.
	pub const ALL: [ShapeKind; 7] = [
		ShapeKind::ScalarString,
		ShapeKind::ScalarOther,
		ShapeKind::Composite,
		ShapeKind::Reference,
		ShapeKind::Sequence,
		ShapeKind::Association,
		ShapeKind::Unsupported,
	];

	/// Stable snake_case label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::ScalarString => "scalar_string",
			Self::ScalarOther => "scalar_other",
			Self::Composite => "composite",
			Self::Reference => "reference",
			Self::Sequence => "sequence",
			Self::Association => "association",
			Self::Unsupported => "unsupported",
		}
	}

	pub(crate) fn index(self) -> usize {
		self as usize
	}
}

/// Borrowed dispatch view of one value.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
	/// String leaf.
	ScalarString(&'a str),
	/// Non-string scalar.
	ScalarOther,
	/// Record with ordered fields.
	Composite(&'a StructValue),
	/// `None` for a null reference.
	Reference(Option<&'a Value>),
	/// Array or list elements.
	Sequence(&'a [Value]),
	/// Unordered key/value map.
	Association(&'a MapValue),
	/// Nothing the walker can look into.
	Unsupported,
}

impl Shape<'_> {
	/// Classification tag of this view.
	pub fn kind(&self) -> ShapeKind {
		match self {
			Self::ScalarString(_) => ShapeKind::ScalarString,
			Self::ScalarOther => ShapeKind::ScalarOther,
			Self::Composite(_) => ShapeKind::Composite,
			Self::Reference(_) => ShapeKind::Reference,
			Self::Sequence(_) => ShapeKind::Sequence,
			Self::Association(_) => ShapeKind::Association,
			Self::Unsupported => ShapeKind::Unsupported,
		}
	}
}

impl Value {
	/// Classify this value for dispatch.
	pub fn shape(&self) -> Shape<'_> {
		match self {
			Value::String(text) => Shape::ScalarString(text),
			Value::Bool(_) | Value::I64(_) | Value::U64(_) | Value::F64(_) | Value::Char(_) | Value::Bytes(_) => Shape::ScalarOther,
			Value::Struct(item) => Shape::Composite(item),
			Value::Ref(target) => Shape::Reference(target.as_deref()),
			Value::Array(items) | Value::List(items) => Shape::Sequence(items),
			Value::Map(map) => Shape::Association(map),
			Value::Null | Value::Opaque(_) => Shape::Unsupported,
		}
	}

	/// Shorthand for `self.shape().kind()`.
	pub fn shape_kind(&self) -> ShapeKind {
		self.shape().kind()
	}
}
