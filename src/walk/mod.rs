mod error;
mod json;
mod reflect;
mod shape;
mod value;
mod visit;
mod walker;

/// Error and result aliases.
pub use error::{Result, WalkError};
/// JSON loading entry points.
pub use json::{InputFormat, from_json, parse, parse_plain, parse_tagged};
/// Host type mapping into the value model.
pub use reflect::{Reflect, ReflectKey, walk_reflect};
/// Shape classification types.
pub use shape::{Shape, ShapeKind};
/// Runtime value model.
pub use value::{FieldValue, MapEntry, MapKey, MapValue, StructValue, Value};
/// Visitor capability and stock visitors.
pub use visit::{CensusRow, LeafCollector, ShapeCensus, Visitor};
/// Walk entry points, limits and reports.
pub use walker::{StopMode, WalkOptions, WalkReport, WalkStop, WalkStopReason, collect_leaves, for_each_leaf, walk, walk_with};
