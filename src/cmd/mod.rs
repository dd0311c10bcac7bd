/// Leaf listing command.
pub mod leaves;
/// Shape census command.
pub mod shape;
/// Shared input helpers.
pub mod util;
