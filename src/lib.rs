//! Structural value walker: visit every string leaf of a runtime-typed value.

/// Value model, shape dispatch, and the leaf walker.
pub mod walk;
