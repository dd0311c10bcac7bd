use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, WalkError>;

/// Errors from loading values and from bounded walks.
///
/// The unbounded walker itself never fails.
#[derive(Debug, Error)]
pub enum WalkError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input was not valid JSON or did not match the tagged document format.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Bounded walk reached a node deeper than the configured limit.
	#[error("walk depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Bounded walk would emit more leaves than the configured limit.
	#[error("walk leaf limit exceeded (max={max})")]
	LeafLimitExceeded {
		/// Configured leaf ceiling.
		max: usize,
	},
}
