use std::ops::ControlFlow;

use serde::Serialize;

use crate::walk::shape::Shape;
use crate::walk::value::Value;
use crate::walk::visit::{LeafCollector, Visitor};
use crate::walk::{Result, WalkError};

/// Visit every string leaf reachable from `value`.
///
/// Composite fields and sequence elements are visited in order; association values are
/// visited in unspecified order and their keys are never inspected. Null references and
/// unsupported shapes are skipped. Never fails.
pub fn walk<V: Visitor + ?Sized>(value: &Value, visitor: &mut V) {
	walk_node(value, visitor, 0);
}

/// [`walk`] with a plain closure callback.
pub fn for_each_leaf(value: &Value, mut visit: impl FnMut(&str)) {
	walk(value, &mut visit);
}

/// Collect owned copies of every leaf in visit order.
pub fn collect_leaves(value: &Value) -> Vec<String> {
	let mut collector = LeafCollector::new();
	walk(value, &mut collector);
	collector.into_leaves()
}

fn walk_node<V: Visitor + ?Sized>(value: &Value, visitor: &mut V, depth: u32) {
	let shape = value.shape();
	visitor.enter(shape.kind(), depth);

	match shape {
		Shape::ScalarString(text) => visitor.visit_str(text),
		Shape::ScalarOther => {}
		Shape::Composite(item) => {
			for field in &item.fields {
				walk_node(&field.value, visitor, depth + 1);
			}
		}
		Shape::Reference(target) => {
			if let Some(target) = target {
				walk_node(target, visitor, depth + 1);
			}
		}
		Shape::Sequence(items) => {
			for item in items {
				walk_node(item, visitor, depth + 1);
			}
		}
		Shape::Association(map) => {
			for item in map.values() {
				walk_node(item, visitor, depth + 1);
			}
		}
		Shape::Unsupported => {
			tracing::trace!(kind = value.kind_name(), depth, "skipping unsupported value");
		}
	}
}

/// Behavior when a walk limit is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopMode {
	/// End the walk and describe the stop in [`WalkReport::stop`].
	Stop,
	/// Return a [`WalkError`].
	Error,
}

/// Limits for [`walk_with`].
#[derive(Debug, Clone)]
pub struct WalkOptions {
	/// Deepest node depth dispatched. Root depth is 0.
	pub max_depth: u32,
	/// Maximum number of leaves emitted.
	pub max_leaves: Option<usize>,
	/// Action when either limit is reached.
	pub on_limit: StopMode,
}

impl Default for WalkOptions {
	fn default() -> Self {
		Self {
			max_depth: 512,
			max_leaves: None,
			on_limit: StopMode::Stop,
		}
	}
}

impl WalkOptions {
	/// No depth or leaf limit.
	pub fn unbounded() -> Self {
		Self {
			max_depth: u32::MAX,
			max_leaves: None,
			on_limit: StopMode::Stop,
		}
	}
}

/// Why a bounded walk ended early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum WalkStopReason {
	/// A node sat deeper than `max_depth`.
	DepthLimit {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// `max` leaves were already emitted.
	LeafLimit {
		/// Configured leaf ceiling.
		max: usize,
	},
}

/// Stop metadata with the depth where it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WalkStop {
	/// Depth of the node that hit the limit.
	pub depth: u32,
	/// Structured stop reason.
	#[serde(flatten)]
	pub reason: WalkStopReason,
}

/// Summary of a bounded walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WalkReport {
	/// Leaves handed to the visitor.
	pub leaves: usize,
	/// Nodes dispatched.
	pub nodes: usize,
	/// Deepest dispatched node depth.
	pub deepest: u32,
	/// Set when a limit ended the walk under [`StopMode::Stop`].
	pub stop: Option<WalkStop>,
}

/// Walk `value` under depth and leaf limits.
///
/// When no limit is hit the visitor sees exactly the sequence [`walk`] produces.
pub fn walk_with<V: Visitor + ?Sized>(value: &Value, options: &WalkOptions, visitor: &mut V) -> Result<WalkReport> {
	let mut walker = BoundedWalker {
		options,
		visitor,
		report: WalkReport::default(),
	};

	let flow = walker.walk_node(value, 0);
	let mut report = walker.report;

	if let ControlFlow::Break(stop) = flow {
		match options.on_limit {
			StopMode::Stop => report.stop = Some(stop),
			StopMode::Error => {
				return Err(match stop.reason {
					WalkStopReason::DepthLimit { max_depth } => WalkError::DepthExceeded { max_depth },
					WalkStopReason::LeafLimit { max } => WalkError::LeafLimitExceeded { max },
				});
			}
		}
	}

	tracing::debug!(
		leaves = report.leaves,
		nodes = report.nodes,
		deepest = report.deepest,
		stopped = report.stop.is_some(),
		"bounded walk finished"
	);
	Ok(report)
}

struct BoundedWalker<'a, 'v, V: Visitor + ?Sized> {
	options: &'a WalkOptions,
	visitor: &'v mut V,
	report: WalkReport,
}

impl<V: Visitor + ?Sized> BoundedWalker<'_, '_, V> {
	fn walk_node(&mut self, value: &Value, depth: u32) -> ControlFlow<WalkStop> {
		if depth > self.options.max_depth {
			return ControlFlow::Break(WalkStop {
				depth,
				reason: WalkStopReason::DepthLimit {
					max_depth: self.options.max_depth,
				},
			});
		}

		let shape = value.shape();
		if let Shape::ScalarString(_) = shape
			&& let Some(max) = self.options.max_leaves
			&& self.report.leaves >= max
		{
			return ControlFlow::Break(WalkStop {
				depth,
				reason: WalkStopReason::LeafLimit { max },
			});
		}

		self.report.nodes += 1;
		self.report.deepest = self.report.deepest.max(depth);
		self.visitor.enter(shape.kind(), depth);

		match shape {
			Shape::ScalarString(text) => {
				self.visitor.visit_str(text);
				self.report.leaves += 1;
			}
			Shape::Composite(item) => {
				for field in &item.fields {
					self.walk_node(&field.value, depth + 1)?;
				}
			}
			Shape::Reference(Some(target)) => self.walk_node(target, depth + 1)?,
			Shape::Sequence(items) => {
				for item in items {
					self.walk_node(item, depth + 1)?;
				}
			}
			Shape::Association(map) => {
				for item in map.values() {
					self.walk_node(item, depth + 1)?;
				}
			}
			Shape::Unsupported => {
				tracing::trace!(kind = value.kind_name(), depth, "skipping unsupported value");
			}
			Shape::ScalarOther | Shape::Reference(None) => {}
		}

		ControlFlow::Continue(())
	}
}

#[cfg(test)]
mod tests;
