use serde::Serialize;

use crate::walk::shape::ShapeKind;

/// Capability invoked by the walker.
///
/// Any `FnMut(&str)` closure is a visitor. Implement the trait directly when the
/// node-level [`Visitor::enter`] hook is also needed.
pub trait Visitor {
	/// Called once per string leaf, in traversal order.
	fn visit_str(&mut self, text: &str);

	/// Called once per reached node before dispatch. Root depth is 0.
	fn enter(&mut self, kind: ShapeKind, depth: u32) {
		let _ = (kind, depth);
	}
}

impl<F> Visitor for F
where
	F: FnMut(&str),
{
	fn visit_str(&mut self, text: &str) {
		self(text)
	}
}

/// Visitor that keeps owned copies of every leaf in visit order.
#[derive(Debug, Clone, Default)]
pub struct LeafCollector {
	/// Leaves seen so far.
	pub leaves: Vec<String>,
}

impl LeafCollector {
	/// Empty collector.
	pub fn new() -> Self {
		Self::default()
	}

	/// Consume the collector, returning the leaves.
	pub fn into_leaves(self) -> Vec<String> {
		self.leaves
	}
}

impl Visitor for LeafCollector {
	fn visit_str(&mut self, text: &str) {
		self.leaves.push(text.to_owned());
	}
}

/// Per-kind node counts gathered during a walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeCensus {
	counts: [usize; ShapeKind::ALL.len()],
	deepest: u32,
}

impl ShapeCensus {
	/// Census with all counts at zero.
	pub fn new() -> Self {
		Self::default()
	}

	/// Nodes of `kind` reached.
	pub fn count(&self, kind: ShapeKind) -> usize {
		self.counts[kind.index()]
	}

	/// Total nodes reached.
	pub fn total(&self) -> usize {
		self.counts.iter().sum()
	}

	/// Deepest node depth reached.
	pub fn deepest(&self) -> u32 {
		self.deepest
	}

	/// Non-zero counts in [`ShapeKind::ALL`] order.
	pub fn rows(&self) -> Vec<CensusRow> {
		ShapeKind::ALL
			.into_iter()
			.filter(|kind| self.count(*kind) > 0)
			.map(|kind| CensusRow {
				kind,
				count: self.count(kind),
			})
			.collect()
	}
}

impl Visitor for ShapeCensus {
	fn visit_str(&mut self, _text: &str) {}

	fn enter(&mut self, kind: ShapeKind, depth: u32) {
		self.counts[kind.index()] += 1;
		self.deepest = self.deepest.max(depth);
	}
}

/// One line of a [`ShapeCensus`] report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CensusRow {
	/// Counted kind.
	pub kind: ShapeKind,
	/// Nodes of that kind.
	pub count: usize,
}
