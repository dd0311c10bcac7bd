use std::sync::Arc;

use leafwalk_testkit::{assert_contains, assert_same_multiset};
use pretty_assertions::assert_eq;

use crate::walk::{
	MapValue, ShapeCensus, ShapeKind, StopMode, StructValue, Value, Visitor, WalkError, WalkOptions, WalkStopReason, collect_leaves, for_each_leaf, walk,
	walk_with,
};

fn profile(age: i64, city: &str) -> Value {
	StructValue::new("Profile").field("Age", Value::I64(age)).field("City", Value::string(city)).into()
}

fn person() -> Value {
	StructValue::new("Person")
		.field("Name", Value::string("Bobo"))
		.field("Profile", profile(33, "Shanghai"))
		.into()
}

fn nested(depth: usize, leaf: &str) -> Value {
	let mut value = Value::string(leaf);
	for _ in 0..depth {
		value = Value::list([value]);
	}
	value
}

#[test]
fn ordered_cases_emit_expected_leaves() {
	let cases: Vec<(&str, Value, Vec<&str>)> = vec![
		(
			"struct with one string field",
			StructValue::new("").field("Name", Value::string("Bobo")).into(),
			vec!["Bobo"],
		),
		(
			"struct with two string fields",
			StructValue::new("")
				.field("Name", Value::string("Bobo"))
				.field("City", Value::string("Shanghai"))
				.into(),
			vec!["Bobo", "Shanghai"],
		),
		(
			"struct with non string field",
			StructValue::new("").field("Name", Value::string("Bobo")).field("Age", Value::I64(33)).into(),
			vec!["Bobo"],
		),
		("nested fields", person(), vec!["Bobo", "Shanghai"]),
		("pointers to things", Value::reference(person()), vec!["Bobo", "Shanghai"]),
		("slices", Value::list([profile(33, "Shanghai"), profile(34, "Beijing")]), vec!["Shanghai", "Beijing"]),
		("arrays", Value::array([profile(33, "Shanghai"), profile(34, "Beijing")]), vec!["Shanghai", "Beijing"]),
		("bare string", Value::string("alone"), vec!["alone"]),
	];

	for (name, input, expected) in cases {
		let mut got = Vec::new();
		for_each_leaf(&input, |text| got.push(text.to_owned()));
		assert_eq!(got, expected, "case: {name}");
	}
}

#[test]
fn non_string_field_does_not_stop_siblings() {
	let value: Value = StructValue::new("Mixed")
		.field("Age", Value::I64(33))
		.field("Ok", Value::Bool(true))
		.field("Ratio", Value::F64(0.5))
		.field("City", Value::string("Shanghai"))
		.into();
	assert_eq!(collect_leaves(&value), ["Shanghai"]);
}

#[test]
fn reference_is_transparent() {
	let direct = collect_leaves(&person());
	let through_ref = collect_leaves(&Value::reference(person()));
	let through_two = collect_leaves(&Value::reference(Value::reference(person())));
	assert_eq!(through_ref, direct);
	assert_eq!(through_two, direct);
}

#[test]
fn null_reference_yields_nothing() {
	assert!(collect_leaves(&Value::null_ref()).is_empty());

	let value: Value = StructValue::new("Node")
		.field("Label", Value::string("head"))
		.field("Next", Value::null_ref())
		.into();
	assert_eq!(collect_leaves(&value), ["head"]);
}

#[test]
fn shared_pointee_is_visited_once_per_reference() {
	let shared = Arc::new(Value::string("shared"));
	let value = Value::list([Value::shared_ref(&shared), Value::shared_ref(&shared)]);
	assert_eq!(collect_leaves(&value), ["shared", "shared"]);
}

#[test]
fn association_values_are_all_visited_keys_never() {
	let map: MapValue = [("Foo", Value::string("Bar")), ("Baz", Value::string("Boz"))].into_iter().collect();
	let got = collect_leaves(&map.into());

	assert_eq!(got.len(), 2);
	assert_contains(&got, "Bar");
	assert_contains(&got, "Boz");
	assert!(!got.iter().any(|item| item == "Foo" || item == "Baz"), "keys must not be visited: {got:?}");
}

#[test]
fn association_of_composites_visits_each_value_once() {
	let map: MapValue = [
		(1_i64, profile(33, "Shanghai")),
		(2, profile(34, "Beijing")),
		(3, Value::reference(profile(35, "Chengdu"))),
	]
	.into_iter()
	.collect();
	assert_same_multiset(&collect_leaves(&map.into()), &["Shanghai", "Beijing", "Chengdu"]);
}

#[test]
fn strings_are_leaves_not_character_sequences() {
	let mut calls = 0;
	for_each_leaf(&Value::string("Shanghai"), |_| calls += 1);
	assert_eq!(calls, 1);
}

#[test]
fn empty_containers_yield_nothing() {
	let empties = [
		Value::from(StructValue::new("Empty")),
		Value::list(Vec::new()),
		Value::Array(Vec::new()),
		Value::from(MapValue::new()),
	];
	for value in &empties {
		assert!(collect_leaves(value).is_empty(), "{} should be empty", value.kind_name());
	}
}

#[test]
fn unsupported_and_scalar_roots_yield_nothing() {
	for value in [Value::Null, Value::Opaque("func()".into()), Value::I64(1), Value::Char('x'), Value::Bytes(b"Bobo".to_vec())] {
		assert!(collect_leaves(&value).is_empty(), "{}", value.kind_name());
	}
}

#[test]
fn walking_twice_gives_identical_results() {
	let value = Value::list([person(), Value::reference(profile(34, "Beijing"))]);
	let first = collect_leaves(&value);
	let second = collect_leaves(&value);
	assert_eq!(first, second);

	let map: MapValue = [("a", Value::string("x")), ("b", Value::string("y"))].into_iter().collect();
	let map = Value::from(map);
	assert_same_multiset(&collect_leaves(&map), &collect_leaves(&map));
}

#[test]
fn enter_hook_sees_every_node_with_depth() {
	#[derive(Default)]
	struct Trace {
		nodes: Vec<(ShapeKind, u32)>,
		leaves: Vec<String>,
	}

	impl Visitor for Trace {
		fn visit_str(&mut self, text: &str) {
			self.leaves.push(text.to_owned());
		}

		fn enter(&mut self, kind: ShapeKind, depth: u32) {
			self.nodes.push((kind, depth));
		}
	}

	let mut trace = Trace::default();
	walk(&Value::reference(person()), &mut trace);

	assert_eq!(trace.leaves, ["Bobo", "Shanghai"]);
	assert_eq!(
		trace.nodes,
		[
			(ShapeKind::Reference, 0),
			(ShapeKind::Composite, 1),
			(ShapeKind::ScalarString, 2),
			(ShapeKind::Composite, 2),
			(ShapeKind::ScalarOther, 3),
			(ShapeKind::ScalarString, 3),
		]
	);
}

#[test]
fn census_counts_nodes_per_kind() {
	let value = Value::list([Value::reference(person()), Value::null_ref(), Value::Null]);
	let mut census = ShapeCensus::new();
	walk(&value, &mut census);

	assert_eq!(census.count(ShapeKind::Sequence), 1);
	assert_eq!(census.count(ShapeKind::Reference), 2);
	assert_eq!(census.count(ShapeKind::Composite), 2);
	assert_eq!(census.count(ShapeKind::ScalarString), 2);
	assert_eq!(census.count(ShapeKind::ScalarOther), 1);
	assert_eq!(census.count(ShapeKind::Unsupported), 1);
	assert_eq!(census.count(ShapeKind::Association), 0);
	assert_eq!(census.total(), 9);
	assert_eq!(census.deepest(), 4);
	assert_eq!(census.rows().len(), 6);
}

#[test]
fn bounded_walk_matches_unbounded_when_limits_are_not_hit() {
	let value = Value::list([person(), Value::array([profile(34, "Beijing")])]);
	let mut got = Vec::new();
	let report = walk_with(&value, &WalkOptions::default(), &mut |text: &str| got.push(text.to_owned())).expect("walk succeeds");

	assert_eq!(got, collect_leaves(&value));
	assert_eq!(report.leaves, 3);
	assert_eq!(report.nodes, 10);
	assert_eq!(report.deepest, 3);
	assert!(report.stop.is_none());
}

#[test]
fn depth_limit_stops_and_reports() {
	let value = Value::list([Value::string("top"), nested(5, "deep"), Value::string("after")]);
	let options = WalkOptions {
		max_depth: 3,
		..WalkOptions::default()
	};

	let mut got = Vec::new();
	let report = walk_with(&value, &options, &mut |text: &str| got.push(text.to_owned())).expect("stop mode does not fail");

	assert_eq!(got, ["top"]);
	let stop = report.stop.expect("expected stop");
	assert_eq!(stop.depth, 4);
	assert_eq!(stop.reason, WalkStopReason::DepthLimit { max_depth: 3 });
	assert_eq!(report.deepest, 3);
}

#[test]
fn depth_limit_in_error_mode_fails() {
	let options = WalkOptions {
		max_depth: 2,
		max_leaves: None,
		on_limit: StopMode::Error,
	};
	let err = walk_with(&nested(3, "deep"), &options, &mut |_: &str| {}).expect_err("must fail");
	assert!(matches!(err, WalkError::DepthExceeded { max_depth: 2 }));
}

#[test]
fn leaf_limit_stops_before_extra_leaf() {
	let value = Value::list(["a", "b", "c", "d"].map(Value::string));
	let options = WalkOptions {
		max_leaves: Some(2),
		..WalkOptions::default()
	};

	let mut got = Vec::new();
	let report = walk_with(&value, &options, &mut |text: &str| got.push(text.to_owned())).expect("stop mode does not fail");

	assert_eq!(got, ["a", "b"]);
	assert_eq!(report.leaves, 2);
	assert_eq!(report.nodes, 3);
	assert_eq!(report.stop.map(|stop| stop.reason), Some(WalkStopReason::LeafLimit { max: 2 }));
}

#[test]
fn leaf_limit_in_error_mode_fails() {
	let options = WalkOptions {
		max_leaves: Some(0),
		on_limit: StopMode::Error,
		..WalkOptions::default()
	};
	let err = walk_with(&person(), &options, &mut |_: &str| {}).expect_err("must fail");
	assert!(matches!(err, WalkError::LeafLimitExceeded { max: 0 }));
}

#[test]
fn unbounded_options_walk_deep_values() {
	let value = nested(500, "bottom");
	let report = walk_with(&value, &WalkOptions::unbounded(), &mut |_: &str| {}).expect("walk succeeds");
	assert_eq!(report.leaves, 1);
	assert_eq!(report.deepest, 500);
}

#[test]
fn leaf_limit_stop_does_not_count_the_withheld_leaf() {
	let value = Value::list([Value::string("a"), Value::string("b")]);
	let options = WalkOptions {
		max_leaves: Some(1),
		..WalkOptions::default()
	};

	let mut census = ShapeCensus::new();
	let report = walk_with(&value, &options, &mut census).expect("stop mode does not fail");

	assert_eq!(report.leaves, 1);
	assert_eq!(report.nodes, 2);
	assert_eq!(census.total(), 2);
	assert_eq!(census.count(ShapeKind::ScalarString), 1);
	assert_eq!(report.stop.map(|stop| stop.depth), Some(1));
}
