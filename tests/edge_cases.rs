use gavel::{clause, Clause, Engine, Gate, Operator, Outcome, Rule};
use serde_json::{json, Value};

fn single(rule: Rule) -> Engine {
    Engine::new(vec![rule]).unwrap()
}

#[test]
fn single_rule_engine() {
    let engine = single(Rule::new(
        vec![clause("x").equals(1)],
        Outcome::literal("hit"),
    ));
    assert!(engine.evaluate(&json!({"x": 1})).is_some());
    assert!(engine.evaluate(&json!({"x": 2})).is_none());
}

#[test]
fn falsy_values_are_present() {
    // Zero, empty string, and false all satisfy the existence check.
    let engine = Engine::new(vec![
        Rule::new(vec![clause("n").equals(0)], Outcome::literal("n")),
        Rule::new(vec![clause("s").equals("")], Outcome::literal("s")),
        Rule::new(vec![clause("b").equals(false)], Outcome::literal("b")),
    ])
    .unwrap();

    assert!(engine.evaluate(&json!({"n": 0})).is_some());
    assert!(engine.evaluate(&json!({"s": ""})).is_some());
    assert!(engine.evaluate(&json!({"b": false})).is_some());
}

#[test]
fn null_leaf_never_matches() {
    // A null leaf reads as absent, even against a null comparison value.
    let engine = single(Rule::new(
        vec![clause("x").equals(Value::Null)],
        Outcome::literal(0),
    ));
    assert!(engine.evaluate(&json!({"x": null})).is_none());
    assert!(engine.evaluate(&json!({})).is_none());
}

#[test]
fn non_finite_numbers_read_as_absent() {
    // JSON has no NaN or infinity; serde_json folds them to null.
    let engine = single(Rule::new(
        vec![clause("x").greater_than(0)],
        Outcome::literal(0),
    ));
    assert!(engine.evaluate(&json!({"x": f64::NAN})).is_none());
    assert!(engine.evaluate(&json!({"x": f64::INFINITY})).is_none());
}

#[test]
fn deeply_nested_path() {
    let engine = single(Rule::new(
        vec![clause("a.b.c.d.e").equals("deep")],
        Outcome::literal(0),
    ));
    let fact = json!({"a": {"b": {"c": {"d": {"e": "deep"}}}}});
    assert!(engine.evaluate(&fact).is_some());
    assert!(engine.evaluate(&json!({"a": {"b": {}}})).is_none());
}

#[test]
fn array_index_out_of_bounds_misses() {
    let engine = single(Rule::new(
        vec![clause("items[3]").equals("d")],
        Outcome::literal(0),
    ));
    assert!(engine
        .evaluate(&json!({"items": ["a", "b", "c", "d"]}))
        .is_some());
    assert!(engine.evaluate(&json!({"items": ["a"]})).is_none());
}

#[test]
fn bare_digit_index_reads_into_arrays() {
    let engine = single(Rule::new(
        vec![clause("lines1.sku").equals("B-02")],
        Outcome::literal(0),
    ));
    let fact = json!({"lines": [{"sku": "A-01"}, {"sku": "B-02"}]});
    assert!(engine.evaluate(&fact).is_some());
}

#[test]
fn type_mismatch_is_a_miss_not_an_error() {
    let engine = Engine::new(vec![
        Rule::new(vec![clause("x").greater_than("ten")], Outcome::literal(0)),
        Rule::new(vec![clause("x").contains("e")], Outcome::literal(1)),
        Rule::new(vec![clause("x").starts_with("t")], Outcome::literal(2)),
    ])
    .unwrap();
    assert!(engine.evaluate(&json!({"x": 10})).is_none());
    assert!(engine.evaluate(&json!({"x": {"nested": true}})).is_none());
}

#[test]
fn numeric_equality_ignores_representation() {
    let engine = Engine::new(vec![
        Rule::new(vec![clause("x").equals(1)], Outcome::literal("loose")),
        Rule::new(vec![clause("y").strict_equals(1)], Outcome::literal("strict")),
    ])
    .unwrap();
    assert!(engine.evaluate(&json!({"x": 1.0})).is_some());
    assert!(engine.evaluate(&json!({"y": 1.0})).is_some());
}

#[test]
fn string_number_coercion_is_loose_only() {
    let engine = Engine::new(vec![Rule::new(
        vec![clause("x").equals("5")],
        Outcome::literal(0),
    )])
    .unwrap();
    assert!(engine.evaluate(&json!({"x": 5})).is_some());

    let strict = single(Rule::new(
        vec![clause("x").strict_equals("5")],
        Outcome::literal(0),
    ));
    assert!(strict.evaluate(&json!({"x": 5})).is_none());
    assert!(strict.evaluate(&json!({"x": "5"})).is_some());
}

#[test]
fn booleans_never_coerce() {
    let engine = Engine::new(vec![
        Rule::new(vec![clause("x").equals(1)], Outcome::literal(0)),
        Rule::new(vec![clause("x").equals("true")], Outcome::literal(1)),
    ])
    .unwrap();
    assert!(engine.evaluate(&json!({"x": true})).is_none());
}

#[test]
fn string_ordering_is_lexicographic() {
    let engine = single(Rule::new(
        vec![clause("v").less_than("9")],
        Outcome::literal(0),
    ));
    // Both strings: "10" sorts before "9" lexicographically.
    assert!(engine.evaluate(&json!({"v": "10"})).is_some());

    // Mixed string and number: compared numerically instead.
    let mixed = single(Rule::new(
        vec![clause("v").greater_than(9)],
        Outcome::literal(0),
    ));
    assert!(mixed.evaluate(&json!({"v": "10"})).is_some());
}

#[test]
fn value_lists_must_all_hold() {
    let engine = single(Rule::new(
        vec![Clause::all("age", Operator::GreaterThan, [18, 21])],
        Outcome::literal(0),
    ));
    assert!(engine.evaluate(&json!({"age": 25})).is_some());
    assert!(engine.evaluate(&json!({"age": 20})).is_none());
}

#[test]
fn array_comparison_values_are_wrapped() {
    // To compare against an array literal, wrap it one level.
    let engine = single(Rule::new(
        vec![Clause::all("pair", Operator::StrictEquals, [json!([1, 2])])],
        Outcome::literal(0),
    ));
    assert!(engine.evaluate(&json!({"pair": [1, 2]})).is_some());
    assert!(engine.evaluate(&json!({"pair": [2, 1]})).is_none());
}

#[test]
fn contains_checks_elements_strictly() {
    let engine = single(Rule::new(
        vec![clause("xs").contains(5)],
        Outcome::literal(0),
    ));
    assert!(engine.evaluate(&json!({"xs": [4, 5, 6]})).is_some());
    assert!(engine.evaluate(&json!({"xs": ["5"]})).is_none());

    let nested = single(Rule::new(
        vec![clause("xs").contains(json!([1, 2]))],
        Outcome::literal(0),
    ));
    assert!(nested.evaluate(&json!({"xs": [[1, 2], [3, 4]]})).is_some());
}

#[test]
fn binary_gates_read_only_two_results() {
    // XOR is decided by the first two clauses; the third never votes.
    let engine = single(Rule::gated(
        Gate::Xor,
        vec![
            clause("a").equals(1),
            clause("b").equals(1),
            clause("c").equals(1),
        ],
        Outcome::literal(0),
    ));
    assert!(engine.evaluate(&json!({"a": 1, "b": 0, "c": 1})).is_some());
    assert!(engine.evaluate(&json!({"a": 1, "b": 1, "c": 0})).is_none());

    // The trace still records every clause result, including the third.
    let report = engine.evaluate_detailed(&json!({"a": 1, "b": 0, "c": 1}));
    assert_eq!(report.trace()[0].clause_results(), &[true, false, true]);
}

#[test]
fn not_gate_reads_only_one_result() {
    let engine = single(Rule::gated(
        Gate::Not,
        vec![clause("a").equals(1), clause("b").equals(1)],
        Outcome::literal(0),
    ));
    // Second clause is true but irrelevant.
    assert!(engine.evaluate(&json!({"a": 0, "b": 1})).is_some());
    assert!(engine.evaluate(&json!({"a": 1, "b": 0})).is_none());
}

#[test]
fn not_gate_turns_missing_data_into_a_match() {
    let engine = single(Rule::gated(
        Gate::Not,
        vec![clause("banned").equals(true)],
        Outcome::literal(0),
    ));
    assert!(engine.evaluate(&json!({})).is_some());
    assert!(engine.evaluate(&json!({"banned": true})).is_none());
}

#[test]
fn duplicate_rules_first_wins() {
    let rule = Rule::new(vec![clause("x").equals(1)], Outcome::literal(0));
    let engine = Engine::new(vec![rule.clone(), rule]).unwrap();
    let matched = engine.evaluate(&json!({"x": 1})).unwrap();
    assert!(std::ptr::eq(matched, &engine.rules()[0]));
}
