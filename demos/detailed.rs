use gavel::{clause, Engine, Outcome, Rule};
use serde_json::json;

fn main() {
    let engine = Engine::new(vec![
        Rule::new(
            vec![clause("user.banned").strict_equals(true)],
            Outcome::literal("hard_deny"),
        ),
        Rule::new(
            vec![
                clause("user.age").greater_than_or_equal_to(18),
                clause("user.status").equals("active"),
                clause("request.region").starts_with("us-"),
            ],
            Outcome::literal("can_proceed"),
        ),
    ])
    .expect("failed to build engine");

    let fact = json!({
        "user": { "age": 25, "status": "active", "banned": false },
        "request": { "region": "us-east" }
    });

    let report = engine.evaluate_detailed(&fact);

    println!("{report}");
    println!();
    for entry in report.trace() {
        println!(
            "rule {}: clauses {:?}, satisfied: {}",
            entry.rule(),
            entry.clause_results(),
            entry.satisfied()
        );
    }
    println!("Duration: {:?}", report.duration());
}
