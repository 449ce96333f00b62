use gavel::{clause, Engine, Outcome, Rule};
use serde_json::json;

fn main() {
    // Define rules
    let engine = Engine::new(vec![Rule::new(
        vec![
            clause("user.age").greater_than_or_equal_to(18),
            clause("user.status").equals("active"),
        ],
        Outcome::literal("can_proceed"),
    )])
    .expect("failed to build engine");

    println!("{engine}");

    // Evaluate against a fact
    let fact = json!({
        "user": { "age": 25, "status": "active" }
    });

    match engine.evaluate(&fact) {
        Some(rule) => println!("Result: {}", rule.outcome.resolve(&fact)),
        None => println!("No rule matched."),
    }
}
