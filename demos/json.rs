use gavel::Engine;
use serde_json::json;

fn main() {
    let engine = Engine::from_file("demos/rules.json").expect("failed to load rules");

    println!("{engine}");

    let fact = json!({
        "user": { "age": 25, "status": "active", "banned": false }
    });

    match engine.evaluate(&fact) {
        Some(rule) => println!("Outcome: {}", rule.outcome.resolve(&fact)),
        None => println!("No rule matched."),
    }
}
