use std::sync::Arc;
use std::thread;

use gavel::{clause, Engine, Outcome, Rule};
use serde_json::json;

fn main() {
    let engine = Arc::new(
        Engine::new(vec![Rule::new(
            vec![
                clause("user.age").greater_than_or_equal_to(18),
                clause("user.status").equals("active"),
            ],
            Outcome::literal("allowed"),
        )])
        .expect("failed to build engine"),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let e = Arc::clone(&engine);
            thread::spawn(move || {
                // Threads share the engine and its memo cache
                let fact = json!({
                    "user": { "age": 16 + i, "status": "active" }
                });

                let result = e.evaluate(&fact).map(|rule| rule.outcome.resolve(&fact));
                println!("Thread {i}: {result:?}");
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
