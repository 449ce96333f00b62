use gavel::{clause, Engine, Gate, Outcome, Rule};
use serde_json::json;

fn main() {
    // Rules are checked in order; the first whose gate holds wins.
    let engine = Engine::new(vec![
        Rule::gated(
            Gate::Or,
            vec![
                clause("user.tier").equals("gold"),
                clause("user.tier").equals("platinum"),
            ],
            Outcome::literal("fast_lane"),
        ),
        Rule::gated(
            Gate::Not,
            vec![clause("user.verified").strict_equals(true)],
            Outcome::literal("manual_review"),
        ),
        Rule::new(
            vec![clause("user.verified").strict_equals(true)],
            Outcome::literal("standard"),
        ),
    ])
    .expect("failed to build engine");

    // Gold tier: the OR gate fires first
    let fact = json!({ "user": { "tier": "gold", "verified": true } });
    match engine.evaluate(&fact) {
        Some(rule) => println!("Gold user: {}", rule.outcome.resolve(&fact)),
        None => println!("Gold user: no match"),
    }

    // Unverified: NOT turns the failed check into a match
    let fact = json!({ "user": { "tier": "basic" } });
    match engine.evaluate(&fact) {
        Some(rule) => println!("Unverified user: {}", rule.outcome.resolve(&fact)),
        None => println!("Unverified user: no match"),
    }

    // Verified basic tier: falls through to the plain AND rule
    let fact = json!({ "user": { "tier": "basic", "verified": true } });
    match engine.evaluate(&fact) {
        Some(rule) => println!("Verified user: {}", rule.outcome.resolve(&fact)),
        None => println!("Verified user: no match"),
    }
}
