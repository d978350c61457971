//! `phishcheck rules` – list the heuristic rule table.

use phishcheck_core::scoring::{RULES, SUSPICIOUS_THRESHOLD};
use phishcheck_core::verdict::{HIGH_RISK_SCORE, MEDIUM_RISK_SCORE};

pub fn run_rules() {
    println!("{:<16} {:<6} {}", "RULE", "WEIGHT", "REASON");
    for rule in RULES.iter() {
        println!("{:<16} {:<6} {}", rule.name, rule.weight, rule.reason);
    }
    println!();
    println!(
        "suspicious at score >= {SUSPICIOUS_THRESHOLD}; risk Medium >= {MEDIUM_RISK_SCORE}, High >= {HIGH_RISK_SCORE}"
    );
}
