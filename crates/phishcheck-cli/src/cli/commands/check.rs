//! `phishcheck check` – score one URL from the command line.

use anyhow::Result;
use phishcheck_core::scoring::heuristic_score;
use phishcheck_core::verdict::Verdict;

pub fn run_check(url: &str, json: bool) -> Result<()> {
    let verdict = Verdict::from_result(&heuristic_score(url));
    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
        return Ok(());
    }
    println!("{}", verdict.message);
    println!("score: {}  risk: {}", verdict.score, verdict.risk_level);
    if let Some(domain) = &verdict.domain {
        println!("domain: {domain}");
    }
    for reason in &verdict.reasons {
        println!("  - {reason}");
    }
    Ok(())
}
