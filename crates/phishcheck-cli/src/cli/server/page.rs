//! HTML rendering for the single-page front end.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use phishcheck_core::history::HistoryEntry;
use phishcheck_core::verdict::{Label, RiskLevel, Verdict};

/// Everything the page shows for one response.
#[derive(Debug)]
pub struct PageView<'a> {
    /// Input echoed back into the form.
    pub url: &'a str,
    pub verdict: Option<&'a Verdict>,
    pub history: &'a [HistoryEntry],
}

fn label_class(label: Label) -> &'static str {
    match label {
        Label::Safe => "safe",
        Label::Suspicious => "suspicious",
    }
}

fn risk_class(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "risk-low",
        RiskLevel::Medium => "risk-medium",
        RiskLevel::High => "risk-high",
    }
}

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
form { display: flex; gap: .5rem; }
input[type=text] { flex: 1; padding: .4rem; }
.result { margin: 1rem 0; padding: 1rem; border-radius: .4rem; }
.safe { background: #e6f4ea; }
.suspicious { background: #fde8e8; }
.risk-low { color: #1e7b34; }
.risk-medium { color: #b06000; }
.risk-high { color: #b3261e; }
table { border-collapse: collapse; width: 100%; }
td, th { border-bottom: 1px solid #ddd; padding: .3rem; text-align: left; }
"#;

pub fn render(view: &PageView<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Phishing URL Checker" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                h1 { "Phishing URL Checker" }
                form method="post" action="/" {
                    input type="text" name="url" placeholder="Enter a URL" value=(view.url) autofocus;
                    button type="submit" { "Check" }
                }
                @if let Some(verdict) = view.verdict {
                    (verdict_section(verdict))
                }
                (history_section(view.history))
            }
        }
    }
}

fn verdict_section(verdict: &Verdict) -> Markup {
    html! {
        section class={ "result " (label_class(verdict.label)) } {
            h2 { (verdict.label) }
            p { (verdict.message) }
            p {
                "Score: " strong { (verdict.score) }
                " · Risk: " strong class=(risk_class(verdict.risk_level)) { (verdict.risk_level) }
            }
            ul {
                @for reason in &verdict.reasons {
                    li { (reason) }
                }
            }
        }
    }
}

fn history_section(history: &[HistoryEntry]) -> Markup {
    html! {
        h2 { "Recent checks" }
        @if history.is_empty() {
            p { "No checks yet." }
        } @else {
            table {
                tr {
                    th { "Time" }
                    th { "URL" }
                    th { "Domain" }
                    th { "Label" }
                    th { "Score" }
                    th { "Risk" }
                }
                @for entry in history {
                    tr {
                        td { (entry.timestamp) }
                        td { (entry.url) }
                        td { (entry.domain.as_deref().unwrap_or("-")) }
                        td class=(label_class(entry.label)) { (entry.label) }
                        td { (entry.score) }
                        td class=(risk_class(entry.risk_level)) { (entry.risk_level) }
                    }
                }
            }
        }
    }
}
