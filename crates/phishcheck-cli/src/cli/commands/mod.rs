//! CLI command handlers, one per file.

mod check;
mod rules;
mod serve;

pub use check::run_check;
pub use rules::run_rules;
pub use serve::run_serve;
