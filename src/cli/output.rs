//! CLI output formatting

use crate::cli::self_test::{CheckResult, SelfTestReport};
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");

/// Format a single check for display
pub fn format_check(check: &CheckResult) -> String {
    if check.passed {
        format!(
            "{} {} → {}",
            CHECK,
            style(&check.name).green(),
            style(&check.actual).dim()
        )
    } else {
        format!(
            "{} {}: expected {}, got {}",
            CROSS,
            style(&check.name).red(),
            style(&check.expected).cyan(),
            style(&check.actual).red()
        )
    }
}

/// Format the closing summary line
pub fn format_summary(report: &SelfTestReport) -> String {
    let total = report.checks.len();
    if report.passed() {
        format!(
            "{} {} checks passed {}",
            INFO,
            style(total).cyan(),
            style("successfully").green()
        )
    } else {
        format!(
            "{} {} of {} checks {}",
            INFO,
            style(report.failures()).red(),
            style(total).cyan(),
            style("failed").red()
        )
    }
}
