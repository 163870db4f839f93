//! Plain-text reports. Pure formatting over finding records; no decisions are made here.

pub mod classification;
pub mod conclusion;
pub mod identification;
pub mod multiclass;

use markcheck_common::Severity;

/// Horizontal rule used by every report.
pub(crate) fn rule() -> String {
    "─".repeat(70)
}

/// Default width for one-line finding text.
pub(crate) const LINE_WIDTH: usize = 110;

pub fn symbol(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "■",
        Severity::Warning => "▲",
        Severity::Info => "◆",
        Severity::Ok => "✓",
    }
}
