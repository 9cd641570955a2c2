//! Release ordering, classification and summary figures.
//!
//! - `version` - numeric version extraction and comparison
//! - `classify` - alpha/beta/stable labels and presentation order
//! - `title` - date tokens embedded in release names
//! - `stats` - download totals and the latest-update date

mod classify;
mod stats;
mod title;
mod version;

use chrono::{DateTime, Local, Utc};

pub use classify::{
    Classification, ORDERING_RULES, Rule, TieBreak, compare_releases, rule_for, sort_releases,
};
pub use stats::ReleaseStats;
pub use title::Title;
pub use version::{Version, compare_versions};

/// Numeric local date, e.g. `7/4/2025`.
pub fn format_short_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%-m/%-d/%Y").to_string()
}

/// Abbreviated month, day and year, e.g. `Jul 4, 2025`.
pub fn format_long_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%b %-d, %Y").to_string()
}
