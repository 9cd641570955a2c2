//! Maturity classification and presentation order of releases.
//!
//! The order is an explicit table keyed by the classification of both sides.
//! A pair either resolves outright (stable above beta above alpha) or falls
//! through to a tie-break within its tier.

use std::cmp::Ordering;
use std::fmt;

use crate::provider::Release;

use super::version::Version;

/// Maturity inferred from a release label. Variants are declared in
/// presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    Stable,
    Beta,
    Alpha,
}

impl Classification {
    /// `alpha` is checked before `beta`, so a label containing both is alpha.
    pub fn of(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("alpha") {
            Classification::Alpha
        } else if label.contains("beta") {
            Classification::Beta
        } else {
            Classification::Stable
        }
    }

    pub fn of_release(release: &Release) -> Self {
        Self::of(release.label())
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Stable => write!(f, "stable"),
            Classification::Beta => write!(f, "beta"),
            Classification::Alpha => write!(f, "alpha"),
        }
    }
}

/// How two releases of the same tier are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Newest publish time first.
    Published,
    /// Highest parsed version first; releases without a version follow,
    /// newest first.
    ///
    /// A versioned release always leads an unversioned one, even a newer
    /// one. Deciding that pair by publish time instead would make the order
    /// intransitive: `2.0` (day 1) would precede `1.0` (day 10), which would
    /// precede `nightly` (day 5), which would precede `2.0`.
    VersionThenPublished,
}

/// Outcome of looking up a classification pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The pair is decided by tier alone.
    Ranked(Ordering),
    /// Same tier; defer to a tie-break.
    Within(TieBreak),
}

use Classification::{Alpha, Beta, Stable};

/// Every classification pair and how it resolves, from the point of view of
/// the left-hand release.
pub const ORDERING_RULES: [(Classification, Classification, Rule); 9] = [
    (Stable, Stable, Rule::Within(TieBreak::Published)),
    (Beta, Beta, Rule::Within(TieBreak::VersionThenPublished)),
    (Alpha, Alpha, Rule::Within(TieBreak::VersionThenPublished)),
    (Stable, Beta, Rule::Ranked(Ordering::Less)),
    (Stable, Alpha, Rule::Ranked(Ordering::Less)),
    (Beta, Alpha, Rule::Ranked(Ordering::Less)),
    (Beta, Stable, Rule::Ranked(Ordering::Greater)),
    (Alpha, Stable, Rule::Ranked(Ordering::Greater)),
    (Alpha, Beta, Rule::Ranked(Ordering::Greater)),
];

/// Looks up the rule for a classification pair.
pub fn rule_for(a: Classification, b: Classification) -> Rule {
    ORDERING_RULES
        .iter()
        .find(|(left, right, _)| *left == a && *right == b)
        .map(|(_, _, rule)| *rule)
        .unwrap_or(Rule::Within(TieBreak::Published))
}

/// A release with its derived sort keys computed once.
struct SortKey {
    class: Classification,
    version: Option<Version>,
    published: Option<chrono::DateTime<chrono::Utc>>,
}

impl SortKey {
    fn of(release: &Release) -> Self {
        Self {
            class: Classification::of_release(release),
            version: Version::parse(release.label()),
            published: release.published_at,
        }
    }
}

/// Newest first; a missing timestamp sorts as the oldest.
fn newest_first(a: &SortKey, b: &SortKey) -> Ordering {
    b.published.cmp(&a.published)
}

fn apply_tie_break(tie_break: TieBreak, a: &SortKey, b: &SortKey) -> Ordering {
    match tie_break {
        TieBreak::Published => newest_first(a, b),
        TieBreak::VersionThenPublished => match (&a.version, &b.version) {
            (Some(va), Some(vb)) => vb.cmp(va),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => newest_first(a, b),
        },
    }
}

fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
    match rule_for(a.class, b.class) {
        Rule::Ranked(ord) => ord,
        Rule::Within(tie_break) => apply_tie_break(tie_break, a, b),
    }
}

/// Presentation order of two releases.
pub fn compare_releases(a: &Release, b: &Release) -> Ordering {
    compare_keys(&SortKey::of(a), &SortKey::of(b))
}

/// Sorts releases into presentation order: stable newest first, then beta,
/// then alpha, each by descending version. Index 0 is the headline release.
///
/// The sort is stable, so releases that compare equal keep the order the API
/// returned them in.
pub fn sort_releases(releases: &mut Vec<Release>) {
    let mut keyed: Vec<(SortKey, Release)> = releases
        .drain(..)
        .map(|r| (SortKey::of(&r), r))
        .collect();
    keyed.sort_by(|(ka, _), (kb, _)| compare_keys(ka, kb));
    releases.extend(keyed.into_iter().map(|(_, r)| r));
}
