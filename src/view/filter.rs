//! Archive filtering by keyword.

use std::fmt;
use std::str::FromStr;

use crate::provider::Release;

/// Keywords offered as filter controls, in display order.
pub const FILTER_KEYWORDS: [&str; 3] = ["all", "beta", "alpha"];

/// The active archive filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    /// Case-insensitive substring of the release label, stored lowercased.
    Keyword(String),
}

impl Filter {
    pub fn keyword(keyword: &str) -> Self {
        keyword.parse().unwrap_or_default()
    }

    pub fn matches(&self, release: &Release) -> bool {
        match self {
            Filter::All => true,
            Filter::Keyword(keyword) => release.label().to_lowercase().contains(keyword.as_str()),
        }
    }

    /// The matching releases, in list order.
    pub fn apply<'a>(&self, releases: &'a [Release]) -> Vec<&'a Release> {
        releases.iter().filter(|r| self.matches(r)).collect()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "all"),
            Filter::Keyword(keyword) => write!(f, "{}", keyword),
        }
    }
}

impl FromStr for Filter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keyword = s.trim().to_lowercase();
        if keyword.is_empty() || keyword == "all" {
            Ok(Filter::All)
        } else {
            Ok(Filter::Keyword(keyword))
        }
    }
}

/// The releases shown in the archive: everything after the headline, or the
/// single release when there is only one.
pub fn archive_slice(releases: &[Release]) -> &[Release] {
    if releases.len() > 1 {
        &releases[1..]
    } else {
        releases
    }
}
