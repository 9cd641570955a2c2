//! Release titles that carry their own build date, e.g. `Release 3 (4/7/25)`.

use regex::Regex;
use std::sync::LazyLock;

use crate::provider::Release;

use super::format_short_date;

/// A release name split into its display text and an embedded date token.
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    pub name: String,
    pub date: Option<String>,
}

impl Title {
    /// Splits a parenthesized `d/m/yy` or `d/m/yyyy` token out of `raw`.
    ///
    /// The token and the whitespace before it are removed and the rest is
    /// trimmed. Without a token the name is returned untouched.
    pub fn extract(raw: &str) -> Self {
        static RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"\s*\(([0-9]{1,2}/[0-9]{1,2}/(?:[0-9]{4}|[0-9]{2}))\)").unwrap()
        });

        match RE.captures(raw) {
            Some(caps) => {
                let (whole, date) = (&caps[0], caps[1].to_string());
                let name = raw.replacen(whole, "", 1).trim().to_string();
                Title {
                    name,
                    date: Some(date),
                }
            }
            None => Title {
                name: raw.to_string(),
                date: None,
            },
        }
    }

    /// The title shown for a release, with its date resolved: the embedded
    /// token when present, else the publish date, else "Unknown date".
    pub fn of_release(release: &Release) -> (Self, String) {
        let title = Self::extract(&release.title());
        let date = match (&title.date, release.published_at) {
            (Some(date), _) => date.clone(),
            (None, Some(at)) => format_short_date(at),
            (None, None) => "Unknown date".to_string(),
        };
        (title, date)
    }
}
