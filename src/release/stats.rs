use crate::provider::Release;

use super::format_long_date;

/// Summary figures for a sorted release list.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseStats {
    /// Sum of every asset's download count across every release.
    pub total_downloads: u64,
    pub version_count: usize,
    /// Publish date of the headline release, `None` if it has no timestamp.
    pub latest_update: Option<String>,
}

impl ReleaseStats {
    /// Computes the figures for a list already in presentation order.
    /// Returns `None` for an empty list.
    pub fn from_sorted(releases: &[Release]) -> Option<Self> {
        let latest = releases.first()?;
        Some(Self {
            total_downloads: releases.iter().map(Release::download_count).sum(),
            version_count: releases.len(),
            latest_update: latest.published_at.map(format_long_date),
        })
    }
}
