//! Best-effort numeric versions pulled out of free-text release names.

use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

/// A dotted numeric version such as `2.10.3`.
///
/// Ordering pads the shorter side with zeros, so `1.2 == 1.2.0`.
#[derive(Debug, Clone)]
pub struct Version(Vec<u64>);

impl Version {
    /// Extracts the first run of ASCII `digits(.digits)*` from `name`.
    ///
    /// Anything after the run (`-beta`, ` Final`) is ignored. Returns `None`
    /// when the name contains no digits at all.
    pub fn parse(name: &str) -> Option<Self> {
        static RE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)*").unwrap());

        let run = RE.find(name)?;
        let parts = run
            .as_str()
            .split('.')
            .map(|part| part.parse::<u64>().unwrap_or(u64::MAX))
            .collect();
        Some(Version(parts))
    }

    pub fn parts(&self) -> &[u64] {
        &self.0
    }
}

impl From<Vec<u64>> for Version {
    fn from(parts: Vec<u64>) -> Self {
        Version(parts)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(u64::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_versions(&self.0, &other.0)
    }
}

/// Component-wise comparison; a missing component counts as 0.
pub fn compare_versions(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let part_a = a.get(i).copied().unwrap_or(0);
            let part_b = b.get(i).copied().unwrap_or(0);
            part_a.cmp(&part_b)
        })
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}
