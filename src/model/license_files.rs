use serde::{Deserialize, Serialize};

/// File name patterns that identify license files at the root of a source tree.
pub const DEFAULT_LICENSE_FILE_PATTERNS: &[&str] = &[
    "LICENSE*",
    "LICENCE*",
    "COPYING*",
    "COPYRIGHT*",
    "NOTICE*",
    "UNLICENSE*",
    "PATENTS*",
];

/// Case-insensitive glob patterns (`*` wildcard only) for root license files.
///
/// Findings in root license files apply to every project in the tree, so they
/// survive path filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicenseFilePatterns(Vec<String>);

impl LicenseFilePatterns {
    pub fn new(patterns: Vec<String>) -> Self {
        Self(patterns)
    }

    /// A pattern list that matches nothing.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn patterns(&self) -> &[String] {
        &self.0
    }

    /// Returns true if `path` names a file at the tree root whose name matches
    /// one of the patterns.
    pub fn matches_root_file(&self, path: &str) -> bool {
        let path = path.strip_prefix("./").unwrap_or(path);
        if path.contains('/') || path.contains('\\') {
            return false;
        }

        let name = path.to_lowercase();
        self.0
            .iter()
            .any(|pattern| glob_match(&pattern.to_lowercase(), &name))
    }
}

impl Default for LicenseFilePatterns {
    fn default() -> Self {
        Self(
            DEFAULT_LICENSE_FILE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        )
    }
}

/// Simple glob matching (supports * as wildcard).
pub(crate) fn glob_match(pattern: &str, text: &str) -> bool {
    let parts: Vec<&str> = pattern.split('*').collect();

    if parts.len() == 1 {
        return pattern == text;
    }

    let mut remaining = text;

    let first = parts[0];
    if !first.is_empty() {
        if !remaining.starts_with(first) {
            return false;
        }
        remaining = &remaining[first.len()..];
    }

    let last = parts[parts.len() - 1];
    if !last.is_empty() {
        if !remaining.ends_with(last) {
            return false;
        }
        remaining = &remaining[..remaining.len() - last.len()];
    }

    for part in &parts[1..parts.len() - 1] {
        if part.is_empty() {
            continue;
        }
        match remaining.find(part) {
            Some(pos) => remaining = &remaining[pos + part.len()..],
            None => return false,
        }
    }

    true
}
