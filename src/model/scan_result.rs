use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{normalize_path, LicenseFilePatterns, Provenance};

/// A region of a file, with paths relative to the root of the scanned tree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TextLocation {
    pub path: String,
    pub start_line: u32,
    pub end_line: u32,
}

impl TextLocation {
    pub fn new(path: impl Into<String>, start_line: u32, end_line: u32) -> Self {
        Self {
            path: path.into(),
            start_line,
            end_line,
        }
    }

    /// Returns true if the location lies below the directory `dir`. Backslashes
    /// in either path count as separators.
    pub fn is_under(&self, dir: &str) -> bool {
        let dir = normalize_path(dir);
        let path = normalize_path(&self.path);
        path.strip_prefix(dir.trim_end_matches('/'))
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LicenseFinding {
    pub license: String,
    pub location: TextLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CopyrightFinding {
    pub statement: String,
    pub location: TextLocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Hint,
    Warning,
    Error,
}

/// A problem reported by a scanner while producing a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerDetails {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub configuration: String,
}

impl ScannerDetails {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            configuration: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub file_count: usize,
    #[serde(default)]
    pub package_verification_code: String,
    #[serde(default)]
    pub license_findings: BTreeSet<LicenseFinding>,
    #[serde(default)]
    pub copyright_findings: BTreeSet<CopyrightFinding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<Issue>,
}

impl ScanSummary {
    /// An empty summary for a scan that started and ended at `time`.
    pub fn empty(time: DateTime<Utc>) -> Self {
        Self {
            start_time: time,
            end_time: time,
            file_count: 0,
            package_verification_code: String::new(),
            license_findings: BTreeSet::new(),
            copyright_findings: BTreeSet::new(),
            issues: Vec::new(),
        }
    }
}

/// The findings of one scanner run on one provenance of a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub provenance: Provenance,
    pub scanner: ScannerDetails,
    pub summary: ScanSummary,
}

/// Results that can be narrowed down to the findings below a directory.
pub trait FilterByPath: Sized {
    fn provenance(&self) -> &Provenance;

    /// Returns a copy that only keeps findings located below `path`.
    fn filter_by_path(&self, path: &str) -> Self;
}

impl ScanResult {
    pub fn new(provenance: Provenance, scanner: ScannerDetails, summary: ScanSummary) -> Self {
        Self {
            provenance,
            scanner,
            summary,
        }
    }

    /// Like [`FilterByPath::filter_by_path`], but with an explicit set of root
    /// license file patterns whose findings are always retained.
    pub fn filter_by_path_with(&self, path: &str, license_files: &LicenseFilePatterns) -> Self {
        if path.trim().is_empty() {
            return self.clone();
        }

        let keep = |location: &TextLocation| {
            location.is_under(path) || license_files.matches_root_file(&location.path)
        };

        let license_findings: BTreeSet<_> = self
            .summary
            .license_findings
            .iter()
            .filter(|finding| keep(&finding.location))
            .cloned()
            .collect();

        let copyright_findings: BTreeSet<_> = self
            .summary
            .copyright_findings
            .iter()
            .filter(|finding| keep(&finding.location))
            .cloned()
            .collect();

        tracing::trace!(
            scanner = %self.scanner.name,
            path,
            license_findings = license_findings.len(),
            copyright_findings = copyright_findings.len(),
            "filtered scan result by path"
        );

        let provenance = Provenance {
            vcs_info: self.provenance.vcs_info.as_ref().map(|vcs| vcs.with_path(path)),
            original_vcs_info: self
                .provenance
                .original_vcs_info
                .clone()
                .or_else(|| self.provenance.vcs_info.clone()),
            ..self.provenance.clone()
        };

        let summary = ScanSummary {
            license_findings,
            copyright_findings,
            ..self.summary.clone()
        };

        Self::new(provenance, self.scanner.clone(), summary)
    }
}

impl FilterByPath for ScanResult {
    fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    fn filter_by_path(&self, path: &str) -> Self {
        self.filter_by_path_with(path, &LicenseFilePatterns::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{VcsInfo, VcsType};
    use chrono::TimeZone;

    fn license(license: &str, path: &str) -> LicenseFinding {
        LicenseFinding {
            license: license.to_string(),
            location: TextLocation::new(path, 1, 2),
        }
    }

    fn copyright(statement: &str, path: &str) -> CopyrightFinding {
        CopyrightFinding {
            statement: statement.to_string(),
            location: TextLocation::new(path, 1, 1),
        }
    }

    fn sample_result() -> ScanResult {
        let time = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let mut summary = ScanSummary::empty(time);
        summary.file_count = 5;
        summary.license_findings = [
            license("MIT", "LICENSE"),
            license("Apache-2.0", "sub/dir/src/Main.java"),
            license("GPL-2.0-only", "other/File.c"),
            license("BSD-3-Clause", "sub/dirty/x.c"),
        ]
        .into_iter()
        .collect();
        summary.copyright_findings = [
            copyright("Copyright (c) Example", "sub/dir/README"),
            copyright("Copyright (c) Other", "other/README"),
        ]
        .into_iter()
        .collect();

        ScanResult::new(
            Provenance::from_vcs(VcsInfo::new(
                VcsType::Git,
                "https://example.com/repo.git",
                "abc123",
            )),
            ScannerDetails::new("ScanCode", "3.2.0"),
            summary,
        )
    }

    #[test]
    fn test_text_location_is_under() {
        let location = TextLocation::new("sub/dir/file.txt", 1, 1);
        assert!(location.is_under("sub"));
        assert!(location.is_under("sub/dir"));
        assert!(location.is_under("sub/dir/"));
        assert!(!location.is_under("sub/di"));
        assert!(!location.is_under("sub/dir/file.txt"));

        let windows = TextLocation::new("sub\\dir\\file.txt", 1, 1);
        assert!(windows.is_under("sub/dir"));
        assert!(windows.is_under("sub\\dir"));
        assert!(!windows.is_under("sub/di"));
    }

    #[test]
    fn test_filter_by_path_with_backslash_finding_paths() {
        let mut result = sample_result();
        result.summary.license_findings = [
            license("MIT", "sub\\dir\\src\\a.c"),
            license("GPL-2.0-only", "other\\b.c"),
        ]
        .into_iter()
        .collect();

        let filtered = result.filter_by_path("sub/dir");

        let licenses: Vec<_> = filtered
            .summary
            .license_findings
            .iter()
            .map(|f| f.license.as_str())
            .collect();
        assert_eq!(licenses, vec!["MIT"]);
    }

    #[test]
    fn test_filter_by_path_keeps_findings_below_path() {
        let filtered = sample_result().filter_by_path("sub/dir");

        let licenses: Vec<_> = filtered
            .summary
            .license_findings
            .iter()
            .map(|f| f.license.as_str())
            .collect();
        assert_eq!(licenses, vec!["Apache-2.0", "MIT"]);

        let statements: Vec<_> = filtered
            .summary
            .copyright_findings
            .iter()
            .map(|f| f.statement.as_str())
            .collect();
        assert_eq!(statements, vec!["Copyright (c) Example"]);
    }

    #[test]
    fn test_filter_by_path_without_root_license_files() {
        let filtered = sample_result().filter_by_path_with("sub/dir", &LicenseFilePatterns::none());

        assert_eq!(filtered.summary.license_findings.len(), 1);
        assert_eq!(
            filtered.summary.license_findings.iter().next().unwrap().license,
            "Apache-2.0"
        );
    }

    #[test]
    fn test_filter_by_path_updates_vcs_path() {
        let result = sample_result();
        let filtered = result.filter_by_path("sub/dir");

        let vcs = filtered.provenance.vcs_info.as_ref().unwrap();
        assert_eq!(vcs.path, "sub/dir");
        assert_eq!(vcs.url, "https://example.com/repo.git");
        assert_eq!(
            filtered.provenance.original_vcs_info,
            result.provenance.vcs_info
        );
        assert_eq!(filtered.scanner, result.scanner);
        assert_eq!(filtered.summary.file_count, result.summary.file_count);
        // The receiver is left untouched.
        assert_eq!(result.provenance.vcs_info.as_ref().unwrap().path, "");
        assert_eq!(result.summary.license_findings.len(), 4);
    }

    #[test]
    fn test_filter_by_blank_path_is_identity() {
        let result = sample_result();
        assert_eq!(result.filter_by_path(""), result);
        assert_eq!(result.filter_by_path("  "), result);
    }

    #[test]
    fn test_serde_uses_uppercase_severity() {
        let issue = Issue {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            source: "ScanCode".to_string(),
            message: "timeout".to_string(),
            severity: Severity::Warning,
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["severity"], "WARNING");
    }
}
