use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VcsType {
    Git,
    GitRepo,
    Mercurial,
    Subversion,
    #[serde(rename = "CVS")]
    Cvs,
    #[default]
    #[serde(other)]
    Unknown,
}

impl VcsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VcsType::Git => "Git",
            VcsType::GitRepo => "GitRepo",
            VcsType::Mercurial => "Mercurial",
            VcsType::Subversion => "Subversion",
            VcsType::Cvs => "CVS",
            VcsType::Unknown => "",
        }
    }
}

impl std::fmt::Display for VcsType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Version control coordinates of a checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VcsInfo {
    #[serde(rename = "type", default)]
    pub vcs_type: VcsType,
    pub url: String,
    pub revision: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_revision: Option<String>,
    /// Path inside the repository the checkout is limited to. Empty means the whole repository.
    #[serde(default)]
    pub path: String,
}

impl VcsInfo {
    pub fn new(vcs_type: VcsType, url: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            vcs_type,
            url: url.into(),
            revision: revision.into(),
            resolved_revision: None,
            path: String::new(),
        }
    }

    pub fn with_path(&self, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash {
    pub value: String,
    pub algorithm: String,
}

/// A source archive downloaded from a remote location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoteArtifact {
    pub url: String,
    pub hash: Hash,
}

/// Where the scanned code came from.
///
/// A provenance with [`vcs_info`](Self::vcs_info) describes a VCS checkout,
/// one with only a [`source_artifact`](Self::source_artifact) describes a
/// downloaded archive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_artifact: Option<RemoteArtifact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcs_info: Option<VcsInfo>,
    /// VCS info as originally declared, before any path narrowing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_vcs_info: Option<VcsInfo>,
}

impl Provenance {
    pub fn from_vcs(vcs_info: VcsInfo) -> Self {
        Self {
            vcs_info: Some(vcs_info),
            ..Self::default()
        }
    }

    pub fn from_artifact(artifact: RemoteArtifact) -> Self {
        Self {
            source_artifact: Some(artifact),
            ..Self::default()
        }
    }

    pub fn has_vcs_info(&self) -> bool {
        self.vcs_info.is_some()
    }

    /// Short label for display purposes.
    pub fn kind(&self) -> &'static str {
        if self.vcs_info.is_some() {
            "vcs"
        } else if self.source_artifact.is_some() {
            "artifact"
        } else {
            "unknown"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vcs_info_with_path() {
        let vcs = VcsInfo::new(VcsType::Git, "https://example.com/repo.git", "abc123");
        let narrowed = vcs.with_path("sub/dir");

        assert_eq!(narrowed.path, "sub/dir");
        assert_eq!(narrowed.url, vcs.url);
        assert_eq!(narrowed.revision, vcs.revision);
        assert_eq!(vcs.path, "");
    }

    #[test]
    fn test_provenance_kind() {
        let vcs = Provenance::from_vcs(VcsInfo::new(VcsType::Git, "u", "r"));
        assert!(vcs.has_vcs_info());
        assert_eq!(vcs.kind(), "vcs");

        let artifact = Provenance::from_artifact(RemoteArtifact {
            url: "https://example.com/a.tgz".to_string(),
            hash: Hash {
                value: "deadbeef".to_string(),
                algorithm: "SHA-1".to_string(),
            },
        });
        assert!(!artifact.has_vcs_info());
        assert_eq!(artifact.kind(), "artifact");

        assert_eq!(Provenance::default().kind(), "unknown");
    }

    #[test]
    fn test_vcs_type_deserialize() {
        let vcs: VcsInfo = serde_json::from_str(
            r#"{"type":"CVS","url":"u","revision":"r"}"#,
        )
        .unwrap();
        assert_eq!(vcs.vcs_type, VcsType::Cvs);
        assert_eq!(vcs.path, "");

        let vcs: VcsInfo = serde_json::from_str(
            r#"{"type":"Bazaar","url":"u","revision":"r","path":"x"}"#,
        )
        .unwrap();
        assert_eq!(vcs.vcs_type, VcsType::Unknown);
        assert_eq!(vcs.path, "x");

        let vcs: VcsInfo = serde_json::from_str(r#"{"url":"u","revision":"r"}"#).unwrap();
        assert_eq!(vcs.vcs_type, VcsType::default());
        assert_eq!(vcs.vcs_type, VcsType::Unknown);
    }
}
