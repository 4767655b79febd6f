use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Identifier, VcsInfo};

/// A project discovered in a source tree, described by a definition file such
/// as `build.gradle` or `package.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Identifier,
    /// Path of the definition file, relative to the root of the VCS checkout.
    pub definition_file_path: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub declared_licenses: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcs: Option<VcsInfo>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub homepage_url: String,
}

impl Project {
    pub fn new(id: Identifier, definition_file_path: impl Into<String>) -> Self {
        Self {
            id,
            definition_file_path: definition_file_path.into(),
            declared_licenses: BTreeSet::new(),
            vcs: None,
            homepage_url: String::new(),
        }
    }

    /// Directory containing the definition file, or `None` if the definition
    /// file lives at the root.
    pub fn definition_dir(&self) -> Option<String> {
        parent_path(&self.definition_file_path)
    }
}

/// Returns the parent of a `/`-separated path.
///
/// Backslashes are treated as separators and trailing separators are ignored,
/// so the result does not depend on the host platform. A bare file name has no
/// parent; a file directly below `/` has the parent `/`.
pub fn parent_path(path: &str) -> Option<String> {
    let normalized = normalize_path(path);
    let trimmed = normalized.trim_end_matches('/');

    let (parent, _) = trimmed.rsplit_once('/')?;
    let parent = parent.trim_end_matches('/');

    if parent.is_empty() {
        Some("/".to_string())
    } else {
        Some(parent.to_string())
    }
}

/// Converts backslash separators to `/`.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_path_nested() {
        assert_eq!(parent_path("sub/dir/build.gradle").as_deref(), Some("sub/dir"));
        assert_eq!(parent_path("a/b").as_deref(), Some("a"));
    }

    #[test]
    fn test_parent_path_bare_file() {
        assert_eq!(parent_path("build.gradle"), None);
        assert_eq!(parent_path(""), None);
        assert_eq!(parent_path("/"), None);
    }

    #[test]
    fn test_parent_path_separators() {
        assert_eq!(parent_path("sub\\dir\\pom.xml").as_deref(), Some("sub/dir"));
        assert_eq!(parent_path("sub/dir/").as_deref(), Some("sub"));
        assert_eq!(parent_path("sub//pom.xml").as_deref(), Some("sub"));
        assert_eq!(parent_path("/pom.xml").as_deref(), Some("/"));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("sub\\dir\\a.c"), "sub/dir/a.c");
        assert_eq!(normalize_path("sub/dir/a.c"), "sub/dir/a.c");
    }

    #[test]
    fn test_definition_dir() {
        let id = Identifier::new("Gradle", "org.example", "app", "1.0");

        let nested = Project::new(id.clone(), "app/build.gradle");
        assert_eq!(nested.definition_dir().as_deref(), Some("app"));

        let root = Project::new(id, "build.gradle");
        assert_eq!(root.definition_dir(), None);
    }
}
