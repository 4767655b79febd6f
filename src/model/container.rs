use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{FilterByPath, Identifier, Project, ScanResult};

/// A container for the scan results of the package identified by [`id`](Self::id).
///
/// The results may come from several scanners and cover different provenances
/// of the package. Their order is insertion order and duplicates are kept.
/// Nothing ties the identifiers of the results' packages to `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResultContainer<R = ScanResult> {
    pub id: Identifier,
    pub results: Vec<R>,
}

impl<R> ScanResultContainer<R> {
    pub fn new(id: Identifier, results: Vec<R>) -> Self {
        Self { id, results }
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    pub fn results(&self) -> &[R] {
        &self.results
    }

    pub fn into_results(self) -> Vec<R> {
        self.results
    }

    /// Orders containers by their identifier only.
    pub fn cmp_by_id(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl<R: FilterByPath + Clone> ScanResultContainer<R> {
    /// Returns a container whose results only hold findings from the directory
    /// of the `project`'s definition file.
    ///
    /// If the definition file has no parent directory the receiver is returned
    /// unchanged, keeping its own identifier. Otherwise the returned container
    /// carries the project's identifier and every result that stems from a VCS
    /// checkout is narrowed with [`FilterByPath::filter_by_path`].
    pub fn filter_by_project(&self, project: &Project) -> Self {
        self.filter_by_project_with(project, R::filter_by_path)
    }

    /// Like [`filter_by_project`](Self::filter_by_project), with a custom
    /// per-result path filter.
    pub fn filter_by_project_with<F>(&self, project: &Project, filter: F) -> Self
    where
        F: Fn(&R, &str) -> R,
    {
        let Some(parent) = project.definition_dir() else {
            tracing::debug!(
                project = %project.id,
                path = %project.definition_file_path,
                "definition file is at the root, keeping all findings"
            );
            return self.clone();
        };

        tracing::debug!(
            package = %self.id,
            project = %project.id,
            path = %parent,
            "filtering scan results by project directory"
        );

        let results = self
            .results
            .iter()
            .map(|result| {
                if result.provenance().has_vcs_info() {
                    filter(result, &parent)
                } else {
                    result.clone()
                }
            })
            .collect();

        Self::new(project.id.clone(), results)
    }
}
