use serde::{Deserialize, Serialize};

use super::{Identifier, LicenseFilePatterns, Project, ScanResultContainer};
use crate::error::{Error, Result};

/// All scan result containers produced by one scan run, sorted by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    #[serde(deserialize_with = "deserialize_sorted")]
    scan_results: Vec<ScanResultContainer>,
}

fn deserialize_sorted<'de, D>(deserializer: D) -> Result<Vec<ScanResultContainer>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let mut containers = Vec::<ScanResultContainer>::deserialize(deserializer)?;
    containers.sort_by(|a, b| a.cmp_by_id(b));
    Ok(containers)
}

impl ScanRecord {
    pub fn new(mut scan_results: Vec<ScanResultContainer>) -> Self {
        scan_results.sort_by(|a, b| a.cmp_by_id(b));
        Self { scan_results }
    }

    pub fn scan_results(&self) -> &[ScanResultContainer] {
        &self.scan_results
    }

    /// Adds a container, keeping the record sorted. Containers with an equal
    /// identifier are placed after the existing ones.
    pub fn insert(&mut self, container: ScanResultContainer) {
        let pos = self
            .scan_results
            .partition_point(|existing| existing.cmp_by_id(&container).is_le());
        self.scan_results.insert(pos, container);
    }

    /// Returns every container recorded for the package `id`, in insertion order.
    pub fn containers_for(&self, id: &Identifier) -> &[ScanResultContainer] {
        let start = self.scan_results.partition_point(|c| c.id() < id);
        let end = self.scan_results.partition_point(|c| c.id() <= id);
        &self.scan_results[start..end]
    }

    /// Returns a single container holding the results of all containers
    /// recorded for `id`, or `None` if there are none.
    pub fn results_for(&self, id: &Identifier) -> Option<ScanResultContainer> {
        let containers = self.containers_for(id);
        if containers.is_empty() {
            return None;
        }

        let results = containers
            .iter()
            .flat_map(|c| c.results().iter().cloned())
            .collect();
        Some(ScanResultContainer::new(id.clone(), results))
    }

    /// Returns the results for `project`, narrowed to the project's directory.
    pub fn filter_for_project(&self, project: &Project) -> Result<ScanResultContainer> {
        self.filter_for_project_with(project, &LicenseFilePatterns::default())
    }

    /// Like [`filter_for_project`](Self::filter_for_project), retaining findings
    /// in root files matched by `license_files`.
    pub fn filter_for_project_with(
        &self,
        project: &Project,
        license_files: &LicenseFilePatterns,
    ) -> Result<ScanResultContainer> {
        match self.results_for(&project.id) {
            Some(container) => Ok(container.filter_by_project_with(project, |result, path| {
                result.filter_by_path_with(path, license_files)
            })),
            None => {
                tracing::warn!(project = %project.id, "no scan results recorded for project");
                Err(Error::NoResultsForProject(project.id.clone()))
            }
        }
    }
}
