//! Core data types for scan results and the projects they belong to.
//!
//! - [`Identifier`] - Coordinates of a package
//! - [`Provenance`] - Where scanned code came from (VCS checkout or artifact)
//! - [`Project`] - A project and its definition file
//! - [`ScanResult`] - The findings of one scanner run
//! - [`ScanResultContainer`] - All results for one package
//! - [`ScanRecord`] - All containers of a scan run
//!
//! # Example
//!
//! ```
//! use scanrecord::{Identifier, Project, ScanResultContainer, ScanResult};
//!
//! let id: Identifier = "Gradle:org.example:app:1.0".parse().unwrap();
//! let container: ScanResultContainer<ScanResult> = ScanResultContainer::new(id.clone(), vec![]);
//!
//! let project = Project::new(id, "app/build.gradle");
//! let filtered = container.filter_by_project(&project);
//!
//! assert_eq!(filtered.results().len(), 0);
//! ```

mod container;
mod identifier;
mod license_files;
mod project;
mod provenance;
mod record;
mod scan_result;

pub use container::*;
pub use identifier::*;
pub use license_files::*;
pub use project::*;
pub use provenance::*;
pub use record::*;
pub use scan_result::*;
