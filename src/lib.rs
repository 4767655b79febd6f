pub mod config;
pub mod error;
pub mod model;
pub mod output;

pub use config::Config;
pub use error::Error;
pub use model::{
    FilterByPath, Identifier, Project, Provenance, ScanRecord, ScanResult, ScanResultContainer,
    VcsInfo,
};
