use crate::model::Identifier;

/// Errors raised by the scan record model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid identifier '{input}': {reason}")]
    InvalidIdentifier { input: String, reason: &'static str },

    #[error("no scan results found for project '{0}'")]
    NoResultsForProject(Identifier),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
