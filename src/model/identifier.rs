use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Coordinates uniquely naming a package, e.g. `Maven:org.apache.commons:commons-text:1.9`.
///
/// Identifiers order lexicographically by type, namespace, name and version,
/// in that order. They serialize as their coordinate string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier {
    pub r#type: String,
    pub namespace: String,
    pub name: String,
    pub version: String,
}

impl Identifier {
    pub fn new(
        r#type: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            r#type: r#type.into(),
            namespace: namespace.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// An identifier with all components empty.
    pub fn empty() -> Self {
        Self::new("", "", "", "")
    }

    pub fn is_empty(&self) -> bool {
        self.r#type.is_empty()
            && self.namespace.is_empty()
            && self.name.is_empty()
            && self.version.is_empty()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.r#type, self.namespace, self.name, self.version
        )
    }
}

impl FromStr for Identifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [r#type, namespace, name, version] => {
                Ok(Identifier::new(*r#type, *namespace, *name, *version))
            }
            _ => Err(Error::InvalidIdentifier {
                input: s.to_string(),
                reason: "expected exactly four ':'-separated components",
            }),
        }
    }
}

impl TryFrom<String> for Identifier {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.to_string()
    }
}
