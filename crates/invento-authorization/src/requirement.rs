//! What a view demands of the current actor.

use invento_core::{Capability, InventoError, WILDCARD};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single access requirement. Composite requirements are not supported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Requirement {
    /// Visible to any authenticated actor. Written as [`WILDCARD`].
    Always,
    /// Requires exactly this capability.
    Capability(Capability),
}

impl Requirement {
    /// Parse `*` or a capability name.
    pub fn parse(raw: &str) -> Result<Self, InventoError> {
        if raw == WILDCARD {
            Ok(Self::Always)
        } else {
            Ok(Self::Capability(Capability::parse(raw)?))
        }
    }

    /// The capability, unless this is [`Requirement::Always`].
    pub fn capability(&self) -> Option<&Capability> {
        match self {
            Self::Always => None,
            Self::Capability(capability) => Some(capability),
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => f.write_str(WILDCARD),
            Self::Capability(capability) => write!(f, "{capability}"),
        }
    }
}

impl FromStr for Requirement {
    type Err = InventoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Requirement {
    type Error = InventoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Requirement> for String {
    fn from(value: Requirement) -> Self {
        value.to_string()
    }
}

impl From<Capability> for Requirement {
    fn from(value: Capability) -> Self {
        Self::Capability(value)
    }
}
