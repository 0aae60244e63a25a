use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The rule used to order children in the line of succession.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Succession {
    /// Children inherit strictly in birth order, regardless of gender.
    #[default]
    Absolute,

    /// Children sharing the founding royal's gender inherit before their
    /// siblings. Each group is ordered by birth.
    GenderPreference,
}

impl Succession {
    /// The name used in configuration files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::GenderPreference => "gender-preference",
        }
    }
}

impl fmt::Display for Succession {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`Succession`] rule.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid succession rule '{0}': expected 'absolute' or 'gender-preference'")]
pub struct InvalidSuccessionError(String);

impl FromStr for Succession {
    type Err = InvalidSuccessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "absolute" => Ok(Self::Absolute),
            "gender-preference" | "gender" => Ok(Self::GenderPreference),
            _ => Err(InvalidSuccessionError(s.to_string())),
        }
    }
}

/// Configuration of a realm.
///
/// Holds the rules a [`FamilyTree`](crate::domain::FamilyTree) applies when
/// computing its line of succession.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// How children are ordered in the line of succession.
    succession: Succession,
}

impl Config {
    /// Creates a configuration using the given succession rule.
    #[must_use]
    pub const fn new(succession: Succession) -> Self {
        Self { succession }
    }

    /// Returns the succession rule.
    #[must_use]
    pub const fn succession(&self) -> Succession {
        self.succession
    }

    /// Sets the succession rule.
    pub const fn set_succession(&mut self, succession: Succession) {
        self.succession = succession;
    }
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        succession: Succession,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 { succession } => Self { succession },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            succession: config.succession,
        }
    }
}
