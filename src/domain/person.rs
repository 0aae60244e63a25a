use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Globally unique, perpetually stable identity of a [`Person`].
///
/// Two people with the same names, gender and status are still different
/// individuals; only their identifiers tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(Uuid);

impl PersonId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn uuid(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gender of a person, as recorded in the genealogy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male (`M`).
    #[serde(rename = "M")]
    Male,
    /// Female (`F`).
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// The single-letter code used in display forms.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Male => 'M',
            Self::Female => 'F',
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned when parsing a [`Gender`] from anything but `M` or `F`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid gender '{0}': expected 'M' or 'F'")]
pub struct InvalidGenderError(String);

impl FromStr for Gender {
    type Err = InvalidGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" | "m" => Ok(Self::Male),
            "F" | "f" => Ok(Self::Female),
            other => Err(InvalidGenderError(other.to_string())),
        }
    }
}

/// A biographical record.
///
/// A person is not [`Clone`]: each value is a distinct individual with its
/// own [`PersonId`]. Once added to a
/// [`FamilyTree`](crate::domain::FamilyTree) the tree owns the record and
/// callers refer to it by identifier.
#[derive(Debug)]
pub struct Person {
    id: PersonId,
    first: String,
    last: String,
    gender: Gender,
    alive: bool,
}

impl Person {
    /// Creates a living person with a fresh identity.
    #[must_use]
    pub fn new(first: impl Into<String>, last: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: PersonId::new(),
            first: first.into(),
            last: last.into(),
            gender,
            alive: true,
        }
    }

    /// The person's identity.
    #[must_use]
    pub const fn id(&self) -> PersonId {
        self.id
    }

    /// First name.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Last name.
    #[must_use]
    pub fn last(&self) -> &str {
        &self.last
    }

    /// Gender, which decides precedence under gender-preference rules.
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Whether the person is still alive.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Records the person's death. Dying twice changes nothing.
    pub(crate) const fn die(&mut self) {
        self.alive = false;
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}
