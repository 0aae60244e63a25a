//! Declarative family descriptions.
//!
//! A [`Scenario`] is a TOML document naming the founding couple, their
//! descendants and who has died or been crowned. Building it replays the
//! marriages and births on a fresh [`FamilyTree`].

use std::{
    io,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::{Config, CoupleId, FamilyTree, Gender, Person, PersonId, family};

/// An example scenario, written by `succession init`.
pub const EXAMPLE: &str = r#"[config]
_version = "1"
succession = "absolute"

[founders]
royal = { first = "Sarah", last = "Gibeau", gender = "F" }
consort = { first = "Mr", last = "Gibeau", gender = "M" }

[[founders.children]]
name = "Zeus"
gender = "M"
consort = { first = "Hera", last = "Juno", gender = "F" }

[[founders.children.children]]
name = "Hercules"
gender = "M"

[[founders.children]]
name = "Aphrodite"
gender = "F"
consort = { first = "Apollo", last = "A", gender = "M" }

[[founders.children.children]]
name = "Artemis"
gender = "F"

[[founders.children.children]]
name = "Athena"
gender = "F"

[[founders.children]]
name = "Dionysus"
gender = "M"

[events]
dead = []
"#;

/// Errors raised while loading or building a scenario.
#[derive(Debug, Error)]
pub enum Error {
    /// The scenario file could not be read.
    #[error("failed to read scenario file {path}: {source}")]
    Read {
        /// Path of the scenario file.
        path: PathBuf,
        /// The underlying IO error.
        source: io::Error,
    },

    /// The scenario file is not a valid scenario.
    #[error("failed to parse scenario file {path}: {source}")]
    Parse {
        /// Path of the scenario file.
        path: PathBuf,
        /// The underlying TOML error.
        source: toml::de::Error,
    },

    /// The scenario could not be serialized.
    #[error("failed to serialize scenario: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The scenario file could not be written.
    #[error("failed to write scenario file {path}: {source}")]
    Write {
        /// Path of the scenario file.
        path: PathBuf,
        /// The underlying IO error.
        source: io::Error,
    },

    /// Only married royals can have children.
    #[error("{0} has children but no consort")]
    ChildrenWithoutConsort(String),

    /// No royal of the family goes by this name.
    #[error("no royal named '{0}'")]
    UnknownName(String),

    /// Several royals go by this name.
    #[error("'{name}' is ambiguous: {count} royals share that name")]
    AmbiguousName {
        /// The name that was looked up.
        name: String,
        /// How many royals matched.
        count: usize,
    },

    /// A family operation failed while replaying the scenario.
    #[error(transparent)]
    Family(#[from] family::Error),
}

/// A family, described declaratively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Rules of the realm.
    #[serde(default)]
    pub config: Config,

    /// The founding couple and their descendants.
    pub founders: Founders,

    /// Deaths and the coronation, applied once the family is built.
    #[serde(default)]
    pub events: Events,
}

/// The couple at the root of the family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Founders {
    /// The founding royal, whose gender is preferred under gender-preference
    /// rules.
    pub royal: PersonRecord,

    /// The founding royal's consort.
    pub consort: PersonRecord,

    /// Children of the founders, eldest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Child>,
}

/// A person as written in a scenario file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// First name.
    pub first: String,
    /// Last name.
    pub last: String,
    /// Gender, `M` or `F`.
    pub gender: Gender,
}

impl PersonRecord {
    fn to_person(&self) -> Person {
        Person::new(&self.first, &self.last, self.gender)
    }
}

/// A royal born into the family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    /// First name; the last name is inherited from the parent royal.
    pub name: String,

    /// Gender, `M` or `F`.
    pub gender: Gender,

    /// The person this royal marries, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consort: Option<PersonRecord>,

    /// Children of this royal and their consort, eldest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Self>,
}

/// What happened after the family was born.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Events {
    /// Name of the crowned royal. The founding royal reigns if unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ruler: Option<String>,

    /// Names of royals who have died.
    #[serde(default)]
    pub dead: Vec<String>,
}

impl FromStr for Scenario {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl Scenario {
    /// Loads a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] or [`Error::Parse`] if the file cannot be read
    /// or is not a valid scenario.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse().map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Saves the scenario as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] or [`Error::Write`] if the scenario cannot
    /// be serialized or written.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replays the scenario on a new family tree.
    ///
    /// The founders are crowned first. Deaths are then recorded, and finally
    /// the named ruler, if any, is crowned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChildrenWithoutConsort`] for an unmarried royal with
    /// children, [`Error::UnknownName`] or [`Error::AmbiguousName`] for an
    /// event naming the wrong royal, and [`Error::Family`] if an event is not
    /// allowed (crowning the dead, for instance).
    #[instrument(skip(self), fields(founder = %self.founders.royal.first))]
    pub fn build(&self) -> Result<FamilyTree, Error> {
        let mut tree = FamilyTree::new(self.config);
        let founders = tree.couple(
            self.founders.royal.to_person(),
            self.founders.consort.to_person(),
        );
        tree.start(founders);

        for child in &self.founders.children {
            raise(&mut tree, founders, child)?;
        }

        for name in &self.events.dead {
            let royal = resolve(&tree, name)?;
            tree.kill(royal)?;
        }
        if let Some(name) = &self.events.ruler {
            let royal = resolve(&tree, name)?;
            tree.crown(royal)?;
        }

        debug!(
            nodes = tree.traverse().count(),
            succession = %tree.succession(),
            "scenario built"
        );
        Ok(tree)
    }
}

/// Resolves `name` to the single royal carrying it.
///
/// Names match as in [`FamilyTree::find_by_name`].
///
/// # Errors
///
/// Returns [`Error::UnknownName`] if no royal matches and
/// [`Error::AmbiguousName`] if several do.
pub fn resolve(tree: &FamilyTree, name: &str) -> Result<PersonId, Error> {
    match tree.find_by_name(name).as_slice() {
        [] => Err(Error::UnknownName(name.to_string())),
        [node] => Ok(tree.royal(*node).id()),
        matches => Err(Error::AmbiguousName {
            name: name.to_string(),
            count: matches.len(),
        }),
    }
}

fn raise(tree: &mut FamilyTree, parents: CoupleId, child: &Child) -> Result<(), Error> {
    let node = tree.have_child(parents, &child.name, child.gender)?;

    match &child.consort {
        Some(consort) => {
            let couple = tree.marry(node, consort.to_person())?;
            for grandchild in &child.children {
                raise(tree, couple, grandchild)?;
            }
        }
        None if !child.children.is_empty() => {
            return Err(Error::ChildrenWithoutConsort(child.name.clone()));
        }
        None => {}
    }

    Ok(())
}
