//! Domain models for royal genealogies.
//!
//! This module contains the generic arena [`Tree`], the [`Person`] record,
//! the royal node model and the [`FamilyTree`] that computes lines of
//! succession.

mod config;
pub use config::{Config, InvalidSuccessionError, Succession};

pub mod family;
pub use family::{Error, FamilyTree};

mod person;
pub use person::{Gender, InvalidGenderError, Person, PersonId};

mod royal;
pub use royal::{CoupleId, NodeDisplay, RoyalNode};

pub mod tree;
pub use tree::{NodeId, Tree};
