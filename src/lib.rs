//! Royal Lines of Succession
//!
//! A royal family is a tree of royals and the consorts they marry. Given a
//! ruler, the [`FamilyTree`] lists who inherits the crown, under either
//! absolute or gender-preference primogeniture.

pub mod domain;
pub use domain::{
    Config, CoupleId, Error, FamilyTree, Gender, NodeId, Person, PersonId, Succession, Tree,
};

pub mod scenario;
pub use scenario::Scenario;
