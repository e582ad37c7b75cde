//! Entity models for the heroes catalog.
//!
//! Each entity has a `*Row` struct (the flat `FromRow` shape of its table)
//! and a public struct carrying the assembled associations. Repositories
//! load associations one level deep, so nested entities have empty
//! association lists of their own.

pub mod class;
pub mod race;
pub mod skill;

pub use class::Class;
pub use race::Race;
pub use skill::Skill;
