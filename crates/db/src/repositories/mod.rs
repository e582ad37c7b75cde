//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods that
//! accept `&PgPool` as the first argument. "Not found" is expressed as
//! `Ok(None)` so callers can tell it apart from query errors.

pub mod class_repo;
pub mod race_repo;
pub mod skill_repo;

pub use class_repo::ClassRepo;
pub use race_repo::RaceRepo;
pub use skill_repo::SkillRepo;
