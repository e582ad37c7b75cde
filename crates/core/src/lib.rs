//! Domain types shared across the heroes catalog service.
//!
//! Pure data: identifiers, the attribute value object, and the closed
//! string-valued enumerations. Persistence and HTTP concerns live in
//! `heroes-db` and `heroes-api`.

pub mod attributes;
pub mod enums;
pub mod error;
pub mod types;
