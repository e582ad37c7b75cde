//! HTTP handlers, one module per catalog entity.
//!
//! Filter conventions (applied uniformly, see the route module docs):
//! collection and filter endpoints always answer 200 with a possibly-empty
//! array; 404 is reserved for by-id misses. Path filter values are lowercased
//! and parsed against the closed enum sets; values outside the set yield an
//! empty array rather than an error.

pub mod classes;
pub mod races;
pub mod skills;

use heroes_core::types::DbId;

use crate::error::AppError;

/// Parse an `{id}` path parameter.
///
/// Taken as a raw string rather than a typed extractor so the 400 body can
/// echo the literal offending value.
pub(crate) fn parse_id(raw: &str) -> Result<DbId, AppError> {
    raw.parse::<u64>()
        .ok()
        .and_then(|id| DbId::try_from(id).ok())
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "IDs should be numerical values. Invalid ID received: {raw}"
            ))
        })
}
