//! Unique identifiers and the capability that mints them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a solution or a component.
///
/// Ids read from disk are kept exactly as written; only freshly minted ids
/// are guaranteed to be lowercase UUID text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniqueId(String);

impl UniqueId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Uuid> for UniqueId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.hyphenated().to_string())
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of fresh identifiers.
pub trait IdSource {
    fn next_id(&mut self) -> UniqueId;
}

/// Random UUID v4 identifiers.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> UniqueId {
        Uuid::new_v4().into()
    }
}

impl<F> IdSource for F
where
    F: FnMut() -> UniqueId,
{
    fn next_id(&mut self) -> UniqueId {
        self()
    }
}
