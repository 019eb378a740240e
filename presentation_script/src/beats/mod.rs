//! Beat definitions for a presentation.

mod beat;

pub use beat::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for beats in a presentation script.
///
/// Serializes as the bare UUID string, which is also the key used in the
/// image map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeatId(pub Uuid);

impl BeatId {
    /// Create a new random beat ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a beat ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for BeatId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The speaker label bound to every beat.
pub const PRESENTER: &str = "Presenter";
