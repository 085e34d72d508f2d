use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an actor on the stage.
///
/// Ids are reference-like handles: two actors never share one, and an id
/// stays valid as a lookup key even after its actor is gone (lookups then
/// return `None`). `Ord` so that id-keyed maps iterate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Short prefix for log and display output.
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
