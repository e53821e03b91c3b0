use serde::{Deserialize, Serialize};

/// A player as delivered by the remote feed. Ids are assigned by the
/// source; nothing on this side ever creates or mutates a player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
