use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::StorageError;

/// A locally persisted grouping of players. The name is both identity
/// and display value; membership is the `player_ids` list.
///
/// On the wire the member list is called `playerIds` and may be absent,
/// which reads as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(rename = "playerIds", default)]
    pub player_ids: Vec<u64>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Team {
            name: name.into(),
            player_ids: Vec::new(),
        }
    }

    pub fn has_player(&self, player_id: u64) -> bool {
        self.player_ids.contains(&player_id)
    }

    /// Case-insensitive name match. Names are unique across the
    /// collection under this comparison.
    pub fn name_matches(&self, other: &str) -> bool {
        self.name.to_lowercase() == other.to_lowercase()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    #[error("Team name must be unique")]
    DuplicateName { name: String },
    #[error("no team named {name}")]
    TeamNotFound { name: String },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_list_uses_wire_name() {
        let team = Team {
            name: "Alpha".to_string(),
            player_ids: vec![1, 2],
        };

        let raw = serde_json::to_string(&team).expect("team serializes");

        assert_eq!(raw, r#"{"name":"Alpha","playerIds":[1,2]}"#);
    }

    #[test]
    fn missing_member_list_reads_as_empty() {
        let team: Team = serde_json::from_str(r#"{"name":"Alpha"}"#).expect("valid team JSON");

        assert_eq!(team.name, "Alpha");
        assert!(team.player_ids.is_empty());
    }

    #[test]
    fn name_match_ignores_case() {
        let team = Team::new("Alpha");

        assert!(team.name_matches("ALPHA"));
        assert!(team.name_matches("alpha"));
        assert!(!team.name_matches("Beta"));
    }
}
