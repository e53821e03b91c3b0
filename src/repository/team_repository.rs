use crate::model::{Team, TeamError};
use crate::storage::{KeyValueStore, StorageError};

pub const TEAMS_KEY: &str = "teams";

/// CRUD over the persisted team collection. Every operation reads the
/// full collection fresh and writes the full collection back; there is
/// no locking, so interleaved operations are last-writer-wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamRepository<S> {
    storage: S,
}

impl<S> TeamRepository<S>
where
    S: KeyValueStore,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All stored teams, in insertion order. Absent or unreadable
    /// storage reads as empty.
    pub fn list(&self) -> Vec<Team> {
        match self.storage.get(TEAMS_KEY) {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(teams) => teams,
                Err(err) => {
                    log::warn!("stored teams are unreadable, starting empty: {err}");
                    Vec::new()
                }
            },
        }
    }

    pub fn create(&self, name: &str) -> Result<(), TeamError> {
        let mut teams = self.list();
        if teams.iter().any(|team| team.name_matches(name)) {
            return Err(TeamError::DuplicateName {
                name: name.to_string(),
            });
        }
        teams.push(Team::new(name));
        self.save(&teams)
    }

    /// Renaming to the same name (ignoring case) succeeds without
    /// touching storage.
    pub fn rename(&self, old_name: &str, new_name: &str) -> Result<(), TeamError> {
        if old_name.to_lowercase() == new_name.to_lowercase() {
            return Ok(());
        }
        let mut teams = self.list();
        if teams.iter().any(|team| team.name_matches(new_name)) {
            return Err(TeamError::DuplicateName {
                name: new_name.to_string(),
            });
        }
        match teams.iter_mut().find(|team| team.name == old_name) {
            Some(team) => team.name = new_name.to_string(),
            None => {
                return Err(TeamError::TeamNotFound {
                    name: old_name.to_string(),
                })
            }
        }
        self.save(&teams)
    }

    /// Deleting a missing team succeeds; the end state is the same
    /// either way.
    pub fn delete(&self, name: &str) -> Result<(), TeamError> {
        let mut teams = self.list();
        teams.retain(|team| team.name != name);
        self.save(&teams)
    }

    /// Appends the player to the named team's roster. Membership
    /// elsewhere is the caller's concern: unassign first to keep a
    /// player on at most one team.
    pub fn assign_player(&self, player_id: u64, team_name: &str) -> Result<(), TeamError> {
        let mut teams = self.list();
        let team = teams
            .iter_mut()
            .find(|team| team.name == team_name)
            .ok_or_else(|| TeamError::TeamNotFound {
                name: team_name.to_string(),
            })?;
        team.player_ids.push(player_id);
        self.save(&teams)
    }

    /// Strips the player from every team's roster, whatever state the
    /// collection is in.
    pub fn unassign_player(&self, player_id: u64) -> Result<(), TeamError> {
        let mut teams = self.list();
        for team in &mut teams {
            team.player_ids.retain(|id| *id != player_id);
        }
        self.save(&teams)
    }

    /// The membership scan: the first team whose roster contains the
    /// player.
    pub fn find_team_for_player(&self, player_id: u64) -> Option<Team> {
        self.list()
            .into_iter()
            .find(|team| team.has_player(player_id))
    }

    fn save(&self, teams: &[Team]) -> Result<(), TeamError> {
        let raw = serde_json::to_string(teams)
            .map_err(|err| StorageError::Unavailable(err.to_string()))?;
        self.storage.set(TEAMS_KEY, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn repository() -> TeamRepository<MemoryStore> {
        TeamRepository::new(MemoryStore::new())
    }

    #[test]
    fn create_rejects_duplicate_name_ignoring_case() {
        let repo = repository();

        repo.create("Alpha").expect("first create succeeds");
        let err = repo.create("ALPHA").expect_err("duplicate rejected");

        assert_eq!(
            err,
            TeamError::DuplicateName {
                name: "ALPHA".to_string()
            }
        );
        assert_eq!(repo.list().len(), 1);
    }

    #[test]
    fn delete_is_idempotent() {
        let repo = repository();
        repo.create("Alpha").expect("create succeeds");
        repo.create("Beta").expect("create succeeds");

        repo.delete("Alpha").expect("first delete succeeds");
        let after_first = repo.list();
        repo.delete("Alpha").expect("second delete succeeds");

        assert_eq!(repo.list(), after_first);
        assert_eq!(repo.list().len(), 1);
    }

    #[test]
    fn delete_matches_exact_name_only() {
        let repo = repository();
        repo.create("Alpha").expect("create succeeds");

        repo.delete("ALPHA").expect("delete succeeds");

        assert_eq!(repo.list().len(), 1);
    }

    #[test]
    fn rename_preserves_members() {
        let repo = repository();
        repo.create("Alpha").expect("create succeeds");
        repo.assign_player(7, "Alpha").expect("assign succeeds");

        repo.rename("Alpha", "Omega").expect("rename succeeds");

        let teams = repo.list();
        assert_eq!(teams[0].name, "Omega");
        assert_eq!(teams[0].player_ids, vec![7]);
    }

    #[test]
    fn rename_to_same_name_is_a_noop() {
        let repo = repository();
        repo.create("Alpha").expect("create succeeds");

        repo.rename("Alpha", "ALPHA").expect("same-name rename ok");

        assert_eq!(repo.list()[0].name, "Alpha");
    }

    #[test]
    fn rename_rejects_existing_name() {
        let repo = repository();
        repo.create("Alpha").expect("create succeeds");
        repo.create("Beta").expect("create succeeds");

        let err = repo.rename("Alpha", "beta").expect_err("collision rejected");

        assert_eq!(
            err,
            TeamError::DuplicateName {
                name: "beta".to_string()
            }
        );
    }

    #[test]
    fn rename_missing_team_fails() {
        let repo = repository();

        let err = repo.rename("Alpha", "Omega").expect_err("missing team");

        assert_eq!(
            err,
            TeamError::TeamNotFound {
                name: "Alpha".to_string()
            }
        );
    }

    #[test]
    fn assign_to_missing_team_fails() {
        let repo = repository();

        let err = repo.assign_player(7, "Alpha").expect_err("missing team");

        assert_eq!(
            err,
            TeamError::TeamNotFound {
                name: "Alpha".to_string()
            }
        );
    }

    // Pins the current single-membership gap: assigning twice without
    // an unassign puts the player on both rosters. Callers unassign
    // first; see DESIGN.md before changing this.
    #[test]
    fn double_assign_leaves_player_on_both_teams() {
        let repo = repository();
        repo.create("Alpha").expect("create succeeds");
        repo.create("Beta").expect("create succeeds");

        repo.assign_player(7, "Alpha").expect("assign succeeds");
        repo.assign_player(7, "Beta").expect("assign succeeds");

        let teams = repo.list();
        assert!(teams[0].has_player(7));
        assert!(teams[1].has_player(7));
    }

    #[test]
    fn unassign_strips_player_everywhere() {
        let repo = repository();
        repo.create("Alpha").expect("create succeeds");
        repo.create("Beta").expect("create succeeds");
        repo.assign_player(7, "Alpha").expect("assign succeeds");
        repo.assign_player(7, "Beta").expect("assign succeeds");
        repo.assign_player(8, "Beta").expect("assign succeeds");

        repo.unassign_player(7).expect("unassign succeeds");

        let teams = repo.list();
        assert!(teams.iter().all(|team| !team.has_player(7)));
        assert!(teams[1].has_player(8));
    }

    #[test]
    fn find_team_for_player_scans_rosters() {
        let repo = repository();
        repo.create("Alpha").expect("create succeeds");
        repo.create("Beta").expect("create succeeds");
        repo.assign_player(7, "Beta").expect("assign succeeds");

        let team = repo.find_team_for_player(7).expect("player has a team");
        assert_eq!(team.name, "Beta");
        assert_eq!(repo.find_team_for_player(8), None);
    }

    #[test]
    fn unreadable_storage_reads_as_empty() {
        let store = MemoryStore::new();
        store.set(TEAMS_KEY, "not json").expect("set succeeds");
        let repo = TeamRepository::new(store);

        assert!(repo.list().is_empty());
    }

    #[test]
    fn absent_storage_reads_as_empty() {
        assert!(repository().list().is_empty());
    }

    #[test]
    fn collection_round_trips_in_order() {
        let repo = repository();
        for name in ["Alpha", "Beta", "Gamma"] {
            repo.create(name).expect("create succeeds");
        }
        repo.assign_player(1, "Beta").expect("assign succeeds");

        let names: Vec<String> = repo.list().into_iter().map(|team| team.name).collect();

        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(repo.list(), repo.list());
    }
}
