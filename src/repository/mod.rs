mod session_store;
mod team_repository;

pub use session_store::{SessionStore, USERNAME_KEY};
pub use team_repository::{TeamRepository, TEAMS_KEY};
