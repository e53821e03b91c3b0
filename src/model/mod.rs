mod player;
mod team;
mod validation;

pub use player::Player;
pub use team::{Team, TeamError};
pub use validation::{
    validate_team_choice, validate_team_name, validate_username, ValidationError, TEAM_NAME_MAX,
    USERNAME_MAX,
};
