mod assign_player;
mod header;
mod login;
mod player;
mod player_list;
mod roster_provider;
mod session_provider;
mod team_form;
mod team_list;

pub use assign_player::AssignPlayerComp;
pub use header::HeaderComp;
pub use login::LoginComp;
pub use player::PlayerComp;
pub use player_list::PlayerListComp;
pub use roster_provider::{use_roster, RosterContext, RosterProvider};
pub use session_provider::{use_session, SessionContext, SessionProvider};
pub use team_form::TeamFormComp;
pub use team_list::TeamListComp;
