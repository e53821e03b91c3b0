use yew::prelude::*;

use crate::components::{use_roster, AssignPlayerComp};
use crate::model::Player;

#[derive(Properties, PartialEq, Clone)]
pub struct PlayerProps {
    pub player: Player,
}

/// One roster row: the player's name, their current team if the
/// membership scan finds one, and the matching action.
#[function_component(PlayerComp)]
pub fn player_comp(props: &PlayerProps) -> Html {
    let roster = use_roster();
    let team = roster
        .teams
        .iter()
        .find(|team| team.has_player(props.player.id))
        .cloned();

    let action = match &team {
        Some(_) => {
            let roster = roster.clone();
            let player_id = props.player.id;
            let on_remove = Callback::from(move |_: MouseEvent| {
                if let Err(err) = roster.repository.unassign_player(player_id) {
                    log::error!("failed to unassign player {player_id}: {err}");
                }
                roster.refresh.emit(());
            });
            html! {
                <button class="roster-session-player__remove" onclick={on_remove}>
                    {"Remove Player from Team"}
                </button>
            }
        }
        None => html! { <AssignPlayerComp player={props.player.clone()} /> },
    };

    html! {
        <div class="roster-session-player">
            <div class="roster-session-player__details">
                <p class="roster-session-player__name">{props.player.full_name()}</p>
                if let Some(team) = &team {
                    <p class="roster-session-player__team">
                        {"Team: "}
                        <span class="roster-session-player__team-name">{team.name.clone()}</span>
                    </p>
                }
            </div>
            {action}
        </div>
    }
}
