use web_sys::{Event, HtmlSelectElement};
use yew::prelude::*;

use crate::components::use_roster;
use crate::model::{validate_team_choice, Player};

#[derive(Properties, PartialEq, Clone)]
pub struct AssignPlayerProps {
    pub player: Player,
}

/// "Add Player to Team" button plus the team-select dialog behind it.
/// Only rendered for players the membership scan found no team for, so
/// a `TeamNotFound` out of the repository here is a logic error; it is
/// shown inline rather than asserted.
#[function_component(AssignPlayerComp)]
pub fn assign_player_comp(props: &AssignPlayerProps) -> Html {
    let roster = use_roster();
    let open = use_state(|| false);
    let selected = use_state(String::new);
    let error = use_state(|| None::<String>);

    let on_open = {
        let open = open.clone();
        let selected = selected.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            selected.set(String::new());
            error.set(None);
            open.set(true);
        })
    };

    let on_change = {
        let selected = selected.clone();
        move |e: Event| {
            let target = e.target_unchecked_into::<HtmlSelectElement>();
            selected.set(target.value());
        }
    };

    let onsubmit = {
        let open = open.clone();
        let selected = selected.clone();
        let error = error.clone();
        let roster = roster.clone();
        let player_id = props.player.id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = validate_team_choice(&selected) {
                error.set(Some(err.to_string()));
                return;
            }
            match roster.repository.assign_player(player_id, &selected) {
                Ok(()) => {
                    roster.refresh.emit(());
                    open.set(false);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    let options = if roster.teams.is_empty() {
        html! { <option value="" disabled={true}>{"No teams created yet."}</option> }
    } else {
        html! {
            {for roster.teams.iter().map(|team| {
                html! { <option value={team.name.clone()}>{team.name.clone()}</option> }
            })}
        }
    };

    let dialog = if *open {
        let on_cancel = {
            let open = open.clone();
            Callback::from(move |_: MouseEvent| open.set(false))
        };
        html! {
            <div class="roster-session-dialog">
                <div class="roster-session-dialog__content">
                    <h3 class="roster-session-dialog__title">
                        {format!("Add \"{}\" to -", props.player.full_name())}
                    </h3>
                    <form class="roster-session-assign" {onsubmit}>
                        <label class="roster-session-assign__label">
                            {"Select Team"}
                            <select class="roster-session-assign__select" onchange={on_change}>
                                <option value="" selected={selected.is_empty()}>
                                    {"Select a team to add"}
                                </option>
                                {options}
                            </select>
                        </label>
                        if let Some(message) = (*error).clone() {
                            <p class="roster-session-assign__error">{message}</p>
                        }
                        <div class="roster-session-assign__actions">
                            <button type="button" class="roster-session-assign__cancel" onclick={on_cancel}>
                                {"Cancel"}
                            </button>
                            <button type="submit" class="roster-session-assign__submit">
                                {"Submit"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="roster-session-assign-player">
            <button class="roster-session-assign-player__open" onclick={on_open}>
                {"Add Player to Team"}
            </button>
            {dialog}
        </div>
    }
}
