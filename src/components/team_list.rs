use yew::prelude::*;

use crate::components::{use_roster, TeamFormComp};
use crate::model::Team;

/// The team column: create button, the card grid, and the shared
/// create/edit dialog. The only local state is which dialog is open
/// and which team it edits.
#[function_component(TeamListComp)]
pub fn team_list_comp() -> Html {
    let roster = use_roster();
    let open = use_state(|| false);
    let edit_team = use_state(|| None::<Team>);

    let on_create = {
        let open = open.clone();
        let edit_team = edit_team.clone();
        Callback::from(move |_: MouseEvent| {
            edit_team.set(None);
            open.set(true);
        })
    };

    let on_close = {
        let open = open.clone();
        Callback::from(move |_: ()| open.set(false))
    };

    let cards = if roster.teams.is_empty() {
        html! { <p class="roster-session-team-list__empty">{"No teams created yet."}</p> }
    } else {
        html! {
            {for roster.teams.iter().map(|team| {
                let on_edit = {
                    let open = open.clone();
                    let edit_team = edit_team.clone();
                    let team = team.clone();
                    Callback::from(move |_: MouseEvent| {
                        edit_team.set(Some(team.clone()));
                        open.set(true);
                    })
                };
                let on_delete = {
                    let roster = roster.clone();
                    let name = team.name.clone();
                    Callback::from(move |_: MouseEvent| {
                        if let Err(err) = roster.repository.delete(&name) {
                            log::error!("failed to delete team {name}: {err}");
                        }
                        roster.refresh.emit(());
                    })
                };
                html! {
                    <div class="roster-session-team" key={team.name.clone()}>
                        <div class="roster-session-team__details">
                            <h4 class="roster-session-team__name">{team.name.clone()}</h4>
                            <p class="roster-session-team__subtitle">{"Team entry"}</p>
                        </div>
                        <div class="roster-session-team__actions">
                            <button class="roster-session-team__edit" onclick={on_edit}>
                                {"Edit"}
                            </button>
                            <button class="roster-session-team__delete" onclick={on_delete}>
                                {"Delete"}
                            </button>
                        </div>
                    </div>
                }
            })}
        }
    };

    let dialog = if *open {
        let title = if edit_team.is_some() {
            "Edit Team"
        } else {
            "Create Team"
        };
        let description = if edit_team.is_some() {
            "Update the team details below."
        } else {
            "Create a new team by filling out the form below."
        };
        html! {
            <div class="roster-session-dialog">
                <div class="roster-session-dialog__content">
                    <h3 class="roster-session-dialog__title">{title}</h3>
                    <p class="roster-session-dialog__description">{description}</p>
                    <TeamFormComp team={(*edit_team).clone()} on_close={on_close.clone()} />
                </div>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="roster-session-team-list">
            <button class="roster-session-team-list__create" onclick={on_create}>
                {"Create Team"}
            </button>
            {dialog}
            <div class="roster-session-team-list__grid">
                {cards}
            </div>
        </div>
    }
}
