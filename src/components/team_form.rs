use yew::prelude::*;

use crate::components::use_roster;
use crate::model::{validate_team_name, Team};

#[derive(Properties, PartialEq, Clone)]
pub struct TeamFormProps {
    /// Team being renamed; `None` creates a new one.
    #[prop_or_default]
    pub team: Option<Team>,
    pub on_close: Callback<()>,
}

/// Create/rename form. Failures stay inline under the field and leave
/// the stored collection untouched.
#[function_component(TeamFormComp)]
pub fn team_form_comp(props: &TeamFormProps) -> Html {
    let roster = use_roster();
    let name = use_state(|| {
        props
            .team
            .as_ref()
            .map(|team| team.name.clone())
            .unwrap_or_default()
    });
    let error = use_state(|| None::<String>);

    let oninput = {
        let name = name.clone();
        move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        }
    };

    let onsubmit = {
        let name = name.clone();
        let error = error.clone();
        let roster = roster.clone();
        let edited = props.team.as_ref().map(|team| team.name.clone());
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = validate_team_name(&name) {
                error.set(Some(err.to_string()));
                return;
            }
            let outcome = match &edited {
                Some(old_name) => roster.repository.rename(old_name, &name),
                None => roster.repository.create(&name),
            };
            match outcome {
                Ok(()) => {
                    roster.refresh.emit(());
                    on_close.emit(());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    let oncancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let submit_label = if props.team.is_some() {
        "Update"
    } else {
        "Submit"
    };

    html! {
        <form class="roster-session-team-form" {onsubmit}>
            <label class="roster-session-team-form__label">
                {"Team Name"}
                <input
                    class="roster-session-team-form__input"
                    type="text"
                    placeholder="Enter team name"
                    value={(*name).clone()}
                    {oninput}
                />
            </label>
            <p class="roster-session-team-form__hint">{"This is your team name."}</p>
            if let Some(message) = (*error).clone() {
                <p class="roster-session-team-form__error">{message}</p>
            }
            <div class="roster-session-team-form__actions">
                <button type="button" class="roster-session-team-form__cancel" onclick={oncancel}>
                    {"Cancel"}
                </button>
                <button type="submit" class="roster-session-team-form__submit">
                    {submit_label}
                </button>
            </div>
        </form>
    }
}
