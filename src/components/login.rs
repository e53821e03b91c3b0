use yew::prelude::*;

use crate::components::use_session;
use crate::model::validate_username;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginProps {
    pub on_close: Callback<()>,
}

/// Login dialog. The username is taken verbatim; the only checks are
/// the form-layer length bounds.
#[function_component(LoginComp)]
pub fn login_comp(props: &LoginProps) -> Html {
    let session = use_session();
    let username = use_state(String::new);
    let error = use_state(|| None::<String>);

    let oninput = {
        let username = username.clone();
        move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        }
    };

    let onsubmit = {
        let username = username.clone();
        let error = error.clone();
        let login = session.login.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_username(&username) {
                Ok(()) => {
                    login.emit((*username).clone());
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

    html! {
        <div class="roster-session-dialog">
            <div class="roster-session-dialog__content">
                <h3 class="roster-session-dialog__title">{"Login"}</h3>
                <p class="roster-session-dialog__description">{"Login into your account."}</p>
                <form class="roster-session-login" {onsubmit}>
                    <label class="roster-session-login__label">
                        {"Username"}
                        <input
                            class="roster-session-login__input"
                            type="text"
                            placeholder="Enter username"
                            value={(*username).clone()}
                            {oninput}
                        />
                    </label>
                    if let Some(message) = (*error).clone() {
                        <p class="roster-session-login__error">{message}</p>
                    }
                    <div class="roster-session-login__actions">
                        <button type="button" class="roster-session-login__cancel" onclick={oncancel}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="roster-session-login__submit">
                            {"Login"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
