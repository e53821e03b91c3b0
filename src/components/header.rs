use yew::prelude::*;

use crate::components::{use_session, LoginComp};

#[function_component(HeaderComp)]
pub fn header_comp() -> Html {
    let session = use_session();
    let login_open = use_state(|| false);

    let open_login = {
        let login_open = login_open.clone();
        Callback::from(move |_: MouseEvent| login_open.set(true))
    };

    let close_login = {
        let login_open = login_open.clone();
        Callback::from(move |_: ()| login_open.set(false))
    };

    let account = match &session.username {
        Some(username) => {
            let logout = session.logout.clone();
            html! {
                <>
                    <span class="roster-session-header__welcome">
                        {format!("Welcome, {username}")}
                    </span>
                    <button
                        class="roster-session-header__button"
                        onclick={move |_| logout.emit(())}
                    >
                        {"Logout"}
                    </button>
                </>
            }
        }
        None => html! {
            <button class="roster-session-header__button" onclick={open_login}>
                {"Login"}
            </button>
        },
    };

    html! {
        <header class="roster-session-header">
            <h1 class="roster-session-header__title">{"Roster Session"}</h1>
            <div class="roster-session-header__account">
                {account}
            </div>
            if *login_open && session.username.is_none() {
                <LoginComp on_close={close_login} />
            }
        </header>
    }
}
