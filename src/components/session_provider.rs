use yew::prelude::*;

use crate::repository::SessionStore;
use crate::storage::BrowserStore;

#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub username: Option<String>,
    pub login: Callback<String>,
    pub logout: Callback<()>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Holds the session username and rehydrates it from storage on mount.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let store = use_memo((), |_| SessionStore::new(BrowserStore::new()));
    let username = use_state(|| None::<String>);

    {
        let username = username.clone();
        let store = store.clone();
        use_effect_with((), move |_| {
            if let Some(stored) = store.restore() {
                username.set(Some(stored));
            }
            || ()
        });
    }

    let login = {
        let username = username.clone();
        let store = store.clone();
        Callback::from(move |name: String| {
            if let Err(err) = store.login(&name) {
                log::error!("failed to persist username: {err}");
            }
            username.set(Some(name));
        })
    };

    let logout = {
        let username = username.clone();
        let store = store.clone();
        Callback::from(move |_| {
            store.logout();
            username.set(None);
        })
    };

    let context = SessionContext {
        username: (*username).clone(),
        login,
        logout,
    };

    html! {
        <ContextProvider<SessionContext> {context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("use_session must be used within a SessionProvider")
}
