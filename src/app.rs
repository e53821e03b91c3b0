use roster_session::prelude::*;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <RosterProvider>
                <div class="roster-session-app">
                    <HeaderComp />
                    <div class="roster-session-app__columns">
                        <PlayerListComp />
                        <TeamListComp />
                    </div>
                </div>
            </RosterProvider>
        </SessionProvider>
    }
}
