use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_infinite_scroll;

use crate::api::{FeedCursor, HttpPlayerGateway, PlayerGateway};
use crate::components::PlayerComp;
use crate::config::Config;
use crate::model::Player;

#[derive(Clone, PartialEq)]
enum FeedStatus {
    Loading,
    Ready,
    Failed,
}

/// The scrolling roster. Pages are pulled on demand as the list nears
/// its bottom; a failed fetch leaves a persistent message and stops
/// the feed (no retry).
#[function_component(PlayerListComp)]
pub fn player_list_comp() -> Html {
    let gateway = use_memo((), |_| HttpPlayerGateway::new(&Config::new()));
    let players = use_state(Vec::<Player>::new);
    let cursor = use_state(|| FeedCursor::new(Config::new().page_size));
    let status = use_state(|| FeedStatus::Loading);
    let fetching = use_state(|| false);

    let load_next = {
        let gateway = gateway.clone();
        let players = players.clone();
        let cursor = cursor.clone();
        let status = status.clone();
        let fetching = fetching.clone();
        Callback::from(move |_: ()| {
            if *fetching || !cursor.has_more() || *status == FeedStatus::Failed {
                return;
            }
            fetching.set(true);

            let gateway = gateway.clone();
            let players = players.clone();
            let cursor = cursor.clone();
            let status = status.clone();
            let fetching = fetching.clone();
            spawn_local(async move {
                let page = cursor.next_page();
                match gateway.fetch_page(page).await {
                    Ok(fetched) => {
                        let mut advanced = (*cursor).clone();
                        advanced.record(fetched.data.len());
                        cursor.set(advanced);

                        let mut all = (*players).clone();
                        all.extend(fetched.data);
                        players.set(all);
                        status.set(FeedStatus::Ready);
                    }
                    Err(err) => {
                        log::error!("player feed page {page} failed: {err}");
                        status.set(FeedStatus::Failed);
                    }
                }
                fetching.set(false);
            });
        })
    };

    {
        let load_next = load_next.clone();
        use_effect_with((), move |_| {
            load_next.emit(());
            || ()
        });
    }

    let scroll_node = use_node_ref();
    {
        let load_next = load_next.clone();
        use_infinite_scroll(scroll_node.clone(), move || load_next.emit(()));
    }

    html! {
        <div class="roster-session-player-list" ref={scroll_node}>
            if players.is_empty() && *status == FeedStatus::Loading {
                <p class="roster-session-player-list__status">{"Loading players..."}</p>
            }
            {for players.iter().map(|player| {
                let player = player.clone();
                let key = player.id;
                html! { <PlayerComp {key} {player} /> }
            })}
            if *status == FeedStatus::Failed {
                <p class="roster-session-player-list__error">{"Failed to load players"}</p>
            }
            if *fetching && !players.is_empty() {
                <p class="roster-session-player-list__status">{"Loading more..."}</p>
            }
        </div>
    }
}
