use yew::prelude::*;

use crate::model::Team;
use crate::repository::TeamRepository;
use crate::storage::BrowserStore;

/// Shared roster state: the team collection plus the repository that
/// mutating components write through. After a mutation, `refresh`
/// re-reads storage so every view sees the change.
#[derive(Clone)]
pub struct RosterContext {
    pub teams: Vec<Team>,
    pub repository: TeamRepository<BrowserStore>,
    pub refresh: Callback<()>,
}

// Re-render consumers on collection changes; the repository and the
// refresh callback are stable for the provider's lifetime.
impl PartialEq for RosterContext {
    fn eq(&self, other: &Self) -> bool {
        self.teams == other.teams
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct RosterProviderProps {
    pub children: Children,
}

#[function_component(RosterProvider)]
pub fn roster_provider(props: &RosterProviderProps) -> Html {
    let repository = (*use_memo((), |_| TeamRepository::new(BrowserStore::new()))).clone();
    let teams = use_state(Vec::new);

    {
        let teams = teams.clone();
        let repository = repository.clone();
        use_effect_with((), move |_| {
            teams.set(repository.list());
            || ()
        });
    }

    let refresh = {
        let teams = teams.clone();
        let repository = repository.clone();
        Callback::from(move |_| teams.set(repository.list()))
    };

    let context = RosterContext {
        teams: (*teams).clone(),
        repository,
        refresh,
    };

    html! {
        <ContextProvider<RosterContext> {context}>
            {props.children.clone()}
        </ContextProvider<RosterContext>>
    }
}

#[hook]
pub fn use_roster() -> RosterContext {
    use_context::<RosterContext>().expect("use_roster must be used within a RosterProvider")
}
