#![cfg(all(target_arch = "wasm32", feature = "yew"))]

use roster_session::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn browser_store_round_trip() {
    console_error_panic_hook::set_once();
    let store = BrowserStore::new();

    store
        .set("roster-session-test", "value")
        .expect("local storage available");
    assert_eq!(
        store.get("roster-session-test"),
        Some("value".to_string())
    );

    store.remove("roster-session-test");
    assert_eq!(store.get("roster-session-test"), None);
}

#[wasm_bindgen_test]
fn team_repository_over_local_storage() {
    console_error_panic_hook::set_once();
    let store = BrowserStore::new();
    store.remove("teams");
    let repo = TeamRepository::new(store);

    repo.create("Alpha").expect("create succeeds");
    repo.assign_player(7, "Alpha").expect("assign succeeds");

    let teams = repo.list();
    assert_eq!(teams.len(), 1);
    assert!(teams[0].has_player(7));

    repo.delete("Alpha").expect("delete succeeds");
    assert!(repo.list().is_empty());
}
