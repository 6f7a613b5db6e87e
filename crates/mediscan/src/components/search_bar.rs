use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use mediscan_core::search::{SearchDebounce, DEBOUNCE_QUIET_MS};

use crate::time::sleep_ms;
use crate::Route;

/// Debounced search input.
///
/// Keystrokes echo immediately into the field; a commit fires after the
/// quiet interval, on Enter, on the search button, or on clear. Committed
/// values go to `on_search` when supplied, otherwise the bar navigates to
/// the listing route with the query encoded as the `search` parameter
/// (empty query navigates without it).
///
/// The debounce timer lives in a component-scoped task, so unmounting the
/// bar cancels any pending commit; stale tickets expire to nothing either
/// way.
#[component]
pub fn SearchBar(
    placeholder: String,
    #[props(default)] initial_value: String,
    on_search: Option<EventHandler<String>>,
) -> Element {
    let seed = initial_value.clone();
    let mut state = use_signal(move || SearchDebounce::new(seed));

    // Navigation can replace the query externally (e.g. back button); adopt
    // it without triggering a fresh commit.
    use_effect(use_reactive!(|(initial_value,)| {
        state.write().sync_external(&initial_value);
    }));

    let navigator = use_navigator();
    let commit = move |query: String| {
        debug!(%query, "search committed");
        match on_search {
            Some(handler) => handler.call(query),
            None => {
                if query.is_empty() {
                    navigator.push(Route::DrugList { search: None });
                } else {
                    navigator.push(Route::DrugList {
                        search: Some(query),
                    });
                }
            }
        }
    };

    let handle_input = move |evt: FormEvent| {
        let ticket = state.write().set_query(evt.value());
        spawn(async move {
            sleep_ms(DEBOUNCE_QUIET_MS).await;
            // Let go of the write guard before commit runs arbitrary handlers
            let committed = state.write().expire(ticket);
            if let Some(query) = committed {
                commit(query);
            }
        });
    };

    let submit = move |_| {
        let query = state.write().submit();
        commit(query);
    };

    rsx! {
        div { class: "ms-search",
            div { class: "ms-search-input-row",
                input {
                    class: "ms-search-input",
                    r#type: "text",
                    placeholder: "{placeholder}",
                    value: "{state.read().raw()}",
                    oninput: handle_input,
                    onkeypress: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            let query = state.write().submit();
                            commit(query);
                        }
                    },
                }
                if !state.read().raw().is_empty() {
                    button {
                        class: "ms-search-clear",
                        onclick: move |_| {
                            let query = state.write().clear();
                            commit(query);
                        },
                        "✕"
                    }
                }
            }
            button { class: "ms-btn ms-btn--primary ms-search-submit", onclick: submit, "Search" }
        }
    }
}
