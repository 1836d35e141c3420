//! Place-name search input with a submit button.

use leptos::*;

/// Free-text place search. Typing only updates the query signal; the fetch
/// fires when the button is clicked.
#[component]
pub fn SearchBar(
    query: ReadSignal<String>,
    set_query: WriteSignal<String>,
    #[prop(into)] on_search: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                type="text"
                class="search-input"
                placeholder="Enter a place name (e.g., Bihar)"
                prop:value=query
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <button class="search-button" on:click=move |_| on_search.call(())>
                "Search"
            </button>
        </div>
    }
}
