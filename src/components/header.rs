//! Page header bar.

use leptos::*;

/// Top header with the dashboard title.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header-bar">
            <h1 class="header-title">"Wildlife Detection Dashboard"</h1>
        </header>
    }
}
