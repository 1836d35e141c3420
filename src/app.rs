//! Root Leptos application component with routing.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::header::Header;
use crate::pages::dashboard::Dashboard;

/// Server-side application state, provided as Leptos context for server functions.
#[derive(Clone, Debug)]
#[cfg(feature = "ssr")]
pub struct AppState {
    /// Base URL of the external detection service.
    pub spotting_url: String,
    pub leptos_options: leptos::LeptosOptions,
}

/// Dummy state for the client – never actually constructed on WASM, but the
/// type must exist so server functions can reference it in their signatures.
#[derive(Clone, Debug)]
#[cfg(not(feature = "ssr"))]
pub struct AppState;

/// The root `<App/>` component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/wildspot-web.css"/>
        <Stylesheet href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"/>
        <Title text="Wildlife Detection Dashboard"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1"/>
        <Meta name="description" content="Live map of wildlife detections by place"/>
        <Script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"/>
        <Script src="/map.js"/>

        <Router>
            <Header/>
            <main class="main-content">
                <Routes>
                    <Route path="/" view=Dashboard/>
                </Routes>
            </main>
        </Router>
    }
}
