//! Leaflet map container.
//!
//! Server-side this renders the empty container div only; the hydrated WASM
//! build drives Leaflet through the `map_ffi` bindings and the `map.js` glue.

use leptos::*;

use crate::model::{MapCenter, MarkerPin};

/// Interactive detection map with one marker (and popup) per pin.
#[component]
pub fn DetectionMap(center: Memo<MapCenter>, pins: Memo<Vec<MarkerPin>>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use crate::map_ffi;
        use crate::model::DEFAULT_ZOOM;

        let initialised = create_rw_signal(false);

        create_effect(move |_| {
            let c = center.get();
            if !initialised.get_untracked() {
                map_ffi::init_detection_map("detection-map", c.latitude, c.longitude, DEFAULT_ZOOM);
                initialised.set(true);
            } else {
                map_ffi::set_detection_view(c.latitude, c.longitude);
            }
        });

        create_effect(move |_| {
            let pins = pins.get();
            match serde_json::to_string(&pins) {
                Ok(json) => map_ffi::render_detection_markers(&json),
                Err(e) => logging::error!("Cannot serialise markers: {e}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (center, pins);

    view! { <div id="detection-map" class="detection-map"></div> }
}
