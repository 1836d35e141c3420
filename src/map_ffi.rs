//! FFI wrappers over the Leaflet glue in `public/map.js`.
//!
//! Plain bindings only – no state, no logic.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initDetectionMap)]
    pub fn init_detection_map(container_id: &str, lat: f64, lng: f64, zoom: u32);

    #[wasm_bindgen(js_name = setDetectionView)]
    pub fn set_detection_view(lat: f64, lng: f64);

    #[wasm_bindgen(js_name = renderDetectionMarkers)]
    pub fn render_detection_markers(pins_json: &str);
}
