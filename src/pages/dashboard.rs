//! Dashboard page – place search plus detection map.

use leptos::*;

use crate::components::detection_map::DetectionMap;
use crate::components::search_bar::SearchBar;
use crate::model::{MapCenter, MarkerPin, WildlifeDetection};

// ─── Server functions ────────────────────────────────────────────────────────

#[server(GetLatestSpottings, "/api")]
pub async fn get_latest_spottings(
    place: String,
) -> Result<Vec<WildlifeDetection>, ServerFnError> {
    use crate::server::spotting;
    let state = use_context::<crate::app::AppState>()
        .ok_or_else(|| ServerFnError::new("Missing AppState"))?;
    spotting::fetch_spottings(&state.spotting_url, &place)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

// ─── Dashboard state ─────────────────────────────────────────────────────────

/// Page-local state. [`DashboardState::apply_batch`] is the only place the
/// detection list and map centre are mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub detections: Vec<WildlifeDetection>,
    pub center: MapCenter,
}

impl DashboardState {
    /// Apply a successful fetch: replace the list, and recentre on the first
    /// detection when the batch is non-empty. An empty batch clears the list
    /// but keeps the previous centre.
    pub fn apply_batch(&mut self, batch: Vec<WildlifeDetection>) {
        if let Some(first) = batch.first() {
            self.center = MapCenter::new(first.latitude, first.longitude);
        }
        self.detections = batch;
    }
}

// ─── Page component ──────────────────────────────────────────────────────────

/// Search box over an interactive map of the latest spottings.
#[component]
pub fn Dashboard() -> impl IntoView {
    let (state, set_state) = create_signal(DashboardState::default());
    let (search_query, set_search_query) = create_signal(String::new());

    let center = create_memo(move |_| state.with(|s| s.center));
    let pins = create_memo(move |_| {
        state.with(|s| {
            s.detections
                .iter()
                .map(WildlifeDetection::pin)
                .collect::<Vec<MarkerPin>>()
        })
    });

    // Searches are not sequenced against each other; when two overlap, the
    // last response to arrive wins.
    let run_search = move |()| {
        let place = search_query.get_untracked();
        spawn_local(async move {
            match get_latest_spottings(place).await {
                Ok(batch) => set_state.update(|s| s.apply_batch(batch)),
                Err(e) => logging::error!("Error fetching detections: {e}"),
            }
        });
    };

    view! {
        <div class="dashboard-page">
            <SearchBar query=search_query set_query=set_search_query on_search=run_search/>

            <section class="map-card">
                <div class="map-card-header">
                    <h2 class="map-card-title">"Detection Map"</h2>
                </div>
                <div class="map-card-body">
                    <DetectionMap center=center pins=pins/>
                </div>
            </section>
        </div>
    }
}

// ─── tests ───────────────────────────────────────────────────────────────────
