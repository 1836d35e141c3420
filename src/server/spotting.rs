//! Detection-service client.
//!
//! One unconditional GET against the external `latest-spotting` endpoint,
//! decoded through the shared wire contract in [`crate::model`].

use crate::model::{decode_spottings, SpottingDecodeError, WildlifeDetection};

/// Why a spotting fetch failed. Both kinds are logged and otherwise
/// swallowed by the caller; neither is retried.
#[derive(Debug, thiserror::Error)]
pub enum SpottingError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Decode(#[from] SpottingDecodeError),
}

/// Build the query URL. The place text is appended as-is, matching what the
/// service expects; any escaping is left to the HTTP client.
pub fn spotting_url(base: &str, place: &str) -> String {
    format!("{}/latest-spotting?place={place}", base.trim_end_matches('/'))
}

/// Fetch the latest spottings for a place query (which may be empty).
pub async fn fetch_spottings(
    base: &str,
    place: &str,
) -> Result<Vec<WildlifeDetection>, SpottingError> {
    let url = spotting_url(base, place);
    tracing::debug!("GET {url}");

    let body: serde_json::Value = reqwest::get(&url).await?.json().await?;
    let batch = decode_spottings(body).inspect_err(|e| {
        tracing::error!("Invalid response from detection service: {e}");
    })?;

    tracing::info!("{} detections for place {place:?}", batch.len());
    Ok(batch)
}

// ─── tests ───────────────────────────────────────────────────────────────────
