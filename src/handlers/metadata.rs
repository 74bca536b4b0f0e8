use axum::{extract::State, Json};

use crate::error::{AppError, AppResult};
use crate::extract;
use crate::models::{MetadataRecord, ParseMetadataRequest};
use crate::state::AppState;

/// POST /parse-metadata
///
/// Fetches the target URL and scans the raw markup for the document title,
/// Open Graph / Twitter Card / generic meta tags, link relations, and
/// embedded ld+json blocks. Extraction is best-effort per field: the record
/// always comes back in full once the document is retrievable.
pub async fn parse_metadata(
    State(state): State<AppState>,
    Json(req): Json<ParseMetadataRequest>,
) -> AppResult<Json<MetadataRecord>> {
    let url = match req.url {
        Some(url) if !url.is_empty() => url,
        _ => return Err(AppError::Validation("URL is required".into())),
    };

    let response = state.http_client.get(&url).send().await.map_err(|e| {
        tracing::warn!(error = ?e, url = %url, "Failed to fetch URL for metadata parsing");
        AppError::Fetch(format!("Failed to fetch {url}"))
    })?;

    // Non-success statuses still carry a scannable body (custom error pages
    // and the like), so the status code is deliberately not checked.
    let html = response.text().await.map_err(|e| {
        tracing::warn!(error = ?e, url = %url, "Failed to read response body");
        AppError::Fetch(format!("Failed to read response body from {url}"))
    })?;

    Ok(Json(extract::scan_document(&url, &html)))
}
