use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use lede_core::{LedeError, ParsedArticle};
use serde::Deserialize;

use crate::app::AppState;
use crate::error::ApiError;

/// Either a page to fetch or HTML the caller already has. When both are
/// given the HTML wins and nothing is fetched.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub url: Option<String>,
    pub html: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// `POST /api/parse`
pub async fn parse_handler(
    State(state): State<AppState>, payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<ParsedArticle>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::UrlRequired(Some(e.body_text())))?;

    let article = match (non_blank(request.html), non_blank(request.url)) {
        (Some(html), _) => {
            let extractor = Arc::clone(&state.extractor);
            tokio::task::spawn_blocking(move || extractor.extract_html(&html))
                .await
                .map_err(|e| LedeError::InternalError(format!("extraction task failed: {}", e)))??
        }
        (None, Some(url)) => state.extractor.fetch_and_extract(url.trim(), &state.fetch).await?,
        (None, None) => return Err(ApiError::UrlRequired(None)),
    };

    tracing::info!(
        title = article.title.as_deref().unwrap_or("-"),
        chars = article.content_len(),
        "parse request served"
    );
    Ok(Json(article))
}
