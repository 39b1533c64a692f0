use super::AppState;
use super::pages;
use crate::error::ScrapeError;
use crate::outcome::Outcome;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
pub struct ArticleForm {
    #[serde(default)]
    pub url: String,
    /// Present (any value) when the debug checkbox is ticked.
    pub debug: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UrlQuery {
    pub url: Option<String>,
}

pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(form): Query<ArticleForm>,
) -> Html<String> {
    Html(pages::index_page(
        &state.stats.snapshot(),
        form.url.trim(),
        form.debug.is_some(),
        None,
    ))
}

pub async fn article_page(
    State(state): State<Arc<AppState>>,
    Query(form): Query<ArticleForm>,
) -> Html<String> {
    let url = form.url.trim();
    let debug = form.debug.is_some();

    if url.is_empty() {
        return Html(pages::index_page(
            &state.stats.snapshot(),
            url,
            debug,
            Some(pages::blank_url_notice()),
        ));
    }

    let started = Instant::now();
    let outcome = Outcome::from(state.scraper.scrape_article(url).await);
    let elapsed = started.elapsed();
    state.stats.record(&outcome);
    info!(%url, outcome = outcome.label(), elapsed_ms = elapsed.as_millis() as u64, "Web extraction finished");

    Html(pages::index_page(
        &state.stats.snapshot(),
        url,
        debug,
        Some(pages::outcome_section(&outcome, elapsed, debug)),
    ))
}

pub async fn api_article(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UrlQuery>,
) -> Response {
    let url = query.url.unwrap_or_default();
    let url = url.trim();
    if url.is_empty() {
        return problem(StatusCode::UNPROCESSABLE_ENTITY, "validation", "A url parameter is required");
    }

    match state.scraper.scrape_article(url).await {
        Ok(record) => Json(record).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn api_listing(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UrlQuery>,
) -> Response {
    let url = query.url.as_deref().map(str::trim).filter(|u| !u.is_empty());
    match state.scraper.scrape_listing(url).await {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn api_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.stats.snapshot())
}

fn error_response(e: &ScrapeError) -> Response {
    if e.is_validation() {
        problem(StatusCode::UNPROCESSABLE_ENTITY, "validation", &e.to_string())
    } else {
        problem(StatusCode::BAD_GATEWAY, "fetch", &e.to_string())
    }
}

fn problem(status: StatusCode, kind: &str, error: &str) -> Response {
    (status, Json(json!({ "kind": kind, "error": error }))).into_response()
}
