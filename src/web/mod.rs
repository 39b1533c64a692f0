//! Web UI: a form over the article extractor plus a small JSON API.
//!
//! | Route | Returns |
//! |-------|---------|
//! | `GET /` | the form |
//! | `GET /article?url=..&debug=on` | the form with the extraction result |
//! | `GET /api/article?url=..` | `ArticleRecord` JSON, 422 on validation errors, 502 on fetch errors |
//! | `GET /api/listing?url=..` | `ListingEntry` array, same error mapping |
//! | `GET /api/stats` | session statistics |

use crate::error::Result;
use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, instrument};

pub mod handlers;
pub mod pages;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::index))
        .route("/article", get(handlers::article_page))
        .route("/api/article", get(handlers::api_article))
        .route("/api/listing", get(handlers::api_listing))
        .route("/api/stats", get(handlers::api_stats))
        .layer(cors)
        .with_state(Arc::new(state))
}

#[instrument(level = "info", skip_all, fields(%addr))]
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Web UI listening on http://{addr}");
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::observer::SilentObserver;
    use crate::scrapers::{Scraper, SiteConfig};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        let scraper = Scraper::new(SiteConfig::default())
            .unwrap()
            .with_observer(Arc::new(SilentObserver));
        create_app(AppState::new(scraper))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_renders_form() {
        let (status, body) = get(app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<form action="/article""#));
        assert!(body.contains("Total extractions: <strong>0</strong>"));
    }

    #[tokio::test]
    async fn test_blank_url_warns_without_counting() {
        let (status, body) = get(app(), "/article?url=%20%20").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Please enter a URL"));
        assert!(body.contains("Total extractions: <strong>0</strong>"));
    }

    #[tokio::test]
    async fn test_foreign_url_shows_validation_error_and_counts_failure() {
        let app = app();
        let uri = format!(
            "/article?url={}",
            urlencoding::encode("https://elpais.com/economia/")
        );
        let (_, body) = get(app.clone(), &uri).await;
        assert!(body.contains("Validation error"));
        assert!(body.contains("Failed: <strong>1</strong>"));

        let (_, stats) = get(app, "/api/stats").await;
        let stats: serde_json::Value = serde_json::from_str(&stats).unwrap();
        assert_eq!(stats["total"], 1);
        assert_eq!(stats["failed"], 1);
    }

    #[tokio::test]
    async fn test_api_article_validation_status() {
        let uri = format!(
            "/api/article?url={}",
            urlencoding::encode("https://nottheobjective.com/x/")
        );
        let (status, body) = get(app(), &uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["kind"], "validation");
        assert!(body["error"].as_str().unwrap().contains("theobjective.com"));
    }

    #[tokio::test]
    async fn test_api_article_requires_url() {
        let (status, _) = get(app(), "/api/article").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_api_listing_validation_status() {
        let uri = format!("/api/listing?url={}", urlencoding::encode("https://elpais.com/"));
        let (status, _) = get(app(), &uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
