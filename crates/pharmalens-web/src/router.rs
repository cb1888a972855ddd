//! Axum router — maps all URL paths to handlers.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    assets::{script, stylesheet},
    catalog::catalog_page,
    pipeline::pipeline_page,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(pipeline_page))
        .route("/catalog", get(catalog_page))

        // Embedded static assets
        .route("/static/css/main.css", get(stylesheet))
        .route("/static/js/main.js", get(script))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use pharmalens_common::Config;
    use pharmalens_core::workbook::{DrugCatalog, LoadedData, TimeSeriesTable};
    use tower::util::ServiceExt;

    fn test_router() -> Router {
        let mut catalog = DrugCatalog::default();
        catalog.insert("Aspirin".into(), Some("Cardio".into()), Some("COX".into()));
        catalog.insert("Keytruda".into(), Some("Oncology".into()), Some("PD-1".into()));
        let timeline = TimeSeriesTable {
            headers: vec!["Year".into(), "2021".into(), "2022".into()],
            rows: vec![vec![None, Some("Aspirin".into()), Some("Keytruda".into())]],
        };
        let data = LoadedData::from_parts(timeline, catalog);
        build_router(AppState::from_data(Config::default(), data))
    }

    async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_timeline_page_renders_grid() {
        let (status, body) = get_body(test_router(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Pipeline Timeline"));
        assert!(body.contains("Aspirin"));
        // Nothing selected: no cell carries a background style.
        assert!(!body.contains("background-color:"));
    }

    #[tokio::test]
    async fn test_selection_highlights_cells() {
        let (status, body) =
            get_body(test_router(), "/?area=Cardio").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("background-color:"));
    }

    #[tokio::test]
    async fn test_catalog_page_lists_drugs() {
        let (status, body) = get_body(test_router(), "/catalog").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Keytruda"));
        assert!(body.contains("PD-1"));
    }

    #[tokio::test]
    async fn test_assets_are_served() {
        let (status, body) = get_body(test_router(), "/static/css/main.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("timeline-table"));

        let (status, body) = get_body(test_router(), "/static/js/main.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("area-check"));
    }
}
