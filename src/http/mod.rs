pub mod pages;

use crate::dataset::Table;
use crate::quality::{accuracy, DuplicateDetector, PairwiseDetector};
use crate::report::{self, charts};
use axum::{extract::State, response::Html, response::IntoResponse, routing::get, Router};
use std::sync::Arc;
use tracing::debug;

/// Shared request state: the table loaded at startup, read-only from every
/// handler, plus the detector behind its seam.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<Table>,
    pub detector: Arc<dyn DuplicateDetector + Send + Sync>,
}

impl AppState {
    pub fn new(table: Table) -> Self {
        AppState {
            table: Arc::new(table),
            detector: Arc::new(PairwiseDetector),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/graphs", get(graphs_handler))
        .route("/duplicates", get(duplicates_handler))
        .route("/corrections", get(corrections_handler))
        .route("/accuracy", get(accuracy_handler))
        .route("/healthz", get(healthz_handler))
        .with_state(state)
}

async fn healthz_handler() -> impl IntoResponse {
    "ok"
}

async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(pages::index_page(state.table.records()))
}

async fn graphs_handler(State(state): State<AppState>) -> Html<String> {
    let pairs = state.detector.detect(&state.table);
    debug!("graphs: {} duplicate pairs", pairs.len());

    let duplicate_counts = report::duplicate_name_counts(&state.table, &pairs);
    let duplicate_chart = charts::duplicate_chart(&duplicate_counts);

    let missing_counts = report::missing_column_counts(&state.table);
    let missing_chart = charts::missing_chart(&missing_counts);

    Html(pages::graphs_page(&duplicate_chart, missing_chart.as_deref()))
}

async fn duplicates_handler(State(state): State<AppState>) -> Html<String> {
    let records = state.table.records();
    let pairs = state.detector.detect(&state.table);
    let resolved: Vec<_> = pairs
        .iter()
        .map(|&(i, j)| (&records[i], &records[j]))
        .collect();
    Html(pages::duplicates_page(&resolved))
}

async fn corrections_handler(State(state): State<AppState>) -> Html<String> {
    let corrected = state.table.fill_missing();
    Html(pages::corrections_page(corrected.records()))
}

async fn accuracy_handler(State(state): State<AppState>) -> Html<String> {
    let score = accuracy(&state.table, state.detector.as_ref());
    let chart = charts::accuracy_chart(score);
    Html(pages::accuracy_page(score, &chart))
}
