use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

mod models;
mod routes;
mod services;
#[cfg(test)]
pub mod test_support;

use models::provider::{BookProvider, HttpBookProvider};
use routes::{
    books::{add_book, get_book},
    health::{health_check, welcome},
    search::search_books,
};

type Provider = Arc<dyn BookProvider + Send + Sync>;

const DEFAULT_BOOKS_URL: &str = "https://dshijakovskitdl.github.io/library-js/books.json";

pub fn app(provider: Provider) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/status", get(health_check))
        .route("/search", get(search_books))
        .route("/add", post(add_book))
        .route("/:id", get(get_book))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(provider)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("library_service=info,tower_http=info")
        .init();

    let books_url =
        std::env::var("BOOKS_URL").unwrap_or_else(|_| DEFAULT_BOOKS_URL.to_string());
    let timeout_secs = std::env::var("FETCH_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);

    let provider: Provider = Arc::new(
        HttpBookProvider::new(books_url, Duration::from_secs(timeout_secs))
            .expect("Failed to build HTTP client"),
    );

    let app = app(provider);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{}", port);

    info!("Library service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
