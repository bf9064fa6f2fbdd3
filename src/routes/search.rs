use crate::models::book::Book;
use crate::models::provider::BookProvider;
use crate::models::responses::{ApiError, BooksResponse};
use crate::services::catalog::filter_by_category;
use axum::extract::{Query, State};
use axum::response::Json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{error, info};

type Provider = Arc<dyn BookProvider + Send + Sync>;

pub async fn search_books(
    Query(params): Query<BTreeMap<String, String>>,
    State(provider): State<Provider>,
) -> Result<Json<BooksResponse>, ApiError> {
    info!("Search query: {:?}", params);

    let books = provider.fetch_books().await.map_err(|e| {
        error!("Failed to fetch books: {}", e);
        e
    })?;

    // Only one category is honored; BTreeMap iteration makes the choice
    // deterministic (lexicographically first key).
    let Some((category, term)) = params.iter().next() else {
        return Ok(Json(BooksResponse { books }));
    };

    let filtered: Vec<Book> = filter_by_category(books, category, term);

    if filtered.is_empty() {
        return Err(ApiError::NotFound("No books match the query!".to_string()));
    }

    Ok(Json(BooksResponse { books: filtered }))
}
