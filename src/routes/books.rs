use crate::models::book::{Book, NewBook};
use crate::models::provider::BookProvider;
use crate::models::responses::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

type Provider = Arc<dyn BookProvider + Send + Sync>;

pub async fn get_book(
    Path(id): Path<String>,
    State(provider): State<Provider>,
) -> Result<Json<Book>, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Please provide a valid book ID!".to_string(),
        ));
    }

    let books = provider.fetch_books().await.map_err(|e| {
        error!("Failed to fetch books: {}", e);
        e
    })?;

    match crate::services::catalog::find_by_id(&books, &id) {
        Some(book) => Ok(Json(book.clone())),
        None => Err(ApiError::NotFound(format!(
            "No book found matching ID: {}",
            id
        ))),
    }
}

// The created book is returned but not stored anywhere; a follow-up
// lookup for the new id will not find it.
pub async fn add_book(
    body: Result<Json<NewBook>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let Json(new_book) =
        body.map_err(|_| ApiError::BadRequest("Invalid request body!".to_string()))?;

    let id = Uuid::new_v4().to_string();
    info!("Created book {} ({})", id, new_book.title);

    Ok((StatusCode::CREATED, Json(new_book.into_book(id))))
}
