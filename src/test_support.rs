use crate::models::book::Book;
use crate::models::provider::{BookProvider, ProviderError};
use async_trait::async_trait;
use axum::Router;
use std::sync::Arc;

pub struct StubProvider {
    books: Vec<Book>,
    fail: bool,
}

impl StubProvider {
    pub fn with_books(books: Vec<Book>) -> Self {
        Self { books, fail: false }
    }

    pub fn failing() -> Self {
        Self {
            books: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl BookProvider for StubProvider {
    async fn fetch_books(&self) -> Result<Vec<Book>, ProviderError> {
        if self.fail {
            return Err(ProviderError::UpstreamStatus(503));
        }
        Ok(self.books.clone())
    }
}

pub fn sample_books() -> Vec<Book> {
    vec![
        Book {
            id: "1".to_string(),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            genre: "scifi".to_string(),
            sales: 20000000,
            publication_date: 1965,
        },
        Book {
            id: "2".to_string(),
            title: "Frankenstein".to_string(),
            author: "Mary Shelley".to_string(),
            genre: "gothic".to_string(),
            sales: 10000000,
            publication_date: 1818,
        },
        Book {
            id: "3".to_string(),
            title: "Pride and Prejudice".to_string(),
            author: "Jane Austen".to_string(),
            genre: "romance".to_string(),
            sales: 20000000,
            publication_date: 1813,
        },
    ]
}

pub fn sample_app() -> Router {
    crate::app(Arc::new(StubProvider::with_books(sample_books())))
}

pub fn failing_app() -> Router {
    crate::app(Arc::new(StubProvider::failing()))
}
