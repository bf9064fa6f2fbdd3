use crate::models::book::Book;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Failed to fetch books: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Book source responded with status {0}")]
    UpstreamStatus(u16),
    #[error("Failed to decode book payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait BookProvider {
    async fn fetch_books(&self) -> Result<Vec<Book>, ProviderError>;
}

pub struct HttpBookProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpBookProvider {
    pub fn new(url: String, timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl BookProvider for HttpBookProvider {
    async fn fetch_books(&self) -> Result<Vec<Book>, ProviderError> {
        info!("Fetching books from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::UpstreamStatus(status.as_u16()));
        }

        let payload = response.text().await?;
        let books: Vec<Book> = serde_json::from_str(&payload)?;

        Ok(books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let err = serde_json::from_str::<Vec<Book>>("not json").unwrap_err();
        let err = ProviderError::from(err);

        assert!(matches!(err, ProviderError::Decode(_)));
        assert!(err.to_string().starts_with("Failed to decode book payload"));
    }

    #[test]
    fn upstream_status_carries_the_code() {
        let err = ProviderError::UpstreamStatus(503);
        assert_eq!(err.to_string(), "Book source responded with status 503");
    }
}
