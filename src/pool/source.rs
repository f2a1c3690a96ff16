//! Reading the question bank document.

use crate::pool::bank::{PoolDocument, QuestionPool};
use crate::pool::error::PoolError;
use reqwest::Client;

/// Decode a question-bank JSON document.
pub fn parse_pool(json: &str) -> Result<QuestionPool, PoolError> {
    let document: PoolDocument = serde_json::from_str(json)?;
    Ok(document.into())
}

/// One-shot, read-only fetch of the question bank at `url`.
pub async fn fetch_pool(client: &Client, url: &str) -> Result<QuestionPool, PoolError> {
    tracing::debug!(url, "fetching question bank");

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(PoolError::HttpStatus(response.status()));
    }

    let body = response.text().await?;
    let pool = parse_pool(&body)?;

    tracing::info!(questions = pool.len(), "question bank loaded");
    Ok(pool)
}

/// Fetch the pool, falling back to an empty pool on any failure.
pub async fn fetch_pool_or_empty(client: &Client, url: &str) -> QuestionPool {
    match fetch_pool(client, url).await {
        Ok(pool) => pool,
        Err(error) => {
            tracing::warn!(url, %error, "could not load question bank, continuing with empty pool");
            QuestionPool::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_document() {
        let pool = parse_pool(
            r#"{"questions": [{"text": "t", "options": ["a","b","c","d","e"], "answer": ["a","b","c","d","e"]}]}"#,
        )
        .unwrap();

        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(0).unwrap().answer.len(), 5);
    }

    #[test]
    fn missing_questions_key_is_empty_pool() {
        assert!(parse_pool("{}").unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_decode_error() {
        let err = parse_pool("not json").unwrap_err();
        assert!(matches!(err, PoolError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_url_falls_back_to_empty() {
        let client = Client::new();
        let pool = fetch_pool_or_empty(&client, "http://127.0.0.1:9/db.json").await;
        assert!(pool.is_empty());
    }
}
