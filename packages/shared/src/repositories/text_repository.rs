use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::repositories::errors::text_repository_errors::TextRepositoryError;

/// Source of the passages players race on.
#[async_trait]
pub trait TextRepository: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<String>, TextRepositoryError>;
}

#[derive(Debug, Deserialize)]
struct TextRow {
    content: String,
}

/// Reads passages from a Supabase table over its REST interface.
pub struct SupabaseTextRepository {
    client: Client,
    base_url: String,
    api_key: String,
    table_name: String,
}

impl SupabaseTextRepository {
    pub fn new(base_url: &str, api_key: &str, table_name: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            table_name: table_name.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table_name)
    }
}

#[async_trait]
impl TextRepository for SupabaseTextRepository {
    async fn fetch_all(&self) -> Result<Vec<String>, TextRepositoryError> {
        let endpoint = self.endpoint();
        debug!("Fetching texts from {}", endpoint);

        let response = self
            .client
            .get(&endpoint)
            .query(&[("select", "content")])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| TextRepositoryError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TextRepositoryError::Status(status.as_u16()));
        }

        let rows: Vec<TextRow> = response
            .json()
            .await
            .map_err(|e| TextRepositoryError::Deserialization(e.to_string()))?;

        Ok(rows.into_iter().map(|row| row.content).collect())
    }
}

/// Fixed list of passages, used when no remote provider is configured.
#[derive(Debug, Clone, Default)]
pub struct StaticTextRepository {
    texts: Vec<String>,
}

impl StaticTextRepository {
    pub fn new(texts: Vec<String>) -> Self {
        Self { texts }
    }
}

#[async_trait]
impl TextRepository for StaticTextRepository {
    async fn fetch_all(&self) -> Result<Vec<String>, TextRepositoryError> {
        Ok(self.texts.clone())
    }
}
