//! Supabase (PostgREST) word source.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use wordgame_core::{SourceError, WordPair, WordSource};

use crate::config::SupabaseConfig;
use crate::error::{AgentError, Result};

/// Reads the `word_pairs` table through the Supabase REST API.
pub struct SupabaseWordSource {
    client: Client,
    base_url: String,
    key: String,
}

/// Row of the `word_pairs` table. Ids may be integers or uuids.
#[derive(Debug, Deserialize)]
struct WordPairRow {
    id: serde_json::Value,
    english_word: String,
    translated_word: String,
    target_language: String,
}

impl From<WordPairRow> for WordPair {
    fn from(row: WordPairRow) -> Self {
        let id = match row.id {
            serde_json::Value::String(id) => id,
            other => other.to_string(),
        };
        WordPair::new(id, row.english_word, row.translated_word, row.target_language)
    }
}

impl SupabaseWordSource {
    pub fn new(config: &SupabaseConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| AgentError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            key: config.key.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/rest/v1/word_pairs", self.base_url)
    }
}

#[async_trait]
impl WordSource for SupabaseWordSource {
    fn name(&self) -> &str {
        "supabase"
    }

    async fn fetch(&self, language: &str, limit: usize) -> wordgame_core::Result<Vec<WordPair>> {
        let filter = format!("eq.{language}");
        let limit = limit.to_string();

        debug!(language, limit = %limit, "Fetching word pairs from Supabase");

        let resp = self
            .client
            .get(self.endpoint())
            .query(&[
                ("select", "*"),
                ("target_language", filter.as_str()),
                ("limit", limit.as_str()),
            ])
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .send()
            .await
            .map_err(|e| SourceError::Request(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SourceError::Status { status, body });
        }

        let rows: Vec<WordPairRow> = resp
            .json()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))?;

        Ok(rows.into_iter().map(WordPair::from).collect())
    }
}
