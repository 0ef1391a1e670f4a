use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use ns_core::model::TIMESTAMP_FORMAT;
use ns_core::{ArticleRecord, Error, HeadlineSource, NewsApiConfig, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

const DEFAULT_BASE_URL: &str = "https://newsapi.org";
const SOURCE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Deserialize)]
struct HeadlinesResponse {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Deserialize)]
struct RawArticle {
    source: RawSource,
    title: String,
    description: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
}

#[derive(Deserialize)]
struct RawSource {
    name: String,
}

pub struct NewsApiClient {
    client: Client,
    config: NewsApiConfig,
    base_url: String,
}

impl NewsApiClient {
    pub fn new(config: NewsApiConfig) -> Result<Self> {
        Self::with_base_url(config, DEFAULT_BASE_URL)
    }

    /// Point the client at another host; tests use this against a local
    /// mock server.
    pub fn with_base_url(config: NewsApiConfig, base_url: impl Into<String>) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::Config("news API key is empty".to_string()));
        }
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self {
            client,
            config,
            base_url: base_url.into(),
        })
    }

    fn parse_article(raw: RawArticle) -> Result<ArticleRecord> {
        let published_at = raw
            .published_at
            .ok_or_else(|| Error::Fetch("article has no publishedAt timestamp".to_string()))?;
        let published_at = NaiveDateTime::parse_from_str(&published_at, SOURCE_TIMESTAMP_FORMAT)
            .map_err(|e| {
                Error::Fetch(format!("invalid publishedAt timestamp '{}': {}", published_at, e))
            })?;
        Ok(ArticleRecord {
            published_at: published_at.format(TIMESTAMP_FORMAT).to_string(),
            source: raw.source.name,
            title: raw.title,
            description: raw.description.unwrap_or_default(),
        })
    }
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("client", &"<reqwest::Client>")
            .field("config", &self.config)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl HeadlineSource for NewsApiClient {
    fn name(&self) -> &str {
        "newsapi"
    }

    async fn fetch_headlines(&self) -> Result<Vec<ArticleRecord>> {
        let url = format!(
            "{}/v2/top-headlines?language={}&pageSize={}&apiKey={}",
            self.base_url, self.config.language, self.config.page_size, self.config.api_key
        );
        info!("📰 Fetching top headlines");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Fetch(format!(
                "news API request failed: {} - {}",
                status.as_u16(),
                body
            )));
        }

        let payload = response.json::<HeadlinesResponse>().await?;
        let articles = payload
            .articles
            .into_iter()
            .map(Self::parse_article)
            .collect::<Result<Vec<_>>>()?;
        info!("✨ Fetched {} headlines", articles.len());
        Ok(articles)
    }
}
