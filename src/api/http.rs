//! Reqwest-backed implementation of [`BlogApi`].

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::{BlogApi, Endpoints};
use crate::common::ApiError;
use crate::models::{Blog, Envelope, Tag, Topic};

pub struct HttpBlogApi {
    client: Client,
    endpoints: Endpoints,
}

impl HttpBlogApi {
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: &Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base))
    }

    pub fn with_client(client: Client, base: &Url) -> Self {
        Self {
            client,
            endpoints: Endpoints::new(base),
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Envelope<T>, ApiError> {
        debug!(%url, "backend request");
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        // The envelope carries its own status; the HTTP status line is only
        // interesting for the log.
        let http_status = response.status();
        let body = response.bytes().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

        let envelope = Envelope::from_slice(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })?;
        debug!(
            %url,
            http_status = http_status.as_u16(),
            status = envelope.status,
            "backend response"
        );
        Ok(envelope)
    }
}

#[async_trait]
impl BlogApi for HttpBlogApi {
    async fn fetch_topic(&self, id: i64) -> Result<Envelope<Topic>, ApiError> {
        self.get(self.endpoints.topic(id)?).await
    }

    async fn fetch_topics(&self) -> Result<Envelope<Vec<Topic>>, ApiError> {
        self.get(self.endpoints.topics()?).await
    }

    async fn fetch_tags(&self, topic_id: i64) -> Result<Envelope<Vec<Tag>>, ApiError> {
        self.get(self.endpoints.tags(topic_id)?).await
    }

    async fn fetch_blog(&self, id: i64, parsed: bool) -> Result<Envelope<Blog>, ApiError> {
        self.get(self.endpoints.blog(id, parsed)?).await
    }

    async fn fetch_blogs(
        &self,
        topic_id: i64,
        tag_id: Option<i64>,
    ) -> Result<Envelope<Vec<Blog>>, ApiError> {
        self.get(self.endpoints.blogs(topic_id, tag_id)?).await
    }
}
