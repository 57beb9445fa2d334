//! Typed access to the backend API.
//!
//! Every call returns the backend's envelope untouched; deciding what a
//! status means is left to the pages.

mod http;

pub use http::HttpBlogApi;

use async_trait::async_trait;
use url::Url;

use crate::common::ApiError;
use crate::models::{Blog, Envelope, Tag, Topic};

#[async_trait]
pub trait BlogApi: Send + Sync {
    async fn fetch_topic(&self, id: i64) -> Result<Envelope<Topic>, ApiError>;

    async fn fetch_topics(&self) -> Result<Envelope<Vec<Topic>>, ApiError>;

    /// Tags used by blogs of the given topic.
    async fn fetch_tags(&self, topic_id: i64) -> Result<Envelope<Vec<Tag>>, ApiError>;

    /// With `parsed` set the backend returns `content` as rendered HTML.
    async fn fetch_blog(&self, id: i64, parsed: bool) -> Result<Envelope<Blog>, ApiError>;

    async fn fetch_blogs(
        &self,
        topic_id: i64,
        tag_id: Option<i64>,
    ) -> Result<Envelope<Vec<Blog>>, ApiError>;
}

/// Builds backend URLs below a base address, keeping any path prefix the
/// base carries (`http://host/api/v1` -> `http://host/api/v1/topics`).
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &Url) -> Self {
        Self {
            base: base.as_str().trim_end_matches('/').to_string(),
        }
    }

    pub fn topics(&self) -> Result<Url, ApiError> {
        self.resource("topics")
    }

    pub fn topic(&self, id: i64) -> Result<Url, ApiError> {
        self.resource(&format!("topics/{id}"))
    }

    pub fn tags(&self, topic_id: i64) -> Result<Url, ApiError> {
        let mut url = self.resource("tags")?;
        url.query_pairs_mut()
            .append_pair("topic", &topic_id.to_string());
        Ok(url)
    }

    pub fn blog(&self, id: i64, parsed: bool) -> Result<Url, ApiError> {
        let mut url = self.resource(&format!("blogs/{id}"))?;
        if parsed {
            url.query_pairs_mut().append_pair("parsed", "true");
        }
        Ok(url)
    }

    pub fn blogs(&self, topic_id: i64, tag_id: Option<i64>) -> Result<Url, ApiError> {
        let mut url = self.resource("blogs")?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("topic", &topic_id.to_string());
            if let Some(tag_id) = tag_id {
                query.append_pair("tag", &tag_id.to_string());
            }
        }
        Ok(url)
    }

    fn resource(&self, path: &str) -> Result<Url, ApiError> {
        Ok(Url::parse(&format!("{}/{}", self.base, path))?)
    }
}
