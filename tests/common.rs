#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::http::{header, StatusCode};
use actix_web::web::Data;
use actix_web::{test, App};
use async_trait::async_trait;

use codingnotes::api::BlogApi;
use codingnotes::common::{ApiError, SiteInfo};
use codingnotes::frontend::components::ContentSource;
use codingnotes::models::*;
use codingnotes::web::{self, AppState};

pub const SECRET_ERROR: &str = "sqlite: database disk image is malformed";

pub fn get_seed_topic() -> Topic {
    Topic {
        id: 5,
        name: "Rust Tips".to_string(),
        slug: "rust-tips".to_string(),
        description: "Small things worth remembering".to_string(),
        created_at: "2024-01-02T18:41:18Z".to_string(),
        updated_at: "2024-01-05T09:35:22Z".to_string(),
    }
}

pub fn get_seed_tag_async() -> Tag {
    Tag {
        id: 3,
        name: "Async".to_string(),
        slug: "async".to_string(),
        description: String::new(),
    }
}

pub fn get_seed_tag_macros() -> Tag {
    Tag {
        id: 4,
        name: "Macros".to_string(),
        slug: "macros".to_string(),
        description: String::new(),
    }
}

pub fn get_seed_blog_pinned() -> Blog {
    Blog {
        id: 12,
        title: "Pinning Futures".to_string(),
        slug: "pinning-futures".to_string(),
        description: "Why Pin exists".to_string(),
        content: "# Heading\n\nSome **bold** text with \\{braces\\}.".to_string(),
        created_at: "2024-03-09T10:00:00Z".to_string(),
        updated_at: "2024-11-02T08:30:00Z".to_string(),
        pinned: true,
        visible: true,
        topics: vec![get_seed_topic()],
        tags: vec![get_seed_tag_async()],
    }
}

pub fn get_seed_blog_macros() -> Blog {
    Blog {
        id: 13,
        title: "Declarative Macro Recipes".to_string(),
        slug: "declarative-macro-recipes".to_string(),
        description: "macro_rules patterns".to_string(),
        content: "Plain text.".to_string(),
        created_at: "2024-04-01 12:00:00".to_string(),
        updated_at: "2024-04-02".to_string(),
        pinned: false,
        visible: true,
        topics: vec![get_seed_topic()],
        tags: vec![get_seed_tag_macros()],
    }
}

pub fn get_test_site() -> SiteInfo {
    SiteInfo {
        title: "Coding Notes".to_string(),
        author: Some("Alex".to_string()),
        email: None,
        github_url: None,
    }
}

/// Backend double serving canned envelopes and recording each call.
#[derive(Default)]
pub struct FakeApi {
    pub topics: HashMap<i64, Envelope<Topic>>,
    pub topic_list: Option<Envelope<Vec<Topic>>>,
    pub tags: HashMap<i64, Envelope<Vec<Tag>>>,
    pub blogs: HashMap<i64, Envelope<Blog>>,
    pub blog_lists: HashMap<(i64, Option<i64>), Envelope<Vec<Blog>>>,
    pub broken_transport: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeApi {
    /// Topic 5 with two tags, two blogs, and a tag-3 filtered list.
    pub fn seeded() -> Self {
        let topic = get_seed_topic();
        let mut api = Self::default();
        api.topic_list = Some(Envelope::ok(vec![topic.clone()]));
        api.topics.insert(topic.id, Envelope::ok(topic.clone()));
        api.tags.insert(
            topic.id,
            Envelope::ok(vec![get_seed_tag_async(), get_seed_tag_macros()]),
        );
        api.blog_lists.insert(
            (topic.id, None),
            Envelope::ok(vec![get_seed_blog_pinned(), get_seed_blog_macros()]),
        );
        api.blog_lists.insert(
            (topic.id, Some(3)),
            Envelope::ok(vec![get_seed_blog_pinned()]),
        );
        for blog in [get_seed_blog_pinned(), get_seed_blog_macros()] {
            api.blogs.insert(blog.id, Envelope::ok(blog));
        }
        api
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call.clone());
        if self.broken_transport {
            return Err(ApiError::Decode {
                url: call,
                source: serde_json::from_str::<serde_json::Value>("<html>").unwrap_err(),
            });
        }
        Ok(())
    }
}

fn missing<T>() -> Envelope<T> {
    Envelope::failed(404, "sql: no rows in result set")
}

#[async_trait]
impl BlogApi for FakeApi {
    async fn fetch_topic(&self, id: i64) -> Result<Envelope<Topic>, ApiError> {
        self.record(format!("topic {id}"))?;
        Ok(self.topics.get(&id).cloned().unwrap_or_else(missing))
    }

    async fn fetch_topics(&self) -> Result<Envelope<Vec<Topic>>, ApiError> {
        self.record("topics".to_string())?;
        Ok(self
            .topic_list
            .clone()
            .unwrap_or_else(|| Envelope::ok(Vec::new())))
    }

    async fn fetch_tags(&self, topic_id: i64) -> Result<Envelope<Vec<Tag>>, ApiError> {
        self.record(format!("tags {topic_id}"))?;
        Ok(self
            .tags
            .get(&topic_id)
            .cloned()
            .unwrap_or_else(|| Envelope::ok(Vec::new())))
    }

    async fn fetch_blog(&self, id: i64, parsed: bool) -> Result<Envelope<Blog>, ApiError> {
        self.record(format!("blog {id} parsed={parsed}"))?;
        Ok(self.blogs.get(&id).cloned().unwrap_or_else(missing))
    }

    async fn fetch_blogs(
        &self,
        topic_id: i64,
        tag_id: Option<i64>,
    ) -> Result<Envelope<Vec<Blog>>, ApiError> {
        self.record(format!("blogs {topic_id} {tag_id:?}"))?;
        Ok(self
            .blog_lists
            .get(&(topic_id, tag_id))
            .cloned()
            .unwrap_or_else(|| Envelope::ok(Vec::new())))
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

pub async fn get(api: &Arc<FakeApi>, uri: &str) -> TestResponse {
    get_with_source(api, uri, ContentSource::Markdown).await
}

pub async fn get_with_source(
    api: &Arc<FakeApi>,
    uri: &str,
    content_source: ContentSource,
) -> TestResponse {
    let state = AppState {
        api: api.clone(),
        site: get_test_site(),
        content_source,
    };
    let app = test::init_service(
        App::new()
            .app_data(Data::new(state))
            .configure(web::configure),
    )
    .await;

    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = test::read_body(resp).await;

    TestResponse {
        status,
        location,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}
