//! Page resolution: fetch what a route needs, decide between rendering,
//! redirecting, not-found and failure, and render the page body.
//!
//! Fetches inside one page run in sequence because the child lists depend
//! on the resolved parent.

use askama::Template;
use tracing::{debug, instrument};

use crate::api::BlogApi;
use crate::common::{PageError, SiteInfo};
use crate::frontend::components::{
    blog_link_card, topic_link_card, ContentSource, Markdown, TagFilterBar,
};
use crate::frontend::pages::{BlogPage, HomePage, TopicPage};

/// A rendered page body waiting for the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: Option<String>,
    pub body: String,
}

impl Page {
    pub fn new(title: Option<String>, body: String) -> Self {
        Self { title, body }
    }
}

/// How a page request ends. Not-found and failure stay separate: the first
/// is an expected answer, the second is logged and shown as the error view.
#[derive(Debug)]
pub enum PageOutcome {
    Render(Page),
    Redirect(String),
    NotFound,
    Failure(PageError),
}

impl From<PageError> for PageOutcome {
    fn from(err: PageError) -> Self {
        Self::Failure(err)
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn settle(result: Result<PageOutcome, PageError>) -> PageOutcome {
    result.unwrap_or_else(PageOutcome::from)
}

/// Home page listing every topic.
#[instrument(skip(api, site))]
pub async fn home(api: &dyn BlogApi, site: &SiteInfo) -> PageOutcome {
    settle(build_home(api, site).await)
}

async fn build_home(api: &dyn BlogApi, site: &SiteInfo) -> Result<PageOutcome, PageError> {
    let topics = api.fetch_topics().await?.into_list()?;
    let cards = topics
        .iter()
        .map(topic_link_card)
        .collect::<Result<Vec<_>, _>>()?;

    let body = HomePage { site, cards }.render()?;
    Ok(PageOutcome::Render(Page::new(None, body)))
}

/// `/topics/{id}`: sends the short URL to the canonical slugged one.
#[instrument(skip(api))]
pub async fn resolve_topic(api: &dyn BlogApi, raw_id: &str) -> PageOutcome {
    let Some(id) = parse_id(raw_id) else {
        return PageOutcome::NotFound;
    };
    settle(redirect_to_topic(api, id).await)
}

async fn redirect_to_topic(api: &dyn BlogApi, id: i64) -> Result<PageOutcome, PageError> {
    Ok(match api.fetch_topic(id).await?.into_record()? {
        Some(topic) => PageOutcome::Redirect(topic.path()),
        None => PageOutcome::NotFound,
    })
}

/// `/blogs/{id}`: sends the short URL to the canonical slugged one.
#[instrument(skip(api, source))]
pub async fn resolve_blog(api: &dyn BlogApi, raw_id: &str, source: ContentSource) -> PageOutcome {
    let Some(id) = parse_id(raw_id) else {
        return PageOutcome::NotFound;
    };
    settle(redirect_to_blog(api, id, source).await)
}

async fn redirect_to_blog(
    api: &dyn BlogApi,
    id: i64,
    source: ContentSource,
) -> Result<PageOutcome, PageError> {
    Ok(match api.fetch_blog(id, source.parsed()).await?.into_record()? {
        Some(blog) => PageOutcome::Redirect(blog.path()),
        None => PageOutcome::NotFound,
    })
}

/// Topic page with its tag filter and the (optionally tag-filtered) blogs.
#[instrument(skip(api))]
pub async fn topic_detail(
    api: &dyn BlogApi,
    raw_id: &str,
    slug: &str,
    selected_tag: Option<i64>,
) -> PageOutcome {
    let Some(id) = parse_id(raw_id) else {
        return PageOutcome::NotFound;
    };
    settle(build_topic(api, id, slug, selected_tag).await)
}

async fn build_topic(
    api: &dyn BlogApi,
    id: i64,
    slug: &str,
    selected_tag: Option<i64>,
) -> Result<PageOutcome, PageError> {
    let Some(topic) = api.fetch_topic(id).await?.into_record()? else {
        return Ok(PageOutcome::NotFound);
    };

    if topic.slug != slug {
        debug!(id, requested = slug, canonical = %topic.slug, "stale topic slug");
        return Ok(PageOutcome::Redirect(topic.path()));
    }

    let tags = api.fetch_tags(topic.id).await?.into_list()?;
    let blogs = api.fetch_blogs(topic.id, selected_tag).await?.into_list()?;
    let cards = blogs
        .iter()
        .map(blog_link_card)
        .collect::<Result<Vec<_>, _>>()?;

    let body = TopicPage {
        topic: &topic,
        filter: TagFilterBar::new(&topic, &tags, selected_tag),
        cards,
    }
    .render()?;
    Ok(PageOutcome::Render(Page::new(Some(topic.name.clone()), body)))
}

/// Blog page with its rendered content.
#[instrument(skip(api, site, source))]
pub async fn blog_detail(
    api: &dyn BlogApi,
    site: &SiteInfo,
    raw_id: &str,
    slug: &str,
    source: ContentSource,
) -> PageOutcome {
    let Some(id) = parse_id(raw_id) else {
        return PageOutcome::NotFound;
    };
    settle(build_blog(api, site, id, slug, source).await)
}

async fn build_blog(
    api: &dyn BlogApi,
    site: &SiteInfo,
    id: i64,
    slug: &str,
    source: ContentSource,
) -> Result<PageOutcome, PageError> {
    let Some(blog) = api.fetch_blog(id, source.parsed()).await?.into_record()? else {
        return Ok(PageOutcome::NotFound);
    };

    if blog.slug != slug {
        debug!(id, requested = slug, canonical = %blog.slug, "stale blog slug");
        return Ok(PageOutcome::Redirect(blog.path()));
    }

    let content = Markdown::new(&blog.content, source);
    let body = BlogPage::new(&blog, site.author.as_deref(), content).render()?;
    Ok(PageOutcome::Render(Page::new(Some(blog.title.clone()), body)))
}
