use askama::Template;

use crate::models::{Tag, Topic};

/// Inert tag pills.
#[derive(Template)]
#[template(path = "components/tag_badges.html")]
pub struct TagBadgeList<'a> {
    pub tags: &'a [Tag],
}

/// Topic pills, each linking to its topic page.
#[derive(Template)]
#[template(path = "components/topic_badges.html")]
pub struct TopicBadgeList<'a> {
    pub topics: &'a [Topic],
}
