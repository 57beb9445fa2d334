use askama::Template;

use super::{LinkCard, TagBadgeList};
use crate::models::{Blog, Topic};

#[derive(Template)]
#[template(path = "components/topic_card.html")]
pub struct TopicCard<'a> {
    pub topic: &'a Topic,
}

/// Listing entry for a blog: pin marker, title, description and tags.
#[derive(Template)]
#[template(path = "components/blog_card.html")]
pub struct BlogCard<'a> {
    pub blog: &'a Blog,
    pub tags: TagBadgeList<'a>,
}

pub fn topic_link_card(topic: &Topic) -> askama::Result<LinkCard> {
    LinkCard::wrap(topic.path(), &TopicCard { topic })
}

pub fn blog_link_card(blog: &Blog) -> askama::Result<LinkCard> {
    let card = BlogCard {
        blog,
        tags: TagBadgeList { tags: &blog.tags },
    };
    LinkCard::wrap(blog.path(), &card)
}
