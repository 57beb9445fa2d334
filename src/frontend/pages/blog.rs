use askama::Template;

use crate::frontend::components::{Markdown, TagBadgeList, TopicBadgeList};
use crate::frontend::display_date;
use crate::models::Blog;

#[derive(Template)]
#[template(path = "pages/blog.html")]
pub struct BlogPage<'a> {
    pub blog: &'a Blog,
    pub author: Option<&'a str>,
    pub created: String,
    pub updated: String,
    pub topics: TopicBadgeList<'a>,
    pub tags: TagBadgeList<'a>,
    pub content: Markdown,
}

impl<'a> BlogPage<'a> {
    pub fn new(blog: &'a Blog, author: Option<&'a str>, content: Markdown) -> Self {
        Self {
            blog,
            author,
            created: display_date(&blog.created_at),
            updated: display_date(&blog.updated_at),
            topics: TopicBadgeList {
                topics: &blog.topics,
            },
            tags: TagBadgeList { tags: &blog.tags },
            content,
        }
    }
}
