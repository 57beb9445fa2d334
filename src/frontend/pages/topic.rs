use askama::Template;

use crate::frontend::components::{LinkCard, TagFilterBar};
use crate::models::Topic;

#[derive(Template)]
#[template(path = "pages/topic.html")]
pub struct TopicPage<'a> {
    pub topic: &'a Topic,
    pub filter: TagFilterBar,
    pub cards: Vec<LinkCard>,
}
