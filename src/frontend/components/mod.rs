//! Reusable markup pieces shared by the Coding Notes pages

mod badges;
mod cards;
mod footer;
mod link_card;
mod markdown;
mod nav;
mod tag_filter;

pub use badges::{TagBadgeList, TopicBadgeList};
pub use cards::{blog_link_card, topic_link_card, BlogCard, TopicCard};
pub use footer::Footer;
pub use link_card::LinkCard;
pub use markdown::{markdown_to_html, ContentSource, Markdown, MarkdownStyle, CONTENT_STYLE};
pub use nav::Nav;
pub use tag_filter::{TagControl, TagFilterBar};
