use askama::Template;

use crate::models::{Tag, Topic};

pub struct TagControl {
    pub href: String,
    pub label: String,
    pub selected: bool,
}

/// The "All" control followed by one control per tag of the topic.
#[derive(Template)]
#[template(path = "components/tag_filter.html")]
pub struct TagFilterBar {
    pub all_href: String,
    pub controls: Vec<TagControl>,
}

impl TagFilterBar {
    pub fn new(topic: &Topic, tags: &[Tag], selected: Option<i64>) -> Self {
        let base = topic.path();
        let controls = tags
            .iter()
            .map(|tag| {
                let selected = selected == Some(tag.id);
                TagControl {
                    href: format!("{base}?tag={}", tag.id),
                    label: if selected {
                        format!("[ {} ]", tag.name)
                    } else {
                        tag.name.clone()
                    },
                    selected,
                }
            })
            .collect();

        Self {
            all_href: base,
            controls,
        }
    }
}
