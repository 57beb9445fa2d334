use askama::Template;

use crate::common::SiteInfo;
use crate::frontend::components::LinkCard;

/// Home page: one card per topic.
#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomePage<'a> {
    pub site: &'a SiteInfo,
    pub cards: Vec<LinkCard>,
}
