use askama::Template;

use crate::common::SiteInfo;

#[derive(Template)]
#[template(path = "components/nav.html")]
pub struct Nav<'a> {
    pub site: &'a SiteInfo,
}
