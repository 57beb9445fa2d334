use askama::Template;
use chrono::{Datelike, Local};

use crate::common::SiteInfo;

#[derive(Template)]
#[template(path = "components/footer.html")]
pub struct Footer<'a> {
    pub site: &'a SiteInfo,
    pub year: i32,
}

impl<'a> Footer<'a> {
    pub fn new(site: &'a SiteInfo) -> Self {
        Self {
            site,
            year: Local::now().year(),
        }
    }
}
