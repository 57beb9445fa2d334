//! Server-rendered views for Coding Notes

pub mod components;
pub mod pages;

mod dates;

pub use dates::display_date;

use askama::Template;

use crate::common::SiteInfo;
use components::{Footer, Nav};

/// HTML document every page body is embedded in.
#[derive(Template)]
#[template(path = "shell.html")]
pub struct Shell<'a> {
    pub title: String,
    pub description: String,
    pub nav: Nav<'a>,
    pub footer: Footer<'a>,
    pub body: String,
}

impl<'a> Shell<'a> {
    /// `page_title` is prefixed to the site title when present.
    pub fn new(site: &'a SiteInfo, page_title: Option<&str>, body: String) -> Self {
        let title = match page_title {
            Some(page_title) => format!("{page_title} | {}", site.title),
            None => site.title.clone(),
        };

        Self {
            title,
            description: format!("{}: a place to document things I have learned", site.title),
            nav: Nav { site },
            footer: Footer::new(site),
            body,
        }
    }
}
