//! 404 view

use askama::Template;

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundPage;
