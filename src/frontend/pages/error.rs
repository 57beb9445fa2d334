//! Fallback view for failed renders

use askama::Template;

/// Never shows what went wrong; `retry_href` points back at the request
/// that failed.
#[derive(Template)]
#[template(path = "pages/error.html")]
pub struct ErrorPage {
    pub retry_href: String,
}
