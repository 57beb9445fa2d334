use actix_web::http::{header, StatusCode};
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;
use tracing::error;

use crate::common::SiteInfo;
use crate::frontend::pages::{ErrorPage, NotFoundPage};
use crate::frontend::Shell;
use crate::services::{Page, PageOutcome};

pub fn render_with_status<T: Template>(status: StatusCode, t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            error!(error = %e, "template rendering failed");
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Internal Server Error")
        }
    }
}

/// Wraps a page body in the site shell.
pub fn render_page(status: StatusCode, site: &SiteInfo, page: Page) -> HttpResponse {
    render_with_status(status, Shell::new(site, page.title.as_deref(), page.body))
}

/// Turns a page outcome into the response: the page itself, a redirect, the
/// 404 view or the error view.
pub fn respond(req: &HttpRequest, site: &SiteInfo, outcome: PageOutcome) -> HttpResponse {
    match outcome {
        PageOutcome::Render(page) => render_page(StatusCode::OK, site, page),
        PageOutcome::Redirect(location) => HttpResponse::TemporaryRedirect()
            .insert_header((header::LOCATION, location))
            .finish(),
        PageOutcome::NotFound => render_not_found(site),
        PageOutcome::Failure(err) => {
            error!(error = %err, path = %req.path(), "page render failed");
            render_error(site, retry_href(req))
        }
    }
}

pub fn render_not_found(site: &SiteInfo) -> HttpResponse {
    boundary(StatusCode::NOT_FOUND, site, "Not found", &NotFoundPage)
}

pub fn render_error(site: &SiteInfo, retry_href: String) -> HttpResponse {
    boundary(
        StatusCode::INTERNAL_SERVER_ERROR,
        site,
        "Error",
        &ErrorPage { retry_href },
    )
}

fn boundary<T: Template>(status: StatusCode, site: &SiteInfo, title: &str, view: &T) -> HttpResponse {
    match view.render() {
        Ok(body) => render_page(status, site, Page::new(Some(title.to_string()), body)),
        Err(e) => {
            error!(error = %e, "boundary view rendering failed");
            HttpResponse::build(status)
                .content_type("text/plain; charset=utf-8")
                .body(status.canonical_reason().unwrap_or("Error"))
        }
    }
}

/// The failed request itself, so "Try again" re-runs it.
pub fn retry_href(req: &HttpRequest) -> String {
    req.uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string())
}
