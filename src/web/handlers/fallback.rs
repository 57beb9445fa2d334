use actix_web::{get, web, HttpResponse};

use crate::web::forms::ErrorQuery;
use crate::web::helpers::{render_error, render_not_found};
use crate::web::state::AppState;

#[get("/404")]
pub async fn not_found_page(state: web::Data<AppState>) -> HttpResponse {
    render_not_found(&state.site)
}

#[get("/error")]
pub async fn error_page(
    state: web::Data<AppState>,
    query: web::Query<ErrorQuery>,
) -> HttpResponse {
    render_error(&state.site, query.retry_href())
}

/// Default service for anything no route matched.
pub async fn unmatched(state: web::Data<AppState>) -> HttpResponse {
    render_not_found(&state.site)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(not_found_page).service(error_page);
}
