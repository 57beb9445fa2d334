use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::services;
use crate::web::helpers::respond;
use crate::web::state::AppState;

#[get("/blogs/{id}")]
pub async fn blog_resolver(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    let outcome = services::resolve_blog(state.api.as_ref(), &id, state.content_source).await;
    respond(&req, &state.site, outcome)
}

#[get("/blogs/{id}/{slug}")]
pub async fn blog_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let (id, slug) = path.into_inner();
    let outcome = services::blog_detail(
        state.api.as_ref(),
        &state.site,
        &id,
        &slug,
        state.content_source,
    )
    .await;
    respond(&req, &state.site, outcome)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(blog_resolver).service(blog_page);
}
