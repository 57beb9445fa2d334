use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::services;
use crate::web::forms::TopicQuery;
use crate::web::helpers::respond;
use crate::web::state::AppState;

#[get("/topics/{id}")]
pub async fn topic_resolver(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    let outcome = services::resolve_topic(state.api.as_ref(), &id).await;
    respond(&req, &state.site, outcome)
}

#[get("/topics/{id}/{slug}")]
pub async fn topic_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
    query: web::Query<TopicQuery>,
) -> HttpResponse {
    let (id, slug) = path.into_inner();
    let outcome =
        services::topic_detail(state.api.as_ref(), &id, &slug, query.selected_tag()).await;
    respond(&req, &state.site, outcome)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(topic_resolver).service(topic_page);
}
