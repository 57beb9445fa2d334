use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::services;
use crate::web::helpers::respond;
use crate::web::state::AppState;

#[get("/")]
pub async fn home(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let outcome = services::home(state.api.as_ref(), &state.site).await;
    respond(&req, &state.site, outcome)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
}
