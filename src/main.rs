use std::sync::Arc;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use codingnotes::api::HttpBlogApi;
use codingnotes::common::Config;
use codingnotes::web::{self, AccessLog, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env().map_err(|e| {
        error!(error = %e, "invalid configuration");
        std::io::Error::other(e.to_string())
    })?;

    let api = HttpBlogApi::new(&config.backend_base_url).map_err(|e| {
        error!(error = %e, "could not build the backend client");
        std::io::Error::other(e.to_string())
    })?;

    let state = Data::new(AppState::new(Arc::new(api), &config));
    let static_dir = config.static_dir.clone();

    info!(
        bind_addr = %config.bind_addr,
        backend = %config.backend_base_url,
        "starting server"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(AccessLog)
            .service(Files::new("/static", static_dir.clone()).prefer_utf8(true))
            .configure(web::configure)
    })
    .bind(config.bind_addr)?
    .run()
    .await
}
