pub mod blogs;
pub mod fallback;
pub mod home;
pub mod topics;

use actix_web::web;

/// Registers every page route and the not-found default service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    home::configure(cfg);
    topics::configure(cfg);
    blogs::configure(cfg);
    fallback::configure(cfg);
    cfg.default_service(web::to(fallback::unmatched));
}
