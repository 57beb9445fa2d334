use std::sync::Arc;

use crate::api::BlogApi;
use crate::common::{Config, SiteInfo};
use crate::frontend::components::ContentSource;

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn BlogApi>,
    pub site: SiteInfo,
    pub content_source: ContentSource,
}

impl AppState {
    pub fn new(api: Arc<dyn BlogApi>, config: &Config) -> Self {
        Self {
            api,
            site: config.site.clone(),
            content_source: ContentSource::from_backend_rendering(config.backend_renders_markdown),
        }
    }
}
