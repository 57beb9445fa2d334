use serde::Deserialize;

#[derive(Deserialize)]
pub struct TopicQuery {
    pub tag: Option<String>,
}

impl TopicQuery {
    /// The tag filter, ignoring values that are not tag ids.
    pub fn selected_tag(&self) -> Option<i64> {
        self.tag.as_deref().and_then(|t| t.trim().parse().ok())
    }
}

#[derive(Deserialize)]
pub struct ErrorQuery {
    pub retry: Option<String>,
}

impl ErrorQuery {
    /// Where "Try again" leads. Only local paths are accepted.
    pub fn retry_href(&self) -> String {
        match self.retry.as_deref().map(str::trim) {
            Some(path) if is_local_path(path) => path.to_string(),
            _ => "/".to_string(),
        }
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}
