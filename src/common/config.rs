use std::net::SocketAddr;
use std::path::PathBuf;

use url::Url;

use super::ConfigError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_STATIC_DIR: &str = "./static";
const DEFAULT_SITE_TITLE: &str = "Coding Notes";

/// Who the site belongs to. Everything but the title is optional and only
/// rendered when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteInfo {
    pub title: String,
    pub author: Option<String>,
    pub email: Option<String>,
    pub github_url: Option<String>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: DEFAULT_SITE_TITLE.to_string(),
            author: None,
            email: None,
            github_url: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_base_url: Url,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    /// Ask the backend for pre-rendered HTML instead of raw Markdown.
    pub backend_renders_markdown: bool,
    pub site: SiteInfo,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source. Blank values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let raw_base = get("BACKEND_BASE_URL").ok_or(ConfigError::Missing("BACKEND_BASE_URL"))?;
        let backend_base_url = Url::parse(&raw_base).map_err(|_| ConfigError::InvalidUrl {
            var: "BACKEND_BASE_URL",
            value: raw_base.clone(),
        })?;

        let raw_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr {
                var: "BIND_ADDR",
                value: raw_addr.clone(),
            })?;

        let backend_renders_markdown = match get("BACKEND_RENDERS_MARKDOWN") {
            Some(raw) => parse_bool("BACKEND_RENDERS_MARKDOWN", &raw)?,
            None => false,
        };

        Ok(Self {
            backend_base_url,
            bind_addr,
            static_dir: PathBuf::from(
                get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            ),
            backend_renders_markdown,
            site: SiteInfo {
                title: get("SITE_TITLE").unwrap_or_else(|| DEFAULT_SITE_TITLE.to_string()),
                author: get("SITE_AUTHOR"),
                email: get("SITE_EMAIL"),
                github_url: get("SITE_GITHUB_URL"),
            },
        })
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: raw.to_string(),
        }),
    }
}
