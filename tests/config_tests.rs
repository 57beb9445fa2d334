#[cfg(test)]
pub mod config_tests {
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::path::PathBuf;

    use codingnotes::common::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = config_from(&[("BACKEND_BASE_URL", "http://backend:8080")]).unwrap();

        assert_eq!(config.backend_base_url.as_str(), "http://backend:8080/");
        assert_eq!(
            config.bind_addr,
            "0.0.0.0:8080".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(config.static_dir, PathBuf::from("./static"));
        assert!(!config.backend_renders_markdown);
        assert_eq!(config.site, SiteInfo::default());
        assert_eq!(config.site.title, "Coding Notes");
    }

    #[test]
    fn test_config_reads_every_variable() {
        let config = config_from(&[
            ("BACKEND_BASE_URL", "https://api.example.com/v1"),
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("STATIC_DIR", "/srv/static"),
            ("BACKEND_RENDERS_MARKDOWN", "TRUE"),
            ("SITE_TITLE", "Notes"),
            ("SITE_AUTHOR", "Alex"),
            ("SITE_EMAIL", "alex@example.com"),
            ("SITE_GITHUB_URL", "https://github.com/example"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
        assert!(config.backend_renders_markdown);
        assert_eq!(config.site.title, "Notes");
        assert_eq!(config.site.author.as_deref(), Some("Alex"));
        assert_eq!(config.site.email.as_deref(), Some("alex@example.com"));
        assert_eq!(
            config.site.github_url.as_deref(),
            Some("https://github.com/example")
        );
    }

    #[test]
    fn test_config_requires_backend_url() {
        assert_eq!(
            config_from(&[]).unwrap_err(),
            ConfigError::Missing("BACKEND_BASE_URL")
        );
        assert_eq!(
            config_from(&[("BACKEND_BASE_URL", "   ")]).unwrap_err(),
            ConfigError::Missing("BACKEND_BASE_URL")
        );
    }

    #[test]
    fn test_config_rejects_invalid_values() {
        assert!(matches!(
            config_from(&[("BACKEND_BASE_URL", "not a url")]),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            config_from(&[
                ("BACKEND_BASE_URL", "http://backend"),
                ("BIND_ADDR", "localhost")
            ]),
            Err(ConfigError::InvalidAddr { .. })
        ));
        assert!(matches!(
            config_from(&[
                ("BACKEND_BASE_URL", "http://backend"),
                ("BACKEND_RENDERS_MARKDOWN", "sometimes")
            ]),
            Err(ConfigError::InvalidBool { .. })
        ));
    }

    #[test]
    fn test_blank_optional_values_count_as_unset() {
        let config = config_from(&[
            ("BACKEND_BASE_URL", "http://backend"),
            ("SITE_AUTHOR", ""),
            ("SITE_TITLE", " "),
        ])
        .unwrap();

        assert_eq!(config.site.author, None);
        assert_eq!(config.site.title, "Coding Notes");
    }
}
