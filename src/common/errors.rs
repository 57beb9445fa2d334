use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid backend URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything that turns a page render into the error view.
#[derive(Error, Debug)]
pub enum PageError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Backend reported status {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("Backend returned status {status} without a payload")]
    MissingPayload { status: u16 },

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is not a valid URL: {value}")]
    InvalidUrl { var: &'static str, value: String },

    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be true or false, got {value}")]
    InvalidBool { var: &'static str, value: String },
}
