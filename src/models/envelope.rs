use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::common::PageError;

/// The `{status, msg, error}` wrapper every backend endpoint responds with.
///
/// `msg` is only decoded when `status < 400`; failed responses carry an empty
/// string there, which would not fit `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub status: u16,
    pub msg: Option<T>,
    pub error: Option<String>,
}

#[derive(Deserialize)]
struct RawEnvelope {
    status: u16,
    #[serde(default)]
    msg: serde_json::Value,
    #[serde(default)]
    error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(msg: T) -> Self {
        Self {
            status: 200,
            msg: Some(msg),
            error: None,
        }
    }

    pub fn failed(status: u16, error: impl Into<String>) -> Self {
        Self {
            status,
            msg: None,
            error: Some(error.into()),
        }
    }

    pub fn is_server_failure(&self) -> bool {
        self.status >= 500
    }

    pub fn is_missing(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Interprets a single-record response: `Ok(None)` when the backend
    /// reports the record absent, `Err` when the render must fail.
    pub fn into_record(self) -> Result<Option<T>, PageError> {
        if self.is_server_failure() {
            return Err(self.into_backend_error());
        }
        if self.is_missing() {
            return Ok(None);
        }
        match self.msg {
            Some(msg) => Ok(Some(msg)),
            None => Err(PageError::MissingPayload {
                status: self.status,
            }),
        }
    }

    fn into_backend_error(self) -> PageError {
        PageError::Backend {
            status: self.status,
            message: self.error.unwrap_or_default(),
        }
    }
}

impl<T: Default> Envelope<T> {
    /// Interprets a list response. Only server failures are fatal; anything
    /// else without a payload is an empty list.
    pub fn into_list(self) -> Result<T, PageError> {
        if self.is_server_failure() {
            return Err(self.into_backend_error());
        }
        Ok(self.msg.unwrap_or_default())
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let raw: RawEnvelope = serde_json::from_slice(body)?;
        let msg = if raw.status < 400 && !raw.msg.is_null() {
            Some(serde_json::from_value(raw.msg)?)
        } else {
            None
        };

        Ok(Self {
            status: raw.status,
            msg,
            error: raw.error.filter(|e| !e.is_empty()),
        })
    }
}
