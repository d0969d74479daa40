use super::status::{Category, Status};
use core::fmt;

/// Where an [`HttpError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorType {
    /// The remote replied with a 4xx or 5xx status
    #[default]
    Http,
    /// The transfer itself failed; no reply was obtained
    Curl,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::Http => write!(f, "http"),
            ErrorType::Curl => write!(f, "curl"),
        }
    }
}

/// Failure returned by [`super::Gateway`].
///
/// `code` is the HTTP status for [`ErrorType::Http`] and the libcurl code for
/// [`ErrorType::Curl`]. `text` is the full message, prefix included.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{text}")]
pub struct HttpError {
    /// HTTP status or libcurl code, depending on `error_type`
    pub code: i64,
    /// Full message, prefix included
    pub text: String,
    /// Whether the remote or the transfer failed
    pub error_type: ErrorType,
}

impl HttpError {
    /// An [`ErrorType::Http`] error for `status`, with `body` appended after the
    /// `http client error (<code>):` style prefix.
    #[must_use]
    pub fn from_status(status: Status, body: &str) -> Self {
        let prefix = match status.category() {
            Category::ClientError => "http client",
            Category::ServerError => "http server",
            _ => "http",
        };
        HttpError {
            code: status.code(),
            text: format!("{prefix} error ({}):\n{body}", status.code()),
            error_type: ErrorType::Http,
        }
    }

    #[must_use]
    pub fn is_http(&self) -> bool {
        self.error_type == ErrorType::Http
    }

    #[must_use]
    pub fn is_curl(&self) -> bool {
        self.error_type == ErrorType::Curl
    }
}

impl From<crate::Error> for HttpError {
    fn from(err: crate::Error) -> Self {
        HttpError {
            code: err.code.0,
            text: format!("curl error ({}):\n{}", err.code, err.text),
            error_type: ErrorType::Curl,
        }
    }
}
