use core::fmt;

/// Numeric result code reported by libcurl (`CURLcode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CurlCode(pub i64);

impl CurlCode {
    /// `CURLE_OK`
    pub const OK: CurlCode = CurlCode(0);
    /// `CURLE_URL_MALFORMAT`
    pub const URL_MALFORMAT: CurlCode = CurlCode(3);
    /// `CURLE_COULDNT_RESOLVE_HOST`
    pub const COULDNT_RESOLVE_HOST: CurlCode = CurlCode(6);
    /// `CURLE_COULDNT_CONNECT`
    pub const COULDNT_CONNECT: CurlCode = CurlCode(7);
}

impl From<CurlCode> for i64 {
    fn from(code: CurlCode) -> Self {
        code.0
    }
}

impl fmt::Display for CurlCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transport-level failure of a transfer.
///
/// Produced when libcurl could not obtain a well-formed reply at all (DNS failure,
/// connection refused, TLS handshake failure, malformed URL, ...). An HTTP error status
/// returned by the remote is *not* an `Error` at this level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("curl error ({code}): {text}")]
pub struct Error {
    /// Code returned by libcurl
    pub code: CurlCode,
    /// Diagnostic text, taken from the handle's error buffer when libcurl filled it
    pub text: String,
}

impl Error {
    #[must_use]
    pub fn new(code: CurlCode, text: impl Into<String>) -> Self {
        Self {
            code,
            text: text.into(),
        }
    }
}

impl From<curl::Error> for Error {
    fn from(err: curl::Error) -> Self {
        let text = err
            .extra_description()
            .filter(|extra| !extra.is_empty())
            .unwrap_or_else(|| err.description());
        Error {
            code: CurlCode(i64::from(err.code())),
            text: text.to_owned(),
        }
    }
}
