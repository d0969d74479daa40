/// Outcome of a transfer that reached the remote.
///
/// Any reply counts here, including `404` or `500`; classifying the status is left to
/// [`crate::http::Gateway`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// The final HTTP status code
    pub code: i64,
    /// The body, concatenated in the order libcurl delivered it
    pub bytes: Vec<u8>,
}

impl Response {
    #[must_use]
    pub fn new(code: i64, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            code,
            bytes: bytes.into(),
        }
    }

    /// The body viewed as text. See [`crate::as_text`].
    #[must_use]
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        crate::as_text(&self.bytes)
    }
}
