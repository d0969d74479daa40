use super::{error::HttpError, status::Status};

/// A payload of type `T` with the status it arrived with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse<T> {
    /// The response body, as bytes or text
    pub payload: T,
    /// Status the remote replied with
    pub status: Status,
}

/// Result of a [`super::Gateway`] call.
pub type HttpResult<T> = Result<HttpResponse<T>, HttpError>;

impl<T> HttpResponse<T> {
    #[must_use]
    pub fn new(payload: T, status: Status) -> Self {
        Self { payload, status }
    }

    /// Same status, different payload.
    #[must_use]
    pub fn rewrap<U>(&self, payload: U) -> HttpResponse<U> {
        HttpResponse {
            payload,
            status: self.status,
        }
    }

    /// Transform the payload, keeping the status.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> HttpResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        HttpResponse {
            payload: f(self.payload),
            status: self.status,
        }
    }

    /// An [`ErrorType::Http`](super::ErrorType::Http) error with this response's status
    /// code and the given text.
    #[must_use]
    pub fn rewrap_as_error(&self, text: impl Into<String>) -> HttpError {
        HttpError {
            code: self.status.code(),
            text: text.into(),
            error_type: super::ErrorType::Http,
        }
    }
}

impl<T: AsRef<[u8]>> HttpResponse<T> {
    /// Turn a 4xx/5xx response into an [`HttpError`] whose text ends with the body.
    ///
    /// # Errors
    ///
    /// Returns the error when [`Status::is_error`] holds; any other status passes through.
    pub fn error_for_status(self) -> HttpResult<T> {
        if !self.status.is_error() {
            return Ok(self);
        }
        let body = crate::as_text(self.payload.as_ref());
        Err(HttpError::from_status(self.status, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ErrorType;

    #[test]
    fn test_rewrap_keeps_status() {
        let response = HttpResponse::new(vec![1u8, 2, 3], Status::new(201));
        let rewrapped = response.rewrap("three");
        assert_eq!(rewrapped.payload, "three");
        assert_eq!(rewrapped.status, Status::new(201));
    }

    #[test]
    fn test_map_keeps_status() {
        let response = HttpResponse::new(b"abc".to_vec(), Status::new(202));
        let mapped = response.map(|bytes| bytes.len());
        assert_eq!(mapped.payload, 3);
        assert_eq!(mapped.status.code(), 202);
    }

    #[test]
    fn test_rewrap_as_error() {
        let response = HttpResponse::new((), Status::new(418));
        let err = response.rewrap_as_error("teapot");
        assert_eq!(err.code, 418);
        assert_eq!(err.text, "teapot");
        assert_eq!(err.error_type, ErrorType::Http);
    }

    #[test]
    fn test_error_for_status() {
        let ok = HttpResponse::new(b"ok".to_vec(), Status::OK);
        assert!(ok.error_for_status().is_ok());

        let redirect = HttpResponse::new(Vec::new(), Status::new(301));
        assert!(redirect.error_for_status().is_ok());

        let missing = HttpResponse::new(b"not found".to_vec(), Status::new(404));
        let err = missing.error_for_status().unwrap_err();
        assert_eq!(err.code, 404);
        assert_eq!(err.text, "http client error (404):\nnot found");
    }
}
