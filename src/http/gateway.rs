use super::{
    request::HttpRequest,
    response::{HttpResponse, HttpResult},
    status::Status,
};
use crate::{
    error::Error,
    request::Request,
    response::Response,
    transfer::{CurlTransfer, Transfer},
};
use log::debug;

/// Typed HTTP GET on top of a [`Transfer`].
///
/// The gateway builds the final URL from an [`HttpRequest`], hands it to its transfer and
/// folds the two failure modes into one [`super::HttpError`]:
///
/// - the transfer failed: [`ErrorType::Curl`](super::ErrorType::Curl), code is libcurl's,
///   text is `curl error (<code>):\n<message>`
/// - the remote replied 4xx/5xx: [`ErrorType::Http`](super::ErrorType::Http), code is the
///   status, text is `http client error (<code>):\n<body>` (or `http server ...`)
///
/// Everything else, including 1xx and 3xx, is a success.
///
/// # Examples
///
/// ```no_run
/// use downloader::{Curl, http::{Gateway, HttpRequest}};
///
/// let _curl = Curl::new().expect("libcurl init");
/// let gateway = Gateway::new();
/// let request = HttpRequest::new("https://httpbin.org/get")
///     .query("page", "2")
///     .user_agent("downloader-example");
///
/// match gateway.get_string(request) {
///     Ok(response) => println!("{}: {}", response.status, response.payload),
///     Err(err) => eprintln!("{} ({})", err, err.error_type),
/// }
/// ```
///
/// A stub transfer, for code that should not touch the network:
///
/// ```
/// use downloader::{Error, Request, Response, http::{Gateway, HttpRequest}};
///
/// let gateway = Gateway::with_transfer(|_: &Request| -> Result<Response, Error> {
///     Ok(Response::new(200, "ok"))
/// });
/// let response = gateway.get_string(HttpRequest::new("http://stub")).unwrap();
/// assert_eq!(response.payload, "ok");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Gateway<T = CurlTransfer> {
    transfer: T,
}

impl Gateway {
    /// A gateway performing real transfers through libcurl.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transfer: CurlTransfer,
        }
    }
}

impl<T: Transfer> Gateway<T> {
    /// A gateway that performs its transfers with `transfer`.
    #[must_use]
    pub fn with_transfer(transfer: T) -> Self {
        Self { transfer }
    }

    /// Fetch `request` and return the body bytes.
    ///
    /// An empty `base_url` returns `Ok(HttpResponse::default())` without performing a
    /// transfer.
    ///
    /// # Errors
    ///
    /// Returns an [`super::HttpError`] on transport failure or a 4xx/5xx status.
    pub fn get_bytes(&self, request: HttpRequest) -> HttpResult<Vec<u8>> {
        if request.base_url.is_empty() {
            debug!("empty base url, nothing to fetch");
            return Ok(HttpResponse::default());
        }

        let download_request = Request {
            url: request.build_url(),
            user_agent: request.user_agent,
        };

        let response = self.perform_download(&download_request)?;
        let response = HttpResponse::new(response.bytes, Status::new(response.code));
        response.error_for_status().inspect_err(|err| {
            debug!("{} answered with error status {}", download_request.url, err.code);
        })
    }

    /// Fetch `request` and return the body as text.
    ///
    /// Bytes that are not valid UTF-8 are replaced with `U+FFFD`.
    ///
    /// # Errors
    ///
    /// Same as [`Gateway::get_bytes`]; errors are passed through unchanged.
    pub fn get_string(&self, request: HttpRequest) -> HttpResult<String> {
        let response = self.get_bytes(request)?;
        let text = crate::as_text(&response.payload).into_owned();
        Ok(response.rewrap(text))
    }

    fn perform_download(&self, request: &Request) -> Result<Response, Error> {
        self.transfer.perform(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CurlCode;
    use crate::http::{Category, ErrorType};
    use std::cell::RefCell;

    fn stub(result: Result<Response, Error>) -> impl Fn(&Request) -> Result<Response, Error> {
        move |_| result.clone()
    }

    #[test]
    fn test_empty_base_url_is_default_success() {
        let gateway = Gateway::with_transfer(|_: &Request| -> Result<Response, Error> {
            panic!("no transfer expected for an empty base url")
        });
        let response = gateway.get_bytes(HttpRequest::default()).unwrap();
        assert!(response.payload.is_empty());
        assert_eq!(response.status, Status::default());

        let response = gateway
            .get_string(HttpRequest::new("").query("a", "1"))
            .unwrap();
        assert!(response.payload.is_empty());
    }

    #[test]
    fn test_transport_failure() {
        let gateway = Gateway::with_transfer(stub(Err(Error::new(
            CurlCode::COULDNT_CONNECT,
            "couldn't connect",
        ))));
        let err = gateway.get_bytes(HttpRequest::new("http://x")).unwrap_err();
        assert_eq!(err.error_type, ErrorType::Curl);
        assert_eq!(err.code, 7);
        assert!(err.text.contains("curl error (7):"));
        assert!(err.text.contains("couldn't connect"));
    }

    #[test]
    fn test_client_error_status() {
        let gateway = Gateway::with_transfer(stub(Ok(Response::new(404, "not found"))));
        let err = gateway.get_bytes(HttpRequest::new("http://x")).unwrap_err();
        assert_eq!(err.error_type, ErrorType::Http);
        assert_eq!(err.code, 404);
        assert!(err.text.contains("http client error (404):"));
        assert!(err.text.contains("not found"));
    }

    #[test]
    fn test_server_error_status() {
        let gateway = Gateway::with_transfer(stub(Ok(Response::new(502, "bad gateway"))));
        let err = gateway.get_string(HttpRequest::new("http://x")).unwrap_err();
        assert_eq!(err.error_type, ErrorType::Http);
        assert_eq!(err.code, 502);
        assert_eq!(err.text, "http server error (502):\nbad gateway");
    }

    #[test]
    fn test_get_string_success() {
        let gateway = Gateway::with_transfer(stub(Ok(Response::new(200, "ok"))));
        let response = gateway.get_string(HttpRequest::new("http://x")).unwrap();
        assert_eq!(response.payload, "ok");
        assert!(response.status.is_success());
    }

    #[test]
    fn test_non_error_statuses_pass_through() {
        for code in [100, 204, 304, 0, 600] {
            let gateway = Gateway::with_transfer(stub(Ok(Response::new(code, "body"))));
            let response = gateway.get_bytes(HttpRequest::new("http://x")).unwrap();
            assert_eq!(response.status.code(), code);
            assert_eq!(response.payload, b"body");
        }
        let gateway = Gateway::with_transfer(stub(Ok(Response::new(301, ""))));
        let response = gateway.get_bytes(HttpRequest::new("http://x")).unwrap();
        assert_eq!(response.status.category(), Category::Redirection);
    }

    #[test]
    fn test_get_string_keeps_status() {
        let gateway = Gateway::with_transfer(stub(Ok(Response::new(203, "cached"))));
        let response = gateway.get_string(HttpRequest::new("http://x")).unwrap();
        assert_eq!(response.payload, "cached");
        assert_eq!(response.status, Status::new(203));
    }

    #[test]
    fn test_get_string_invalid_utf8() {
        let gateway = Gateway::with_transfer(stub(Ok(Response::new(200, vec![b'o', 0xff, b'k']))));
        let response = gateway.get_string(HttpRequest::new("http://x")).unwrap();
        assert_eq!(response.payload, "o\u{fffd}k");
    }

    #[test]
    fn test_transfer_sees_built_request() {
        let seen = RefCell::new(Vec::new());
        let gateway = Gateway::with_transfer(|request: &Request| -> Result<Response, Error> {
            seen.borrow_mut().push(request.clone());
            Ok(Response::new(200, ""))
        });
        let request = HttpRequest::new("http://x/api")
            .query("a", "1")
            .query("b", "2")
            .user_agent("agent/1.0");
        gateway.get_bytes(request).unwrap();
        drop(gateway);

        let seen = seen.into_inner();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].url, "http://x/api?a=1&b=2");
        assert_eq!(seen[0].user_agent, "agent/1.0");
    }
}
