//! # Downloader
//!
//! A small, blocking HTTP GET client on top of libcurl.
//!
//! The crate has two layers:
//!
//! - **Transfer** - [`download`] performs exactly one transfer for a [`Request`] on its own
//!   libcurl easy handle and returns either a [`Response`] (any status the remote sent,
//!   with the full body) or a transport-level [`Error`].
//! - **HTTP** - [`http::Gateway`] builds the URL from an [`http::HttpRequest`], runs the
//!   transfer, classifies the [`http::Status`] and folds transport failures and 4xx/5xx
//!   replies into a single [`http::HttpError`].
//!
//! libcurl's process-wide state is held by a [`Curl`] guard, created once by the program
//! before any transfer starts and dropped after the last one ends.
//!
//! ## Key Features
//!
//! - One handle per transfer, so calls on separate threads never share state
//! - Status categories (informational, successful, redirection, client error, server error)
//! - Order-preserving query building
//! - A swappable [`Transfer`] step for testing without a network
//!
//! There are no retries, no timeouts beyond libcurl's defaults, no redirect policy and no
//! headers other than `User-Agent`.
//!
//! ## Example
//!
//! ```no_run
//! use downloader::{Curl, http::{Gateway, HttpRequest}};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let _curl = Curl::new()?;
//!     let gateway = Gateway::new();
//!
//!     let request = HttpRequest::new("http://example.org/search")
//!         .query("q", "rust")
//!         .user_agent("downloader/0.1");
//!
//!     let response = gateway.get_string(request)?;
//!     println!("{} ({})", response.status, response.status.category());
//!     println!("{}", response.payload);
//!     Ok(())
//! }
//! ```

use std::borrow::Cow;

mod error;
mod guard;
pub mod http;
mod request;
mod response;
mod transfer;

pub use error::{CurlCode, Error};
pub use guard::Curl;
pub use request::Request;
pub use response::Response;
pub use transfer::{CurlTransfer, Transfer, download};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// View a body as text.
///
/// Valid UTF-8 is borrowed as-is; invalid sequences are replaced with `U+FFFD`.
#[must_use]
pub fn as_text(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_text() {
        assert!(matches!(as_text(b"hello"), Cow::Borrowed("hello")));
        assert_eq!(as_text(b""), "");
        assert_eq!(as_text(&[0x66, 0x80]), "f\u{fffd}");
    }

    #[test]
    fn test_response_text() {
        let response = Response::new(200, "body");
        assert_eq!(response.text(), "body");
    }
}
