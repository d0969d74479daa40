use crate::{error::Error, request::Request, response::Response};
use curl::easy::{Easy2, Handler, WriteError};
use log::{debug, trace};

/// Something that can carry out one [`Request`] and report the transport-level outcome.
///
/// [`crate::http::Gateway`] is generic over this so the network step can be swapped for a
/// stub. Any `Fn(&Request) -> Result<Response, Error>` is a `Transfer`.
pub trait Transfer {
    /// Perform exactly one transfer.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when no well-formed reply was obtained.
    fn perform(&self, request: &Request) -> Result<Response, Error>;
}

impl<F> Transfer for F
where
    F: Fn(&Request) -> Result<Response, Error>,
{
    fn perform(&self, request: &Request) -> Result<Response, Error> {
        self(request)
    }
}

/// The libcurl-backed [`Transfer`]: a fresh easy handle per call via [`download`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlTransfer;

impl Transfer for CurlTransfer {
    fn perform(&self, request: &Request) -> Result<Response, Error> {
        download(request)
    }
}

/// Byte sink registered as the handle's write callback.
#[derive(Default)]
struct Collector {
    bytes: Vec<u8>,
}

impl Handler for Collector {
    fn write(&mut self, data: &[u8]) -> Result<usize, WriteError> {
        trace!("received {} bytes", data.len());
        self.bytes.extend_from_slice(data);
        // Anything other than the full chunk length makes libcurl abort the transfer.
        Ok(data.len())
    }
}

/// One easy handle, configured for a single request.
struct EasyHandle {
    easy: Easy2<Collector>,
}

impl EasyHandle {
    fn new(request: &Request) -> Result<Self, Error> {
        let mut easy = Easy2::new(Collector::default());
        easy.url(&request.url)?;
        if !request.user_agent.is_empty() {
            easy.useragent(&request.user_agent)?;
        }
        Ok(Self { easy })
    }

    fn perform(mut self) -> Result<Response, Error> {
        self.easy.perform()?;
        let code = self.easy.response_code()?;
        let bytes = std::mem::take(&mut self.easy.get_mut().bytes);
        Ok(Response {
            code: i64::from(code),
            bytes,
        })
    }
}

/// Perform a single blocking transfer for `request`.
///
/// A new libcurl easy handle is created for the call and released before returning, so
/// concurrent calls on separate threads never share a handle. There are no retries and no
/// timeout beyond libcurl's defaults.
///
/// The process-wide libcurl state should be held for the duration with a
/// [`crate::Curl`] guard.
///
/// # Errors
///
/// Returns an [`Error`] carrying libcurl's code and error-buffer text when the transfer
/// could not produce a reply. HTTP error statuses are returned as an `Ok` [`Response`].
pub fn download(request: &Request) -> Result<Response, Error> {
    debug!(
        "downloading {} (user agent: {})",
        request.url,
        if request.user_agent.is_empty() {
            "<default>"
        } else {
            request.user_agent.as_str()
        }
    );

    let result = EasyHandle::new(request).and_then(EasyHandle::perform);
    match &result {
        Ok(response) => debug!(
            "{} returned status {} with {} bytes",
            request.url,
            response.code,
            response.bytes.len()
        ),
        Err(err) => debug!("transfer of {} failed: {}", request.url, err),
    }
    result
}
