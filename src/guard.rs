use crate::error::Error;
use core::marker::PhantomData;
use log::debug;

/// Scoped hold on libcurl's process-wide state.
///
/// Construction calls `curl_global_init`, drop calls `curl_global_cleanup`. libcurl counts
/// these calls, so guards may be nested or created more than once; the state is torn down
/// when the last one goes away.
///
/// Create the guard before starting any transfers and drop it only after all of them have
/// finished. Init and cleanup are not thread-safe against running transfers, which is why
/// the guard is neither `Clone` nor `Send`.
///
/// ```no_run
/// use downloader::{Curl, Request, download};
///
/// fn main() -> Result<(), downloader::Error> {
///     let _curl = Curl::new()?;
///     let response = download(&Request::new("http://example.org"))?;
///     println!("{}", response.code);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
#[must_use = "libcurl is cleaned up as soon as the guard is dropped"]
pub struct Curl {
    _not_send: PhantomData<*const ()>,
}

impl Curl {
    /// Initialize libcurl with `CURL_GLOBAL_DEFAULT`.
    ///
    /// # Errors
    ///
    /// Returns the code reported by `curl_global_init` if initialization failed; no
    /// cleanup is performed in that case.
    pub fn new() -> Result<Self, Error> {
        // SAFETY: no transfers are in flight while the guard is being created.
        let code = unsafe { curl_sys::curl_global_init(curl_sys::CURL_GLOBAL_DEFAULT) };
        if code != curl_sys::CURLE_OK {
            return Err(curl::Error::new(code).into());
        }
        debug!("libcurl global state initialized");
        Ok(Self {
            _not_send: PhantomData,
        })
    }
}

impl Drop for Curl {
    fn drop(&mut self) {
        // SAFETY: paired with the successful curl_global_init in `new`.
        unsafe { curl_sys::curl_global_cleanup() };
        debug!("libcurl global state released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_guards() {
        // Keeps libcurl initialized for transfers running in parallel tests.
        curl::init();
        let outer = Curl::new().unwrap();
        {
            let _inner = Curl::new().unwrap();
        }
        drop(outer);
        let _again = Curl::new().unwrap();
    }
}
