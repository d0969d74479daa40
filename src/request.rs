/// A single transfer to perform.
///
/// Consumed by one call to [`crate::download`]; the transfer reads it and never keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// URL to fetch
    pub url: String,
    /// User agent to send. Empty means libcurl's default (no `User-Agent` override).
    pub user_agent: String,
}

impl Request {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user_agent: String::new(),
        }
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
