/// One `key=value` query parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Parameter name, copied into the URL as-is
    pub key: String,
    /// Parameter value, copied into the URL as-is
    pub value: String,
}

impl Query {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Query {
    fn from((key, value): (K, V)) -> Self {
        Query::new(key, value)
    }
}

/// A GET request as seen by [`super::Gateway`]: base URL, ordered queries and user agent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpRequest {
    /// URL the queries are appended to. Empty means there is nothing to fetch.
    pub base_url: String,
    /// Query parameters, in URL order
    pub queries: Vec<Query>,
    /// Empty means libcurl's default.
    pub user_agent: String,
}

impl HttpRequest {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Append a query parameter. Order of calls is the order in the URL.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.queries.push(Query::new(key, value));
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the final URL: `base_url`, then `?` and the queries joined with `&`.
    ///
    /// Without queries the base URL is returned unchanged. Keys and values are copied
    /// verbatim. Nothing is percent-encoded, so callers must escape reserved characters
    /// themselves.
    #[must_use]
    pub fn build_url(&self) -> String {
        let mut url = self.base_url.clone();
        for (i, query) in self.queries.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&query.key);
            url.push('=');
            url.push_str(&query.value);
        }
        url
    }
}
