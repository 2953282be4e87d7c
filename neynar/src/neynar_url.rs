#[derive(Debug, Clone)]
pub struct NeynarURL(String);

impl AsRef<str> for NeynarURL {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl NeynarURL {
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    /// Append a percent-encoded query parameter.
    pub fn with_query(&self, key: &str, value: &str) -> Self {
        let separator = if self.0.contains('?') { '&' } else { '?' };
        Self(format!(
            "{}{}{}={}",
            self.0,
            separator,
            key,
            urlencoding::encode(value)
        ))
    }
}
