use serde::Deserialize;

/// Body returned by the upload endpoint. The server is expected to set exactly
/// one of the two fields, but nothing here relies on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServerResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// What the page should do with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Alert(String),
    Summary(String),
}

impl ServerResponse {
    /// Branches on whether `error` is truthy, not on whether it is present:
    /// an empty error string falls through to the summary.
    pub fn into_outcome(self) -> Outcome {
        match self.error {
            Some(error) if !error.is_empty() => Outcome::Alert(error),
            _ => Outcome::Summary(self.summary.unwrap_or_default()),
        }
    }
}
