/// All errors that can occur while talking to the tournament API or
/// reading its records.
#[derive(thiserror::Error, Debug)]
pub enum TowerfallError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body was not a valid record.
    #[error("invalid json from {url}: {source}")]
    Json {
        url: String,
        source: serde_json::Error,
    },

    /// A standalone JSON document could not be deserialized.
    #[error("failed to deserialize record: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// A timestamp string was neither RFC 3339 nor an ISO-8601 date-time.
    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    /// The tournament has no match of that kind at that index.
    #[error("no {kind} match with index {index} in tournament {tournament}")]
    MatchNotFound {
        tournament: String,
        kind: String,
        index: usize,
    },
}

pub type Result<T> = std::result::Result<T, TowerfallError>;
