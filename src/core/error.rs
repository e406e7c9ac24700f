/// Why a note sample could not be made playable.
///
/// Every variant is per note: the failing note stays unavailable for the
/// rest of the session and the other notes keep loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("no window to fetch from")]
    NoWindow,

    #[error("request aborted")]
    Aborted,

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("could not read response body: {0}")]
    Body(String),

    #[error("audio decode failed: {0}")]
    Decode(String),
}
