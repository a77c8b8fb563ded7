use thiserror::Error;

/// What went wrong while completing a request.
#[derive(Debug)]
pub enum FailureKind {
    /// Connection, DNS or transport-level timeout.
    Transport(reqwest::Error),
    /// The backend answered with a non-2xx status.
    Status(u16),
    /// The `Fetch-Time` header held bytes that are not visible ASCII.
    Header(reqwest::header::ToStrError),
    /// The body could not be read or decoded.
    Body(String),
}

/// The single error returned by every fetch operation.
#[derive(Debug, Error)]
#[error("request to {url} failed: {kind}")]
pub struct RequestFailure {
    pub url: String,
    pub kind: FailureKind,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Transport(e) => write!(f, "transport error: {}", e),
            FailureKind::Status(code) => write!(f, "HTTP {}", code),
            FailureKind::Header(e) => write!(f, "unreadable Fetch-Time header: {}", e),
            FailureKind::Body(msg) => write!(f, "malformed body: {}", msg),
        }
    }
}

impl RequestFailure {
    pub fn new(url: impl Into<String>, kind: FailureKind) -> Self {
        RequestFailure {
            url: url.into(),
            kind,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self.kind {
            FailureKind::Status(code) => Some(code),
            _ => None,
        }
    }

    pub fn is_status(&self) -> bool {
        self.status().is_some()
    }
}
