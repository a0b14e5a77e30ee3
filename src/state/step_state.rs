/// Traversal step state definitions
///
/// Every walk step starts out `Pending` and ends in exactly one terminal state.
/// No step is ever resumed or retried.
use std::fmt;

/// Represents the state of one walk step `(url, depth)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepState {
    // ===== Active State =====
    /// Step has been spawned but has not reached an outcome yet
    Pending,

    // ===== Terminal Skip States =====
    /// Remaining depth was zero; nothing was fetched
    DepthExhausted,

    /// Another step already claimed this URL during the current walk
    AlreadyVisited,

    // ===== Terminal Error State =====
    /// The fetcher returned an error for this URL
    FetchFailed,

    // ===== Terminal Success State =====
    /// The URL was fetched and one child step was spawned per link
    Fetched { children: usize },
}

impl StepState {
    /// Returns true for every state except `Pending`
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Returns true if the step fetched its URL successfully
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Fetched { .. })
    }

    /// Returns true if the step ended without calling the fetcher
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::DepthExhausted | Self::AlreadyVisited)
    }

    /// Returns true if the step's fetch failed
    pub fn is_error(&self) -> bool {
        matches!(self, Self::FetchFailed)
    }

    /// Number of child steps this step spawned
    pub fn children(&self) -> usize {
        match self {
            Self::Fetched { children } => *children,
            _ => 0,
        }
    }

    /// Short label used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::DepthExhausted => "depth_exhausted",
            Self::AlreadyVisited => "already_visited",
            Self::FetchFailed => "fetch_failed",
            Self::Fetched { .. } => "fetched",
        }
    }
}

impl fmt::Display for StepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetched { children } => write!(f, "fetched ({} children)", children),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
