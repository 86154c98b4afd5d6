/// Query state definitions for tracking per-keyword progress
///
/// This module defines all states a keyword query moves through while it is
/// resolved, fetched, and written. No state aborts the run: every non-blank
/// query ends at `RecordWritten`.
use std::fmt;

/// Represents the current state of a query in the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryState {
    // ===== Active States =====
    /// Query taken from the input list, nothing attempted yet
    Pending,

    /// Title resolution in progress
    Resolving,

    /// A search strategy produced a canonical title
    Resolved,

    /// Resolution exhausted its retries; the raw query is used as the title
    ResolutionFailed,

    /// Plain-text extract fetch in progress
    FetchingContent,

    /// Extract fetched (possibly empty for a missing article)
    ContentOk,

    /// Extract fetch exhausted its retries; record degrades to empty text
    ContentFailed,

    /// Section outline fetch in progress
    FetchingOutline,

    /// Outline fetched with at least one section
    OutlineOk,

    /// Outline absent, whether by article shape or by absorbed failure
    OutlineEmpty,

    // ===== Terminal State =====
    /// Record serialized and appended to the dataset
    RecordWritten,
}

impl QueryState {
    /// Returns true if this is the terminal state (record durably written)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::RecordWritten)
    }

    /// Returns true if this state marks a degraded-fallback outcome
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::ResolutionFailed | Self::ContentFailed)
    }

    /// Returns true if the given transition is legal in the pipeline
    pub fn can_transition_to(&self, to: QueryState) -> bool {
        use QueryState::*;
        matches!(
            (*self, to),
            (Pending, Resolving)
                | (Resolving, Resolved)
                | (Resolving, ResolutionFailed)
                | (Resolved, FetchingContent)
                | (ResolutionFailed, FetchingContent)
                | (FetchingContent, ContentOk)
                | (FetchingContent, ContentFailed)
                | (ContentOk, FetchingOutline)
                | (ContentFailed, FetchingOutline)
                | (FetchingOutline, OutlineOk)
                | (FetchingOutline, OutlineEmpty)
                | (OutlineOk, RecordWritten)
                | (OutlineEmpty, RecordWritten)
        )
    }

    /// Moves to the next state, rejecting illegal transitions
    pub fn transition(self, to: QueryState) -> crate::Result<QueryState> {
        if self.can_transition_to(to) {
            Ok(to)
        } else {
            Err(crate::GleanError::InvalidTransition { from: self, to })
        }
    }

    /// Converts the query state to its log string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Resolving => "resolving",
            Self::Resolved => "resolved",
            Self::ResolutionFailed => "resolution_failed",
            Self::FetchingContent => "fetching_content",
            Self::ContentOk => "content_ok",
            Self::ContentFailed => "content_failed",
            Self::FetchingOutline => "fetching_outline",
            Self::OutlineOk => "outline_ok",
            Self::OutlineEmpty => "outline_empty",
            Self::RecordWritten => "record_written",
        }
    }

    /// Returns all possible query states
    pub fn all_states() -> Vec<Self> {
        vec![
            Self::Pending,
            Self::Resolving,
            Self::Resolved,
            Self::ResolutionFailed,
            Self::FetchingContent,
            Self::ContentOk,
            Self::ContentFailed,
            Self::FetchingOutline,
            Self::OutlineOk,
            Self::OutlineEmpty,
            Self::RecordWritten,
        ]
    }
}

impl fmt::Display for QueryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
