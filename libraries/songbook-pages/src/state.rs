//! Load state shared by the fetch-and-render pages.

use tracing::debug;

/// Where a fetched resource stands.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Request in flight (also the state before the first fetch)
    Loading,
    /// Resource available
    Loaded(T),
    /// Request failed; the resource is absent
    Error(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// The error message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

/// Identifies one fetch so a late completion can be recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Hands out tickets and tells whether a completion is still wanted.
///
/// Only the most recent ticket is current, and none are once the page is
/// unmounted. Issuing a new ticket mounts the page again.
#[derive(Debug)]
pub struct FetchGuard {
    latest: u64,
    mounted: bool,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self {
            latest: 0,
            mounted: true,
        }
    }

    /// Start a fetch, superseding any earlier one.
    pub fn issue(&mut self) -> FetchTicket {
        self.mounted = true;
        self.latest += 1;
        FetchTicket(self.latest)
    }

    /// Whether a completion for `ticket` should be applied.
    pub fn accepts(&self, ticket: FetchTicket) -> bool {
        let current = self.mounted && ticket.0 == self.latest;
        if !current {
            debug!(ticket = ticket.0, latest = self.latest, mounted = self.mounted, "Ignoring stale response");
        }
        current
    }

    /// Page left; every outstanding ticket becomes stale.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

impl Default for FetchGuard {
    fn default() -> Self {
        Self::new()
    }
}
