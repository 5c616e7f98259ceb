//! Keeps only the newest in-flight fetch relevant.
//!
//! Every fetch is issued with a ticket naming the selection it was made for.
//! When the response arrives it is applied only if that ticket is still the
//! latest one, so a slow response for an old selection cannot overwrite the
//! chart of a newer one.

/// Issued when a fetch starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
    selection: String,
}

impl RequestTicket {
    pub fn selection(&self) -> &str {
        &self.selection
    }
}

#[derive(Debug, Default)]
pub struct LatestRequest {
    generation: u64,
    selection: Option<String>,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch for `selection`, superseding every earlier ticket
    pub fn begin(&mut self, selection: &str) -> RequestTicket {
        self.generation += 1;
        self.selection = Some(selection.to_string());
        RequestTicket {
            generation: self.generation,
            selection: selection.to_string(),
        }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.generation == self.generation && self.selection.as_deref() == Some(ticket.selection.as_str())
    }

    /// Drop the selection; every outstanding ticket becomes stale
    pub fn clear(&mut self) {
        self.generation += 1;
        self.selection = None;
    }

    pub fn current_selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }
}
