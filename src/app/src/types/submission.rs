use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Requests the core keeps track of while they are in flight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RequestKind {
    Scan,
    Bridge,
    Connect,
    Repeat,
}

/// Action the user submits the connection intent with
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubmitAction {
    Connect,
    Repeat,
}

impl From<SubmitAction> for RequestKind {
    fn from(action: SubmitAction) -> Self {
        match action {
            SubmitAction::Connect => RequestKind::Connect,
            SubmitAction::Repeat => RequestKind::Repeat,
        }
    }
}

/// Per-action submission state
///
/// ```text
/// Idle ──submit──▶ Submitting ──response/deadline──▶ Settled
///                      ▲                                │
///                      └────────────submit──────────────┘
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Settled(SubmissionOutcome),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Ok,
    Error(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

/// Tickets of in-flight requests
///
/// A response or an elapsed deadline is only applied while its ticket is still
/// pending; whichever of the two arrives first takes the ticket.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingRequests {
    next_ticket: u64,
    in_flight: BTreeMap<u64, RequestKind>,
}

impl PendingRequests {
    /// Register a new request and return its ticket
    pub fn open(&mut self, kind: RequestKind) -> u64 {
        self.next_ticket += 1;
        self.in_flight.insert(self.next_ticket, kind);
        self.next_ticket
    }

    /// Take the ticket back, returning its kind if it was still pending
    pub fn close(&mut self, ticket: u64) -> Option<RequestKind> {
        self.in_flight.remove(&ticket)
    }

    pub fn is_pending(&self, ticket: u64) -> bool {
        self.in_flight.contains_key(&ticket)
    }

    pub fn count(&self, kind: RequestKind) -> usize {
        self.in_flight.values().filter(|k| **k == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty()
    }
}
