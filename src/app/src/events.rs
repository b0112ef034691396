use serde::{Deserialize, Serialize};

use crate::commands::deadline::DeadlineOutput;
use crate::config::PortalConfig;
use crate::types::*;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    /// The UI was mounted; starts bridge discovery and the first scan
    Initialize { config: PortalConfig },
    Catalog(CatalogEvent),
    Bridge(BridgeEvent),
    Intent(IntentEvent),
    Submit(SubmitEvent),
    Ui(UiEvent),
}

/// Network catalog events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    /// User triggered rescan
    Scan,

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    ScanResponse {
        ticket: u64,
        result: Result<Vec<Network>, String>,
    },
    #[serde(skip)]
    ScanDeadline(DeadlineOutput),
}

/// Secondary interface discovery events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum BridgeEvent {
    Discover,

    #[serde(skip)]
    DiscoverResponse {
        ticket: u64,
        result: Result<Iface, String>,
    },
    #[serde(skip)]
    DiscoverDeadline(DeadlineOutput),
}

/// Form edits of the connection intent
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum IntentEvent {
    /// Replace the whole intent, as schema driven form renderers report it
    Replace(NetworkInfo),
    /// Change a single field
    Update(IntentField),
    /// Change several fields at once, applied in order
    UpdateMany(Vec<IntentField>),
}

/// Connect and repeat submissions
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum SubmitEvent {
    Connect,
    Repeat,

    #[serde(skip)]
    ConnectResponse {
        ticket: u64,
        result: Result<(), String>,
    },
    #[serde(skip)]
    ConnectDeadline(DeadlineOutput),
    #[serde(skip)]
    RepeatResponse {
        ticket: u64,
        result: Result<(), String>,
    },
    #[serde(skip)]
    RepeatDeadline(DeadlineOutput),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ClearError,
}
