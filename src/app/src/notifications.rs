//! Advisory banners derived from the workflow status.

use serde::{Deserialize, Serialize};

pub const APPLYING_CHANGES_TITLE: &str = "Applying changes...";
pub const APPLYING_CHANGES_TEXT: &str = "Your device will be online shortly. If the connection \
    does not succeed, the access point will be back in a few minutes and reloading this page \
    lets you try again.";
pub const NO_NETWORKS_TEXT: &str =
    "No wifi networks available. Click 'Rescan' to search again.";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Notification {
    ApplyingChanges,
    NoNetworksAvailable,
    Error(String),
}

impl Notification {
    pub fn severity(&self) -> Severity {
        match self {
            Notification::ApplyingChanges => Severity::Info,
            Notification::NoNetworksAvailable => Severity::Warning,
            Notification::Error(_) => Severity::Danger,
        }
    }

    pub fn text(&self) -> String {
        match self {
            Notification::ApplyingChanges => {
                format!("{APPLYING_CHANGES_TITLE} {APPLYING_CHANGES_TEXT}")
            }
            Notification::NoNetworksAvailable => NO_NETWORKS_TEXT.to_string(),
            Notification::Error(message) => message.clone(),
        }
    }
}

/// Banners to show, in display order.
///
/// Each banner is independent of the others: an error does not hide the
/// "applying changes" banner.
pub fn notifications(
    attempted_connect: bool,
    has_available_networks: bool,
    error: Option<&str>,
) -> Vec<Notification> {
    let mut banners = Vec::new();

    if attempted_connect {
        banners.push(Notification::ApplyingChanges);
    }

    if !has_available_networks {
        banners.push(Notification::NoNetworksAvailable);
    }

    if let Some(error) = error.filter(|e| !e.is_empty()) {
        banners.push(Notification::Error(error.to_string()));
    }

    banners
}
