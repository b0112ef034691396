use serde::{Deserialize, Serialize};

use crate::config::PortalConfig;
use crate::notifications::{notifications, Notification};
use crate::types::*;

/// Application Model - the complete state
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Model {
    pub config: PortalConfig,

    // Network catalog
    pub networks: Vec<Network>,
    pub is_fetching_networks: bool,

    // Bridge discovery
    pub secondary_iface: Option<Iface>,
    pub bridge_discovery_started: bool,

    // Connection intent (form data)
    pub intent: NetworkInfo,

    // Orchestration state
    /// Set on the first connect or repeat; never reset within a session
    pub attempted_connect: bool,
    pub connect_state: SubmissionState,
    pub repeat_state: SubmissionState,
    pub pending: PendingRequests,

    // Shared status
    pub error_message: Option<String>,
}

impl Model {
    pub fn set_error(&mut self, error: String) {
        log::warn!("{error}");
        self.error_message = Some(error);
    }

    /// Set an error message and return a render command
    pub fn set_error_and_render(
        &mut self,
        error: String,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.set_error(error);
        crux_core::render::render()
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// A scan is in flight or the last scan found networks
    pub fn has_available_networks(&self) -> bool {
        self.is_fetching_networks || !self.networks.is_empty()
    }

    /// Chosen ssid, falling back to the first scanned network
    pub fn selected_ssid(&self) -> Option<&str> {
        self.intent
            .ssid()
            .or_else(|| self.networks.first().map(|network| network.ssid.as_str()))
    }

    pub fn is_selected_network_enterprise(&self) -> bool {
        is_enterprise_network(&self.networks, self.selected_ssid())
    }

    /// The intent as the form submits it, with the default ssid filled in
    pub fn submitted_intent(&self) -> NetworkInfo {
        let default_ssid = self.networks.first().map(|network| network.ssid.as_str());
        self.intent.clone().with_default_ssid(default_ssid)
    }

    pub fn submission_state_mut(&mut self, action: SubmitAction) -> &mut SubmissionState {
        match action {
            SubmitAction::Connect => &mut self.connect_state,
            SubmitAction::Repeat => &mut self.repeat_state,
        }
    }
}

/// View model handed to the Shell on every render
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub networks: Vec<Network>,
    pub is_fetching_networks: bool,
    pub secondary_iface: Option<Iface>,
    pub intent: NetworkInfo,
    pub selected_ssid: Option<String>,
    /// Whether the identity field is shown
    pub is_enterprise: bool,
    pub can_connect: bool,
    pub can_repeat: bool,
    pub attempted_connect: bool,
    pub connect_state: SubmissionState,
    pub repeat_state: SubmissionState,
    pub error_message: Option<String>,
    pub notifications: Vec<Notification>,
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        Self {
            networks: model.networks.clone(),
            is_fetching_networks: model.is_fetching_networks,
            secondary_iface: model.secondary_iface.clone(),
            intent: model.intent.clone(),
            selected_ssid: model.selected_ssid().map(str::to_string),
            is_enterprise: model.is_selected_network_enterprise(),
            can_connect: !model.networks.is_empty(),
            can_repeat: model.secondary_iface.is_some(),
            attempted_connect: model.attempted_connect,
            connect_state: model.connect_state.clone(),
            repeat_state: model.repeat_state.clone(),
            error_message: model.error_message.clone(),
            notifications: notifications(
                model.attempted_connect,
                model.has_available_networks(),
                model.error_message.as_deref(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(ssid: &str, security: &str) -> Network {
        Network {
            ssid: ssid.to_string(),
            security: security.to_string(),
        }
    }

    #[test]
    fn selected_ssid_defaults_to_first_network() {
        let model = Model {
            networks: vec![network("Home", "wpa2"), network("Office", "enterprise")],
            ..Default::default()
        };

        assert_eq!(model.selected_ssid(), Some("Home"));
        assert!(!model.is_selected_network_enterprise());
        assert_eq!(model.submitted_intent().ssid.as_deref(), Some("Home"));
    }

    #[test]
    fn chosen_enterprise_network_shows_identity() {
        let model = Model {
            networks: vec![network("Home", "wpa2"), network("Office", "enterprise")],
            intent: NetworkInfo {
                ssid: Some("Office".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(ViewModel::from(&model).is_enterprise);
    }

    #[test]
    fn repeat_is_available_only_with_secondary_iface() {
        let mut model = Model::default();
        assert!(!ViewModel::from(&model).can_repeat);

        model.secondary_iface = Some(Iface {
            iface: "wlan1".to_string(),
            ..Default::default()
        });
        assert!(ViewModel::from(&model).can_repeat);
    }

    #[test]
    fn scanning_counts_as_available_networks() {
        let model = Model {
            is_fetching_networks: true,
            ..Default::default()
        };

        assert!(model.has_available_networks());
        assert!(!ViewModel::from(&model).can_connect);
    }
}
