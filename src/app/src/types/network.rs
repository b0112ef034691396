use serde::{Deserialize, Serialize};

/// Security literal the scan endpoint reports for networks that need an identity
pub const ENTERPRISE_SECURITY: &str = "enterprise";

/// A network reported by the scan endpoint
///
/// The endpoint may report the same ssid more than once (e.g. several access
/// points); the list is kept as reported.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Network {
    pub ssid: String,
    pub security: String,
}

impl Network {
    pub fn is_enterprise(&self) -> bool {
        self.security == ENTERPRISE_SECURITY
    }
}

/// Whether `ssid` names a known network secured with enterprise credentials
pub fn is_enterprise_network(networks: &[Network], ssid: Option<&str>) -> bool {
    ssid.is_some_and(|ssid| {
        networks
            .iter()
            .any(|network| network.ssid == ssid && network.is_enterprise())
    })
}
