use serde::{Deserialize, Serialize};

use crate::http_helpers::BASE_URL;

/// Port of the bridge service that discovers the secondary radio and repeats networks.
pub const DEFAULT_BRIDGE_SERVICE_PORT: u16 = 4000;

/// Deadline applied to every request unless configured otherwise.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Endpoints and limits injected by the Shell on `Event::Initialize`.
///
/// The local API (`/networks`, `/connect`) is addressed relative to `origin`.
/// The bridge service (`/bridge`, `/repeat`) runs on the same device but on its
/// own port, so it is addressed by scheme, host and port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortalConfig {
    pub origin: String,
    pub bridge_service_scheme: String,
    pub bridge_service_host: String,
    pub bridge_service_port: u16,
    pub request_timeout_ms: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            origin: BASE_URL.to_string(),
            bridge_service_scheme: "http".to_string(),
            bridge_service_host: "localhost".to_string(),
            bridge_service_port: DEFAULT_BRIDGE_SERVICE_PORT,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl PortalConfig {
    /// Derive the configuration from a page location.
    ///
    /// `protocol` is accepted with or without the trailing colon (`"https:"` as
    /// reported by browsers, or `"https"`). The page's own port is ignored for
    /// the bridge service.
    pub fn from_location(protocol: &str, hostname: &str) -> Self {
        Self {
            bridge_service_scheme: protocol.trim_end_matches(':').to_string(),
            bridge_service_host: hostname.to_string(),
            ..Default::default()
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_bridge_port(mut self, port: u16) -> Self {
        self.bridge_service_port = port;
        self
    }

    pub fn with_request_timeout_ms(mut self, millis: u64) -> Self {
        self.request_timeout_ms = millis;
        self
    }

    /// URL of an endpoint on the local API
    pub fn local_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.origin.trim_end_matches('/'))
    }

    /// URL of an endpoint on the bridge service
    pub fn bridge_url(&self, endpoint: &str) -> String {
        format!(
            "{}://{}:{}{endpoint}",
            self.bridge_service_scheme, self.bridge_service_host, self.bridge_service_port
        )
    }

    /// Whether `other` addresses a different bridge service than `self`
    pub fn bridge_identity_differs(&self, other: &PortalConfig) -> bool {
        self.bridge_service_scheme != other.bridge_service_scheme
            || self.bridge_service_host != other.bridge_service_host
            || self.bridge_service_port != other.bridge_service_port
    }
}
