use anyhow::{Context, Result};
use reqwest::Url;
use std::env;
use wifi_portal_core::PortalConfig;

/// Shell configuration loaded from environment variables at startup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin of the captive portal serving `/networks` and `/connect`
    pub portal_origin: String,

    /// Bridge service serving `/bridge` and `/repeat`
    pub bridge_service: BridgeServiceConfig,

    pub request_timeout_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgeServiceConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Load the configuration from the process environment
    pub fn load() -> Result<Self> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load the configuration from `lookup`, falling back to defaults for unset keys
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let portal_origin = lookup("PORTAL_ORIGIN")
            .unwrap_or_else(|| "http://localhost".to_string())
            .trim_end_matches('/')
            .to_string();

        let origin_url = Url::parse(&portal_origin)
            .context("failed to parse PORTAL_ORIGIN: invalid URL")?;

        let bridge_service = BridgeServiceConfig::load(&lookup, &origin_url)?;

        let request_timeout_ms = lookup("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|| "30000".to_string())
            .parse::<u64>()
            .context("failed to parse REQUEST_TIMEOUT_MS: invalid format")?;

        anyhow::ensure!(
            request_timeout_ms > 0,
            "failed to parse REQUEST_TIMEOUT_MS: must be greater than zero"
        );

        Ok(Self {
            portal_origin,
            bridge_service,
            request_timeout_ms,
        })
    }

    /// Configuration handed to the core on `Event::Initialize`
    pub fn portal_config(&self) -> PortalConfig {
        PortalConfig::from_location(&self.bridge_service.scheme, &self.bridge_service.host)
            .with_origin(self.portal_origin.clone())
            .with_bridge_port(self.bridge_service.port)
            .with_request_timeout_ms(self.request_timeout_ms)
    }
}

impl BridgeServiceConfig {
    fn load(lookup: &impl Fn(&str) -> Option<String>, portal_origin: &Url) -> Result<Self> {
        let scheme = lookup("BRIDGE_SERVICE_SCHEME").unwrap_or_else(|| "http".to_string());

        let host = match lookup("BRIDGE_SERVICE_HOST") {
            Some(host) => host,
            None => portal_origin
                .host_str()
                .context("failed to derive BRIDGE_SERVICE_HOST: PORTAL_ORIGIN has no host")?
                .to_string(),
        };

        let port = lookup("BRIDGE_SERVICE_PORT")
            .unwrap_or_else(|| "4000".to_string())
            .parse::<u16>()
            .context("failed to parse BRIDGE_SERVICE_PORT: invalid format")?;

        Ok(Self { scheme, host, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::load_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[]).expect("defaults load");

        assert_eq!(config.portal_origin, "http://localhost");
        assert_eq!(
            config.bridge_service,
            BridgeServiceConfig {
                scheme: "http".to_string(),
                host: "localhost".to_string(),
                port: 4000,
            }
        );
        assert_eq!(config.request_timeout_ms, 30_000);
    }

    #[test]
    fn bridge_host_follows_portal_origin() {
        let config = load(&[("PORTAL_ORIGIN", "http://192.168.4.1:8080/")]).expect("load");

        assert_eq!(config.portal_origin, "http://192.168.4.1:8080");
        assert_eq!(config.bridge_service.host, "192.168.4.1");

        let portal = config.portal_config();
        assert_eq!(portal.local_url("/networks"), "http://192.168.4.1:8080/networks");
        assert_eq!(portal.bridge_url("/bridge"), "http://192.168.4.1:4000/bridge");
    }

    #[test]
    fn explicit_bridge_settings_win() {
        let config = load(&[
            ("PORTAL_ORIGIN", "http://192.168.4.1"),
            ("BRIDGE_SERVICE_SCHEME", "https"),
            ("BRIDGE_SERVICE_HOST", "10.0.0.2"),
            ("BRIDGE_SERVICE_PORT", "4443"),
            ("REQUEST_TIMEOUT_MS", "250"),
        ])
        .expect("load");

        let portal = config.portal_config();
        assert_eq!(portal.bridge_url("/repeat"), "https://10.0.0.2:4443/repeat");
        assert_eq!(portal.request_timeout_ms, 250);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let error = load(&[("BRIDGE_SERVICE_PORT", "port")]).expect_err("invalid port");

        assert!(format!("{error:#}").contains("BRIDGE_SERVICE_PORT"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(load(&[("REQUEST_TIMEOUT_MS", "0")]).is_err());
    }

    #[test]
    fn bridge_host_of_ipv6_and_credential_origins() {
        let config = load(&[("PORTAL_ORIGIN", "http://[fe80::1]:8080")]).expect("load");
        assert_eq!(
            config.portal_config().bridge_url("/bridge"),
            "http://[fe80::1]:4000/bridge"
        );

        let config = load(&[("PORTAL_ORIGIN", "http://user@portal.local/path")]).expect("load");
        assert_eq!(config.bridge_service.host, "portal.local");
    }

    #[test]
    fn malformed_origin_is_rejected() {
        let error = load(&[("PORTAL_ORIGIN", "portal.local")]).expect_err("no scheme");
        assert!(format!("{error:#}").contains("PORTAL_ORIGIN"));

        assert!(load(&[("PORTAL_ORIGIN", "unix:/run/portal.sock")]).is_err());
    }
}
