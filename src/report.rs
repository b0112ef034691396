use std::fmt::Write;
use wifi_portal_core::{Severity, ViewModel};

/// Render the view model as the text printed by the CLI
pub fn render(view: &ViewModel) -> String {
    let mut out = String::new();

    if view.networks.is_empty() {
        let _ = writeln!(out, "networks: none");
    } else {
        let _ = writeln!(out, "networks:");
        for network in &view.networks {
            let marker = if view.selected_ssid.as_deref() == Some(network.ssid.as_str()) {
                '*'
            } else {
                ' '
            };
            let _ = writeln!(out, " {marker} {} ({})", network.ssid, network.security);
        }
    }

    if let Some(iface) = &view.secondary_iface {
        let _ = writeln!(out, "secondary interface: {}", iface.iface);
    }

    for notification in &view.notifications {
        let label = match notification.severity() {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Danger => "error",
        };
        let _ = writeln!(out, "[{label}] {}", notification.text());
    }

    out
}

/// Whether the view shows an error banner
pub fn has_error(view: &ViewModel) -> bool {
    view.notifications
        .iter()
        .any(|notification| notification.severity() == Severity::Danger)
}
