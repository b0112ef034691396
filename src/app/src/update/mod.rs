mod bridge;
mod catalog;
mod intent;
mod orchestrator;
mod ui;

use crux_core::{render::render, Command};

use crate::commands::deadline::DeadlineOutput;
use crate::config::PortalConfig;
use crate::events::Event;
use crate::model::Model;
use crate::types::RequestKind;
use crate::{DeadlineCmd, Effect};

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize { config } => initialize(config, model),
        Event::Catalog(event) => catalog::handle(event, model),
        Event::Bridge(event) => bridge::handle(event, model),
        Event::Intent(event) => intent::handle(event, model),
        Event::Submit(event) => orchestrator::handle(event, model),
        Event::Ui(event) => ui::handle(event, model),
    }
}

/// Mount the UI: bridge discovery and the first scan run independently
fn initialize(config: PortalConfig, model: &mut Model) -> Command<Effect, Event> {
    if model.config.bridge_identity_differs(&config) {
        log::info!(
            "bridge service moved to {}:{}",
            config.bridge_service_host,
            config.bridge_service_port
        );
        model.secondary_iface = None;
        model.bridge_discovery_started = false;
    }
    model.config = config;

    Command::all([render(), bridge::discover(model), catalog::scan(model)])
}

/// Take the ticket of an arrived response
///
/// Returns the request kind, or `None` if the deadline already settled the request.
fn take_response(ticket: u64, model: &mut Model) -> Option<RequestKind> {
    let kind = model.pending.close(ticket);
    if kind.is_none() {
        log::debug!("discarding response of settled request (ticket {ticket})");
    }
    kind
}

/// Take the ticket of an elapsed deadline
///
/// Returns the request kind, or `None` if the deadline was cancelled or the
/// response settled the request first.
fn take_elapsed(output: DeadlineOutput, model: &mut Model) -> Option<RequestKind> {
    if !output.is_elapsed() {
        return None;
    }
    let kind = model.pending.close(output.id());
    if let Some(kind) = kind {
        log::warn!("{kind:?} request timed out (ticket {})", output.id());
    }
    kind
}

/// Cancel the deadline of a settled request
fn cancel_deadline(ticket: u64, to_event: fn(DeadlineOutput) -> Event) -> Command<Effect, Event> {
    DeadlineCmd::cancel(ticket).build().then_send(to_event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Iface;

    #[test]
    fn initialize_starts_discovery_and_scan() {
        let mut model = Model::default();

        let _ = update(
            Event::Initialize {
                config: PortalConfig::from_location("http", "192.168.4.1"),
            },
            &mut model,
        );

        assert!(model.bridge_discovery_started);
        assert!(model.is_fetching_networks);
        assert_eq!(model.pending.count(RequestKind::Bridge), 1);
        assert_eq!(model.pending.count(RequestKind::Scan), 1);
        assert_eq!(model.config.bridge_service_host, "192.168.4.1");
    }

    #[test]
    fn reinitialize_on_same_host_does_not_rediscover() {
        let config = PortalConfig::from_location("http", "192.168.4.1");
        let mut model = Model::default();

        let _ = update(Event::Initialize { config: config.clone() }, &mut model);
        let _ = update(Event::Initialize { config }, &mut model);

        assert_eq!(model.pending.count(RequestKind::Bridge), 1);
        assert_eq!(model.pending.count(RequestKind::Scan), 2);
    }

    #[test]
    fn reinitialize_on_new_host_drops_iface_and_rediscovers() {
        let mut model = Model {
            secondary_iface: Some(Iface {
                iface: "wlan1".to_string(),
                ..Default::default()
            }),
            bridge_discovery_started: true,
            ..Default::default()
        };

        let _ = update(
            Event::Initialize {
                config: PortalConfig::from_location("http", "10.0.0.7"),
            },
            &mut model,
        );

        assert_eq!(model.secondary_iface, None);
        assert_eq!(model.pending.count(RequestKind::Bridge), 1);
    }

    #[test]
    fn cancelled_deadline_takes_no_ticket() {
        let mut model = Model::default();
        let ticket = model.pending.open(RequestKind::Scan);

        assert_eq!(
            take_elapsed(DeadlineOutput::Cancelled { id: ticket }, &mut model),
            None
        );
        assert!(model.pending.is_pending(ticket));
    }
}
