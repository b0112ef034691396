use crux_core::{render::render, Command};

use crate::commands::deadline::DeadlineOutput;
use crate::events::{CatalogEvent, Event};
use crate::http_helpers::{failure_message, timeout_reason};
use crate::model::Model;
use crate::tracked_get;
use crate::types::Network;
use crate::Effect;

use super::{cancel_deadline, take_elapsed, take_response};

pub const FETCH_NETWORKS_FAILED: &str = "Failed to fetch available networks.";

/// Handle network catalog events
pub fn handle(event: CatalogEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        CatalogEvent::Scan => scan(model),
        CatalogEvent::ScanResponse { ticket, result } => {
            handle_scan_response(ticket, result, model)
        }
        CatalogEvent::ScanDeadline(output) => handle_scan_deadline(output, model),
    }
}

/// Start a scan; earlier scans still in flight are not cancelled
pub fn scan(model: &mut Model) -> Command<Effect, Event> {
    model.is_fetching_networks = true;
    let url = model.config.local_url("/networks");
    tracked_get!(Catalog, CatalogEvent, model, Scan, url, ScanResponse, ScanDeadline,
        expect_json: Vec<Network>
    )
}

fn handle_scan_response(
    ticket: u64,
    result: Result<Vec<Network>, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    if take_response(ticket, model).is_none() {
        return Command::done();
    }

    model.is_fetching_networks = false;
    match result {
        Ok(networks) => {
            log::info!("scan found {} networks", networks.len());
            model.networks = networks;
        }
        Err(reason) => model.set_error(failure_message(FETCH_NETWORKS_FAILED, &reason)),
    }

    Command::all([
        render(),
        cancel_deadline(ticket, |output| {
            Event::Catalog(CatalogEvent::ScanDeadline(output))
        }),
    ])
}

fn handle_scan_deadline(output: DeadlineOutput, model: &mut Model) -> Command<Effect, Event> {
    if take_elapsed(output, model).is_none() {
        return Command::done();
    }

    model.is_fetching_networks = false;
    let reason = timeout_reason(model.config.request_timeout_ms);
    model.set_error_and_render(failure_message(FETCH_NETWORKS_FAILED, &reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RequestKind;

    fn network(ssid: &str, security: &str) -> Network {
        Network {
            ssid: ssid.to_string(),
            security: security.to_string(),
        }
    }

    fn scanning_model() -> (Model, u64) {
        let mut model = Model::default();
        let _ = scan(&mut model);
        let ticket = 1;
        assert!(model.pending.is_pending(ticket));
        (model, ticket)
    }

    #[test]
    fn scan_sets_fetching_flag() {
        let (model, _) = scanning_model();

        assert!(model.is_fetching_networks);
        assert_eq!(model.pending.count(RequestKind::Scan), 1);
    }

    #[test]
    fn successful_scan_replaces_list_verbatim() {
        let (mut model, ticket) = scanning_model();
        model.networks = vec![network("Old", "wpa2")];
        let scanned = vec![
            network("Zeta", "wpa2"),
            network("Alpha", "enterprise"),
            network("Zeta", "wpa2"),
        ];

        let _ = handle(
            CatalogEvent::ScanResponse {
                ticket,
                result: Ok(scanned.clone()),
            },
            &mut model,
        );

        assert_eq!(model.networks, scanned);
        assert!(!model.is_fetching_networks);
        assert_eq!(model.error_message, None);
    }

    #[test]
    fn failed_scan_keeps_previous_list() {
        let (mut model, ticket) = scanning_model();
        model.networks = vec![network("Home", "wpa2")];

        let _ = handle(
            CatalogEvent::ScanResponse {
                ticket,
                result: Err("500 Internal Server Error".to_string()),
            },
            &mut model,
        );

        assert_eq!(model.networks, vec![network("Home", "wpa2")]);
        assert!(!model.is_fetching_networks);
        assert_eq!(
            model.error_message.as_deref(),
            Some("Failed to fetch available networks. 500 Internal Server Error")
        );
    }

    #[test]
    fn elapsed_deadline_stops_scan_and_ignores_late_response() {
        let (mut model, ticket) = scanning_model();
        model.config.request_timeout_ms = 2000;

        let _ = handle(
            CatalogEvent::ScanDeadline(DeadlineOutput::Elapsed { id: ticket }),
            &mut model,
        );

        assert!(!model.is_fetching_networks);
        assert_eq!(
            model.error_message.as_deref(),
            Some("Failed to fetch available networks. Request timed out after 2000 ms")
        );

        let _ = handle(
            CatalogEvent::ScanResponse {
                ticket,
                result: Ok(vec![network("Late", "wpa2")]),
            },
            &mut model,
        );

        assert!(model.networks.is_empty());
    }

    #[test]
    fn later_resolving_scan_wins() {
        let mut model = Model::default();
        let _ = scan(&mut model);
        let _ = scan(&mut model);

        let _ = handle(
            CatalogEvent::ScanResponse {
                ticket: 2,
                result: Ok(vec![network("Second", "wpa2")]),
            },
            &mut model,
        );
        let _ = handle(
            CatalogEvent::ScanResponse {
                ticket: 1,
                result: Ok(vec![network("First", "wpa2")]),
            },
            &mut model,
        );

        assert_eq!(model.networks, vec![network("First", "wpa2")]);
        assert!(!model.is_fetching_networks);
    }
}
