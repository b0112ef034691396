use crux_core::{render::render, Command};

use crate::commands::deadline::DeadlineOutput;
use crate::events::{BridgeEvent, Event};
use crate::http_helpers::{failure_message, timeout_reason};
use crate::model::Model;
use crate::tracked_get;
use crate::types::Iface;
use crate::Effect;

use super::{cancel_deadline, take_elapsed, take_response};

pub const FETCH_BRIDGE_FAILED: &str = "Failed to fetch bridge devices.";

/// Handle secondary interface discovery events
pub fn handle(event: BridgeEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        BridgeEvent::Discover => discover(model),
        BridgeEvent::DiscoverResponse { ticket, result } => {
            handle_discover_response(ticket, result, model)
        }
        BridgeEvent::DiscoverDeadline(output) => handle_discover_deadline(output, model),
    }
}

/// Ask the bridge service for its secondary interface, once per bridge host
pub fn discover(model: &mut Model) -> Command<Effect, Event> {
    if model.bridge_discovery_started {
        return Command::done();
    }

    model.bridge_discovery_started = true;
    let url = model.config.bridge_url("/bridge");
    tracked_get!(Bridge, BridgeEvent, model, Bridge, url, DiscoverResponse, DiscoverDeadline,
        expect_json: Iface
    )
}

fn handle_discover_response(
    ticket: u64,
    result: Result<Iface, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    if take_response(ticket, model).is_none() {
        return Command::done();
    }

    match result {
        Ok(iface) => {
            log::info!("secondary interface {} available", iface.iface);
            model.secondary_iface = Some(iface);
        }
        Err(reason) => model.set_error(failure_message(FETCH_BRIDGE_FAILED, &reason)),
    }

    Command::all([
        render(),
        cancel_deadline(ticket, |output| {
            Event::Bridge(BridgeEvent::DiscoverDeadline(output))
        }),
    ])
}

fn handle_discover_deadline(output: DeadlineOutput, model: &mut Model) -> Command<Effect, Event> {
    if take_elapsed(output, model).is_none() {
        return Command::done();
    }

    let reason = timeout_reason(model.config.request_timeout_ms);
    model.set_error_and_render(failure_message(FETCH_BRIDGE_FAILED, &reason))
}
