/*
Each action (connect, repeat) runs its own submission state machine; both
share `attempted_connect` and `error_message`.

        submit                     response / deadline
  Idle ────────▶ Submitting ───────────────────────────▶ Settled(Ok | Error)
                     ▲                                        │
                     └─────────────── submit ─────────────────┘

Submissions are never exclusive: while several are in flight, results are
applied in the order they resolve and the last one to resolve decides the
shared error.
*/
use crux_core::{render::render, Command};

use crate::commands::deadline::DeadlineOutput;
use crate::events::{Event, SubmitEvent};
use crate::http_helpers::{failure_message, timeout_reason};
use crate::model::Model;
use crate::tracked_post;
use crate::types::{RequestKind, SubmissionOutcome, SubmissionState, SubmitAction};
use crate::Effect;

use super::{cancel_deadline, take_elapsed, take_response};

pub const CONNECT_FAILED: &str = "Failed to connect to the network.";
/// Repeat failures use the connect wording.
pub const REPEAT_FAILED: &str = CONNECT_FAILED;
pub const NO_NETWORK_SELECTED: &str = "No network selected";

/// Handle connect and repeat submissions
pub fn handle(event: SubmitEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        SubmitEvent::Connect => submit(SubmitAction::Connect, model),
        SubmitEvent::Repeat => submit(SubmitAction::Repeat, model),
        SubmitEvent::ConnectResponse { ticket, result } => {
            handle_submit_response(SubmitAction::Connect, ticket, result, model)
        }
        SubmitEvent::RepeatResponse { ticket, result } => {
            handle_submit_response(SubmitAction::Repeat, ticket, result, model)
        }
        SubmitEvent::ConnectDeadline(output) | SubmitEvent::RepeatDeadline(output) => {
            handle_submit_deadline(output, model)
        }
    }
}

fn failed(action: SubmitAction) -> &'static str {
    match action {
        SubmitAction::Connect => CONNECT_FAILED,
        SubmitAction::Repeat => REPEAT_FAILED,
    }
}

/// Send the current intent with `action`
///
/// A repeat overwrites the intent's `iface` with the discovered secondary
/// interface (or clears it if none was discovered) and keeps it in the model.
fn submit(action: SubmitAction, model: &mut Model) -> Command<Effect, Event> {
    let mut intent = model.submitted_intent();

    if intent.ssid().is_none() {
        return model
            .set_error_and_render(failure_message(failed(action), NO_NETWORK_SELECTED));
    }

    intent.iface = match action {
        SubmitAction::Connect => None,
        SubmitAction::Repeat => model
            .secondary_iface
            .as_ref()
            .map(|iface| iface.iface.clone()),
    };
    model.intent = intent.clone();

    model.attempted_connect = true;
    model.clear_error();
    *model.submission_state_mut(action) = SubmissionState::Submitting;

    match action {
        SubmitAction::Connect => {
            let url = model.config.local_url("/connect");
            tracked_post!(Submit, SubmitEvent, model, Connect, url, ConnectResponse, ConnectDeadline,
                CONNECT_FAILED,
                body_json: &intent
            )
        }
        SubmitAction::Repeat => {
            let url = model.config.bridge_url("/repeat");
            tracked_post!(Submit, SubmitEvent, model, Repeat, url, RepeatResponse, RepeatDeadline,
                REPEAT_FAILED,
                body_json: &intent
            )
        }
    }
}

fn handle_submit_response(
    action: SubmitAction,
    ticket: u64,
    result: Result<(), String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    if take_response(ticket, model).is_none() {
        return Command::done();
    }

    let outcome = match result {
        Ok(()) => {
            log::info!("{action:?} request accepted");
            model.clear_error();
            SubmissionOutcome::Ok
        }
        Err(reason) => {
            let message = failure_message(failed(action), &reason);
            model.set_error(message.clone());
            SubmissionOutcome::Error(message)
        }
    };
    settle(action, outcome, model);

    let to_event: fn(DeadlineOutput) -> Event = match action {
        SubmitAction::Connect => |output| Event::Submit(SubmitEvent::ConnectDeadline(output)),
        SubmitAction::Repeat => |output| Event::Submit(SubmitEvent::RepeatDeadline(output)),
    };
    Command::all([render(), cancel_deadline(ticket, to_event)])
}

fn handle_submit_deadline(output: DeadlineOutput, model: &mut Model) -> Command<Effect, Event> {
    let action = match take_elapsed(output, model) {
        Some(RequestKind::Connect) => SubmitAction::Connect,
        Some(RequestKind::Repeat) => SubmitAction::Repeat,
        _ => return Command::done(),
    };

    let reason = timeout_reason(model.config.request_timeout_ms);
    let message = failure_message(failed(action), &reason);
    model.set_error(message.clone());
    settle(action, SubmissionOutcome::Error(message), model);
    render()
}

/// Settle the action unless another submission of it is still in flight
fn settle(action: SubmitAction, outcome: SubmissionOutcome, model: &mut Model) {
    let still_pending = model.pending.count(RequestKind::from(action)) > 0;
    *model.submission_state_mut(action) = if still_pending {
        SubmissionState::Submitting
    } else {
        SubmissionState::Settled(outcome)
    };
}
