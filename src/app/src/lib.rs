pub mod commands;
pub mod config;
pub mod events;
pub mod http_helpers;
pub mod macros;
pub mod model;
pub mod notifications;
pub mod types;
pub mod update;

#[cfg(target_arch = "wasm32")]
pub mod wasm;


use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::deadline::{DeadlineOperation, DeadlineOutput},
    config::PortalConfig,
    events::Event,
    http_helpers::{
        error_reason, failure_reason, is_response_ok, process_json_response,
        process_status_response, BASE_URL,
    },
    model::{Model, ViewModel},
    notifications::{notifications, Notification, Severity},
    types::*,
};
pub use crux_http::Result as HttpResult;

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
    Deadline(DeadlineOperation),
}

pub type DeadlineCmd = crate::commands::deadline::Deadline<Effect, Event>;
pub type HttpCmd = crux_http::command::Http<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        ViewModel::from(model)
    }
}
