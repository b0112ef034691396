//! Deadline command definitions.
//!
//! Every request the core sends is paired with a deadline. The Shell runs each
//! deadline as a cancellable timer and reports whether it elapsed or was
//! cancelled, so a stalled backend cannot leave a request pending forever.

use crux_core::{command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Operations that the Shell needs to perform for deadlines
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeadlineOperation {
    /// Start a timer that elapses after `millis`
    Start { id: u64, millis: u64 },
    /// Cancel the running timer `id`
    Cancel { id: u64 },
}

// The output from deadline operations (shell tells us what happened)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeadlineOutput {
    Elapsed { id: u64 },
    Cancelled { id: u64 },
}

impl DeadlineOutput {
    pub fn id(&self) -> u64 {
        match self {
            DeadlineOutput::Elapsed { id } | DeadlineOutput::Cancelled { id } => *id,
        }
    }

    pub fn is_elapsed(&self) -> bool {
        matches!(self, DeadlineOutput::Elapsed { .. })
    }
}

impl crux_core::capability::Operation for DeadlineOperation {
    type Output = DeadlineOutput;
}

/// Command-based deadline API
pub struct Deadline<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Deadline<Effect, Event>
where
    Effect: Send + From<crux_core::Request<DeadlineOperation>> + 'static,
    Event: Send + 'static,
{
    /// Start a deadline for the request identified by `id`
    pub fn start(id: u64, millis: u64) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(DeadlineOperation::Start { id, millis })
    }

    /// Cancel the deadline of the request identified by `id`
    pub fn cancel(id: u64) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(DeadlineOperation::Cancel { id })
    }
}

/// Request builder for deadline operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: DeadlineOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<DeadlineOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: DeadlineOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = DeadlineOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
