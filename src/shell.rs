//! Native shell driving the core
//!
//! Effects are executed on tokio tasks. Their outputs come back on a single
//! channel and are resolved in completion order, so the core sees responses
//! and deadlines exactly as they race on the wire.
//!
//! The core starts a deadline with every request, so the shell is idle once no
//! deadline is running. Requests still in flight at that point have been given
//! up by the core and are aborted.

use anyhow::{Context, Result};
use crux_core::{Core, Request};
use crux_http::protocol::{HttpRequest, HttpResult};
use log::{debug, warn};
use std::{collections::HashMap, collections::VecDeque, sync::Arc, time::Duration};
use tokio::{
    sync::{mpsc, oneshot},
    task::AbortHandle,
};
use wifi_portal_core::{App, DeadlineOperation, DeadlineOutput, Effect, Event, ViewModel};

use crate::http_client::Transport;

enum Completed {
    Http(Request<HttpRequest>, HttpResult),
    Deadline(Request<DeadlineOperation>, DeadlineOutput),
}

pub struct Shell<T> {
    core: Core<App>,
    transport: Arc<T>,
    tx: mpsc::UnboundedSender<Completed>,
    rx: mpsc::UnboundedReceiver<Completed>,
    deadlines: HashMap<u64, oneshot::Sender<()>>,
    requests: Vec<AbortHandle>,
}

impl<T> Shell<T>
where
    T: Transport + Send + Sync + 'static,
{
    pub fn new(transport: T) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            core: Core::new(),
            transport: Arc::new(transport),
            tx,
            rx,
            deadlines: HashMap::new(),
            requests: Vec::new(),
        }
    }

    /// Send `event` to the core and start the effects it requests
    pub fn dispatch(&mut self, event: Event) -> Result<()> {
        let effects = self.core.process_event(event);
        self.run_effects(effects)
    }

    /// Resolve effects until no deadline is running
    pub async fn run_until_idle(&mut self) -> Result<()> {
        loop {
            while let Ok(completed) = self.rx.try_recv() {
                self.complete(completed)?;
            }
            if self.deadlines.is_empty() {
                break;
            }

            let completed = self
                .rx
                .recv()
                .await
                .context("failed to receive effect output: channel closed")?;
            self.complete(completed)?;
        }

        self.abandon_requests();

        Ok(())
    }

    fn complete(&mut self, completed: Completed) -> Result<()> {
        let effects = match completed {
            Completed::Http(mut request, result) => self
                .core
                .resolve(&mut request, result)
                .context("failed to resolve http request")?,
            Completed::Deadline(mut request, output) => {
                self.deadlines.remove(&output.id());
                self.core
                    .resolve(&mut request, output)
                    .context("failed to resolve deadline")?
            }
        };
        self.run_effects(effects)
    }

    fn abandon_requests(&mut self) {
        for handle in self.requests.drain(..) {
            if !handle.is_finished() {
                debug!("aborting request the core no longer waits for");
                handle.abort();
            }
        }
    }

    pub fn view(&self) -> ViewModel {
        self.core.view()
    }

    fn run_effects(&mut self, effects: Vec<Effect>) -> Result<()> {
        let mut queue = VecDeque::from(effects);

        while let Some(effect) = queue.pop_front() {
            match effect {
                // the view is read once the shell is idle
                Effect::Render(_) => {}
                Effect::Http(request) => self.spawn_http(request),
                Effect::Deadline(mut request) => match request.operation {
                    DeadlineOperation::Start { id, millis } => {
                        self.spawn_deadline(request, id, millis)
                    }
                    DeadlineOperation::Cancel { id } => {
                        match self.deadlines.remove(&id) {
                            Some(cancel) => {
                                let _ = cancel.send(());
                            }
                            None => debug!("deadline {id} already finished"),
                        }
                        let effects = self
                            .core
                            .resolve(&mut request, DeadlineOutput::Cancelled { id })
                            .context("failed to resolve deadline cancellation")?;
                        queue.extend(effects);
                    }
                },
            }
        }

        Ok(())
    }

    fn spawn_http(&mut self, request: Request<HttpRequest>) {
        let transport = Arc::clone(&self.transport);
        let tx = self.tx.clone();

        let task = tokio::spawn(async move {
            let result = transport.execute(request.operation.clone()).await;
            if tx.send(Completed::Http(request, result)).is_err() {
                warn!("dropped http response: shell is gone");
            }
        });
        self.requests.push(task.abort_handle());
    }

    fn spawn_deadline(&mut self, request: Request<DeadlineOperation>, id: u64, millis: u64) {
        let (cancel_tx, cancel_rx) = oneshot::channel();
        self.deadlines.insert(id, cancel_tx);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let output = tokio::select! {
                _ = tokio::time::sleep(Duration::from_millis(millis)) => DeadlineOutput::Elapsed { id },
                _ = cancel_rx => DeadlineOutput::Cancelled { id },
            };
            if tx.send(Completed::Deadline(request, output)).is_err() {
                warn!("dropped deadline {id}: shell is gone");
            }
        });
    }
}
