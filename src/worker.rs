//! Request dispatcher: runs issued requests on the tokio runtime.
//!
//! The UI thread sends a [`Dispatch`] for every request and keeps going.
//! [`serve`] spawns one task per dispatch (no queueing, one attempt each)
//! and reports a [`Completion`] carrying the same [`Ticket`].

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::api::{ApiError, ApiRequest, ProductApi, Reply};

/// Identifies one user operation. Later operations get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ticket(pub u64);

impl Ticket {
    /// Returns the ticket that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// A request handed to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub ticket: Ticket,
    pub request: ApiRequest,
}

/// A finished request.
#[derive(Debug)]
pub struct Completion {
    pub ticket: Ticket,
    pub request: ApiRequest,
    pub outcome: Result<Reply, ApiError>,
}

/// Runs until every [`Dispatch`] sender has been dropped.
pub async fn serve(
    api: ProductApi,
    mut dispatches: UnboundedReceiver<Dispatch>,
    completions: UnboundedSender<Completion>,
) {
    tracing::info!(base_url = api.base_url(), "Dispatcher started");

    while let Some(Dispatch { ticket, request }) = dispatches.recv().await {
        let api = api.clone();
        let completions = completions.clone();
        tokio::spawn(async move {
            let outcome = api.execute(&request).await;
            if let Err(e) = &outcome {
                tracing::warn!(
                    ticket = ticket.0,
                    op = request.name(),
                    status = ?e.status(),
                    error = %e,
                    "Request failed"
                );
            }
            let completion = Completion {
                ticket,
                request,
                outcome,
            };
            if completions.send(completion).is_err() {
                tracing::debug!(ticket = ticket.0, "Completion dropped, UI has exited");
            }
        });
    }

    tracing::info!("Dispatch channel closed, dispatcher stopping");
}
