mod event;
mod state;
mod transition;

pub use event::*;
pub use state::*;
pub use transition::transition;

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::{SubmissionResult, Submitter};

/// Owns the contact form state and runs the effects of each transition.
///
/// Deliveries run on a spawned task and come back as [`Event::Resolved`]
/// through an internal channel, so the controller keeps reacting to field
/// changes (and ignoring extra submits) while a message is in flight.
pub struct FormController<N: Notifier> {
    state: FormState,
    submitter: Arc<dyn Submitter>,
    notifier: N,
    resolution_tx: mpsc::UnboundedSender<SubmissionResult>,
    resolutions: mpsc::UnboundedReceiver<SubmissionResult>,
}

impl<N: Notifier> FormController<N> {
    pub fn new(submitter: Arc<dyn Submitter>, notifier: N) -> Self {
        let (resolution_tx, resolutions) = mpsc::unbounded_channel();

        Self {
            state: FormState::default(),
            submitter,
            notifier,
            resolution_tx,
            resolutions,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Applies one event. Must be called from within a tokio runtime since a
    /// valid submit spawns the delivery task.
    pub fn dispatch(&mut self, event: Event) {
        let (next, effects) = transition(&self.state, event);
        self.state = next;

        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Deliver(fields) => {
                let submitter = Arc::clone(&self.submitter);
                let tx = self.resolution_tx.clone();

                tokio::spawn(async move {
                    let result = submitter.submit(&fields).await;
                    if tx.send(result).is_err() {
                        tracing::warn!("form controller dropped before delivery resolved");
                    }
                });
            }
            Effect::Notify(notification) => self.notifier.notify(notification),
            Effect::LogFailure(reason) => {
                tracing::error!(reason = %reason, "Failed to send contact message");
            }
        }
    }

    /// Waits for the in-flight delivery, if any, and applies its result.
    pub async fn settle(&mut self) -> &FormState {
        if self.state.is_busy() {
            if let Some(result) = self.resolutions.recv().await {
                self.dispatch(Event::Resolved(result));
            }
        }

        &self.state
    }

    /// Submit action followed by waiting for its outcome.
    pub async fn submit(&mut self) -> &FormState {
        self.dispatch(Event::SubmitRequested);
        self.settle().await
    }

    /// Event loop driven by UI events. UI events take priority over delivery
    /// results, so a submit queued before a result lands is still ignored.
    /// Returns the final state once the event sender is dropped and any
    /// in-flight delivery has resolved.
    pub async fn run(mut self, mut events: mpsc::Receiver<Event>) -> (FormState, N) {
        loop {
            tokio::select! {
                biased;

                event = events.recv() => match event {
                    Some(event) => self.dispatch(event),
                    None => break,
                },
                Some(result) = self.resolutions.recv() => {
                    self.dispatch(Event::Resolved(result));
                }
            }
        }

        self.settle().await;

        (self.state, self.notifier)
    }
}
