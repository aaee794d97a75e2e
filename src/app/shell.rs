//! Composition root: wires state, worker, and navigator, and executes actions.

use crate::app::{handle_event, Action, AppState, UiEvent};
use crate::domain::error::Result;
use crate::domain::GatewayError;
use crate::navigation::{NavigationTarget, Navigator};
use crate::worker::{WorkerHandle, WorkerMessage};
use std::time::Duration;

/// Runs the event loop pieces for one navigator implementation.
pub struct Application<N> {
    state: AppState,
    worker: WorkerHandle,
    navigator: N,
    running: bool,
}

impl<N: Navigator> Application<N> {
    #[must_use]
    pub const fn new(state: AppState, worker: WorkerHandle, navigator: N) -> Self {
        Self {
            state,
            worker,
            navigator,
            running: true,
        }
    }

    /// Shows the sign-in screen.
    pub fn start(&mut self) {
        let action = self.state.navigate(NavigationTarget::SignIn);
        self.execute(vec![action]);
    }

    /// Handles `event` and runs the actions it produced.
    ///
    /// Returns whether the screen needs redrawing.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn dispatch(&mut self, event: &UiEvent) -> Result<bool> {
        let (redraw, actions) = handle_event(&mut self.state, event)?;
        let follow_up = self.execute(actions);
        Ok(redraw || follow_up)
    }

    /// Feeds every response that is already waiting back through the handler.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn pump(&mut self) -> Result<bool> {
        let mut redraw = false;
        while let Some(response) = self.worker.try_recv() {
            redraw |= self.dispatch(&UiEvent::Worker(response))?;
        }
        Ok(redraw)
    }

    /// Waits up to `timeout` for the worker, then drains whatever else arrived.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn wait_for_worker(&mut self, timeout: Duration) -> Result<bool> {
        let Some(response) = self.worker.recv_timeout(timeout) else {
            return Ok(false);
        };
        let redraw = self.dispatch(&UiEvent::Worker(response))?;
        Ok(self.pump()? || redraw)
    }

    /// Waits until nothing is in flight or `timeout` passes without a response.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn settle(&mut self, timeout: Duration) -> Result<bool> {
        let mut redraw = false;
        while self.state.is_busy() {
            let Some(response) = self.worker.recv_timeout(timeout) else {
                tracing::warn!("worker did not answer in time");
                break;
            };
            redraw |= self.dispatch(&UiEvent::Worker(response))?;
        }
        Ok(redraw)
    }

    fn execute(&mut self, actions: Vec<Action>) -> bool {
        let mut redraw = false;
        for action in actions {
            tracing::debug!(action = ?action, "executing action");
            match action {
                Action::PostToWorker(message) => redraw |= self.post(message),
                Action::Navigate(target) => target.dispatch(&mut self.navigator),
                Action::Quit => self.running = false,
            }
        }
        redraw
    }

    /// Sends `message`; if the worker is gone the request fails like a
    /// transport error so no listing stays stuck in flight.
    fn post(&mut self, message: WorkerMessage) -> bool {
        let Err(error) = self.worker.send(message.clone()) else {
            return false;
        };
        tracing::warn!(error = %error, "could not post to worker");
        let response = message.into_failure(GatewayError::Transport(error.to_string()));
        match handle_event(&mut self.state, &UiEvent::Worker(response)) {
            Ok((redraw, _)) => redraw,
            Err(error) => {
                tracing::warn!(error = %error, "failed to apply worker failure");
                true
            }
        }
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn navigator(&self) -> &N {
        &self.navigator
    }
}
