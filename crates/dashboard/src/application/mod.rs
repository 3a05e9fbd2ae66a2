//! Application layer - Core Elm architecture implementation
//!
//! This module implements the Model-Update-View pattern from Elm architecture:
//! [`state`] is the model, [`update`] maps messages to patches and [`view`]
//! renders a snapshot. [`Application`] owns the loop that ties them together
//! and is the only writer of state.

pub mod bindings;
pub mod requirements;
pub mod state;
pub mod store;
pub mod update;
pub mod view;

pub use bindings::Bindings;
pub use requirements::{requirements, PhotoQuery, Requirement};
pub use state::{ApplicationState, Patch, PhotoSet};
pub use store::{merge, Store};
pub use update::{update, Outcome, UpdateOptions};
pub use view::render_app;

use std::sync::Arc;

use tokio::{signal, sync::mpsc};
use tracing::{debug, info, instrument};

use crate::{
    error::Result,
    message::AppMsg,
    services::{DataGateway, FetchScheduler},
    surface::Surface,
};

/// Main application following Elm architecture
pub struct Application<S: Surface> {
    store: Store,
    /// Controls present in the last render
    bindings: Bindings,
    scheduler: FetchScheduler,
    surface: S,
    sender: mpsc::UnboundedSender<AppMsg>,
    receiver: mpsc::UnboundedReceiver<AppMsg>,
    options: UpdateOptions,
    input_closed: bool,
}

impl<S: Surface> Application<S> {
    pub fn new(gateway: Arc<dyn DataGateway>, surface: S, options: UpdateOptions) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            store: Store::default(),
            bindings: Bindings::default(),
            scheduler: FetchScheduler::new(gateway, sender.clone()),
            surface,
            sender,
            receiver,
            options,
            input_closed: false,
        }
    }

    /// Channel for feeding user actions into the loop
    pub fn sender(&self) -> mpsc::UnboundedSender<AppMsg> {
        self.sender.clone()
    }

    pub fn state(&self) -> &ApplicationState {
        self.store.state()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Fetches started but not yet handled
    pub fn pending_fetches(&self) -> usize {
        self.scheduler.in_flight()
    }

    /// Replace the document, rebind controls and request whatever the new
    /// view is missing
    #[instrument(level = "debug", skip(self))]
    pub fn render(&mut self) -> Result<()> {
        let state = self.store.snapshot();
        self.surface.replace(&render_app(&state))?;
        self.bindings = Bindings::for_state(&state);
        self.request_missing(&state);
        Ok(())
    }

    fn request_missing(&mut self, state: &ApplicationState) {
        let started = self.scheduler.schedule(requirements(state));
        if started > 0 {
            debug!(started, "Fetches scheduled");
        }
    }

    /// Handle one message. Returns `true` when the application should quit.
    pub fn handle_message(&mut self, msg: AppMsg) -> Result<bool> {
        match &msg {
            AppMsg::Loaded(loaded) => self.scheduler.complete(&loaded.requirement()),
            AppMsg::FetchFailed { requirement, .. } => self.scheduler.complete(requirement),
            AppMsg::InputClosed => self.input_closed = true,
            AppMsg::User(_) => {}
        }

        match update(self.store.state(), &self.bindings, msg, self.options) {
            Outcome::Quit => return Ok(true),
            Outcome::Ignored => {}
            Outcome::Patch { patch, from_fetch } => {
                let render = if from_fetch {
                    let guard = patch.clone();
                    self.store
                        .apply_guarded(patch, |previous| guard.is_noop_for(previous))
                } else {
                    self.store.apply(patch)
                };

                if render {
                    self.render()?;
                } else {
                    let state = self.store.snapshot();
                    self.request_missing(&state);
                }
            }
        }

        Ok(false)
    }

    /// Run the main loop: render, then handle messages until quit, Ctrl+C,
    /// or closed input with no fetch left outstanding
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting dashboard loop");
        self.render()?;

        let ctrl_c = signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            if self.input_closed && self.scheduler.is_idle() {
                info!("Input closed and no fetches outstanding");
                break;
            }

            tokio::select! {
                msg = self.receiver.recv() => {
                    let Some(msg) = msg else { break };
                    if self.handle_message(msg)? {
                        break;
                    }
                }
                _ = &mut ctrl_c => {
                    info!("Received Ctrl+C, shutting down");
                    break;
                }
            }
        }

        info!("Dashboard loop stopped");
        Ok(())
    }

    /// Handle messages until every outstanding fetch has settled
    pub async fn run_until_idle(&mut self) -> Result<()> {
        while !self.scheduler.is_idle() {
            let Some(msg) = self.receiver.recv().await else {
                break;
            };
            if self.handle_message(msg)? {
                break;
            }
        }
        Ok(())
    }
}
