use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::api::ApiRequest;
use crate::controller::{self, Operation};
use crate::worker::{Completion, Dispatch, Ticket};

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{HelpState, ProductFormState, draw_help, draw_product_form};

/// How long to wait for a key before checking for finished requests.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Edit the product form and press its buttons.
    ProductForm,
    /// Show keybinding help.
    Help,
}

impl Screen {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::ProductForm => "Product Form",
            Self::Help => "Help",
        }
    }
}

/// Top-level application state.
///
/// Requests are handed to the dispatcher as [`Dispatch`]es and come back
/// as [`Completion`]s. Only the completion for the most recent operation
/// is applied; anything older is stale and dropped.
pub struct App {
    screen: Screen,
    form: ProductFormState,
    help: HelpState,
    dispatches: UnboundedSender<Dispatch>,
    completions: UnboundedReceiver<Completion>,
    latest: Ticket,
    pending: Option<Ticket>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::ProductForm`] screen.
    pub fn new(
        dispatches: UnboundedSender<Dispatch>,
        completions: UnboundedReceiver<Completion>,
    ) -> Self {
        Self {
            screen: Screen::ProductForm,
            form: ProductFormState::new(),
            help: HelpState::new(),
            dispatches,
            completions,
            latest: Ticket::default(),
            pending: None,
            should_quit: false,
        }
    }

    /// Main event loop: apply completions → draw → poll for a key → dispatch.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            self.drain_completions()?;
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key)?;
            }
        }
        Ok(())
    }

    /// Renders the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::ProductForm => draw_product_form(&self.form, self.is_pending(), frame, area),
            Screen::Help => draw_help(&self.help, frame, area),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), AppError> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.code == KeyCode::F(1) && self.screen != Screen::Help {
            return self.apply(Action::Navigate(Screen::Help));
        }

        let action = match self.screen {
            Screen::ProductForm => self.form.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action)
    }

    /// Applies an action returned by a screen.
    fn apply(&mut self, action: Action) -> Result<(), AppError> {
        match action {
            Action::None => {}
            Action::Navigate(Screen::Help) => {
                self.help.set_origin(self.screen);
                self.help.reset();
                self.screen = Screen::Help;
            }
            Action::Navigate(screen) => self.screen = screen,
            Action::Submit(op) => self.submit(op)?,
            Action::Quit => self.should_quit = true,
        }
        Ok(())
    }

    /// Runs a form operation: local effects now, the request (if any) on
    /// the dispatcher.
    ///
    /// Every operation takes a new ticket, so a response to anything
    /// pressed earlier is ignored when it arrives.
    pub fn submit(&mut self, op: Operation) -> Result<(), AppError> {
        self.latest = self.latest.next();
        let ticket = self.latest;

        match controller::begin(op, self.form.view_mut()) {
            Some(request) => {
                tracing::info!(
                    ticket = ticket.0,
                    op = request.name(),
                    path = %request.path(),
                    "Issuing request"
                );
                self.pending = Some(ticket);
                self.dispatches
                    .send(Dispatch { ticket, request })
                    .map_err(|_| AppError::DispatcherGone)?;
            }
            None => {
                tracing::debug!(ticket = ticket.0, ?op, "Operation finished locally");
                self.pending = None;
            }
        }
        Ok(())
    }

    /// Applies a finished request if it belongs to the latest operation.
    ///
    /// Returns `true` if the view was updated.
    pub fn apply_completion(&mut self, completion: Completion) -> bool {
        if completion.ticket != self.latest {
            tracing::debug!(
                ticket = completion.ticket.0,
                latest = self.latest.0,
                op = completion.request.name(),
                "Discarding stale completion"
            );
            return false;
        }

        self.pending = None;
        if matches!(completion.request, ApiRequest::Search(_)) && completion.outcome.is_ok() {
            self.form.reset_selection();
        }
        controller::complete(
            &completion.request,
            completion.outcome,
            self.form.view_mut(),
        );
        true
    }

    /// Applies every completion that has arrived since the last call.
    pub fn drain_completions(&mut self) -> Result<(), AppError> {
        loop {
            match self.completions.try_recv() {
                Ok(completion) => {
                    self.apply_completion(completion);
                }
                Err(TryRecvError::Empty) => return Ok(()),
                Err(TryRecvError::Disconnected) => return Err(AppError::DispatcherGone),
            }
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns `true` while the latest operation is waiting on the server.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the product form screen state.
    pub fn form(&self) -> &ProductFormState {
        &self.form
    }
}
