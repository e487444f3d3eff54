//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! All side effects happen here. The reducer stays pure and returns
//! [`UiEffect`]s; the [`EffectDispatcher`] turns them into API calls whose
//! results come back through the inbox as [`UiEvent`]s.

mod handlers;
pub mod inbox;

use std::future::Future;
use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use remind_core::ApiClient;
use remind_core::config::Config;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick cadence; drives the spinner and toast expiry.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Executes effects against the API.
///
/// Separate from [`TuiRuntime`] so the same wiring can be driven without a
/// terminal.
#[derive(Debug, Clone)]
pub struct EffectDispatcher {
    client: ApiClient,
    inbox_tx: UiEventSender,
}

impl EffectDispatcher {
    pub fn new(client: ApiClient, inbox_tx: UiEventSender) -> Self {
        Self { client, inbox_tx }
    }

    pub fn execute_all(&self, app: &mut AppState, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute(app, effect);
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn execute(&self, app: &mut AppState, effect: UiEffect) {
        tracing::debug!(?effect, "executing effect");
        let client = self.client.clone();
        match effect {
            UiEffect::Quit => app.should_quit = true,

            UiEffect::StoreSession(session) => {
                handlers::store_session(self.client.session(), session);
            }
            UiEffect::ClearSession => handlers::clear_session(self.client.session()),
            UiEffect::Authenticate { mode, credentials } => {
                self.spawn_effect(handlers::authenticate(client, mode, credentials));
            }

            UiEffect::LoadGroups => self.spawn_effect(handlers::load_groups(client)),
            UiEffect::CreateGroup(group) => {
                self.spawn_effect(handlers::create_group(client, group));
            }
            UiEffect::DeleteGroup(id) => self.spawn_effect(handlers::delete_group(client, id)),

            UiEffect::LoadReminders(group_id) => {
                self.spawn_effect(handlers::load_reminders(client, group_id));
            }
            UiEffect::CreateReminder { group_id, reminder } => {
                self.spawn_effect(handlers::create_reminder(client, group_id, reminder));
            }
            UiEffect::ToggleReminder {
                group_id,
                id,
                completed,
            } => {
                self.spawn_effect(handlers::toggle_reminder(client, group_id, id, completed));
            }
            UiEffect::DeleteReminder { group_id, id } => {
                self.spawn_effect(handlers::delete_reminder(client, group_id, id));
            }
        }
    }

    /// Spawns `fut` and sends its event to the inbox when it completes.
    fn spawn_effect<Fut>(&self, fut: Fut)
    where
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(fut.await);
        });
    }
}

/// Full-screen TUI runtime.
///
/// The terminal is restored on drop and on panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    dispatcher: EffectDispatcher,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Takes over the terminal. Starts on Groups when `client`'s session
    /// store already holds a session, otherwise on Login.
    pub fn new(config: &Config, client: ApiClient) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let (inbox_tx, inbox_rx) = inbox::channel();
        let client = client.with_auth_failure_hook(inbox::session_expired_hook(inbox_tx.clone()));
        let state = AppState::new(client.session().current_user(), config.toast_duration());

        Ok(Self {
            terminal,
            state,
            dispatcher: EffectDispatcher::new(client, inbox_tx),
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;

        let effects = self.state.start();
        self.dispatcher.execute_all(&mut self.state, effects);
        let result = self.event_loop();

        let _ = terminal::disable_input_features();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            if dirty {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
            }

            let events = self.collect_events()?;
            dirty = !events.is_empty();
            for event in events {
                let effects = update::update(&mut self.state, event);
                self.dispatcher.execute_all(&mut self.state, effects);
            }
        }

        Ok(())
    }

    /// Drains the inbox, then waits for terminal input until the next tick
    /// is due.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();
        while let Ok(event) = self.inbox_rx.try_recv() {
            events.push(event);
        }

        let poll_duration = if events.is_empty() {
            TICK_INTERVAL.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration).context("Failed to poll terminal events")? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= TICK_INTERVAL {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
