//! Top-level application state shared by the event loop and the renderer.

use crate::game::{ArcadeEngine, Phase, TickOutcome};
use crate::input::{Action, ContactInput};
use crate::page::contact::SENT_MESSAGE;
use crate::page::{footer, ContactForm, FlowingCube, Toasts};
use crate::store::BestScoreStore;
use rand::Rng;
use std::time::Instant;
use tracing::debug;

/// Which screen occupies the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Arcade,
    Contact,
}

pub struct App<S: BestScoreStore, R: Rng> {
    pub engine: ArcadeEngine<S, R>,
    pub tab: Tab,
    pub contact: ContactForm,
    pub toasts: Toasts,
    pub cubes: Vec<FlowingCube>,
    pub footer: String,
    pub started_at: Instant,
    pub should_quit: bool,
}

impl<S: BestScoreStore, R: Rng> App<S, R> {
    pub fn new(engine: ArcadeEngine<S, R>, cubes: Vec<FlowingCube>, now: Instant) -> Self {
        Self {
            engine,
            tab: Tab::Arcade,
            contact: ContactForm::new(),
            toasts: Toasts::new(),
            cubes,
            footer: footer::footer_line(),
            started_at: now,
            should_quit: false,
        }
    }

    /// Apply one input action.
    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::Flap => {
                if self.engine.is_running() {
                    self.engine.jump();
                } else {
                    self.engine.start();
                }
            }
            Action::StartButton => match self.engine.phase() {
                Phase::Idle => self.engine.start(),
                Phase::Running | Phase::GameOver => self.engine.restart(),
            },
            Action::SwitchTab => {
                self.tab = match self.tab {
                    Tab::Arcade => Tab::Contact,
                    Tab::Contact => Tab::Arcade,
                };
                debug!(tab = ?self.tab, "switched tab");
            }
            Action::Quit => self.should_quit = true,
            Action::Contact(input) => self.apply_contact(input, now),
            Action::None => {}
        }
    }

    fn apply_contact(&mut self, input: ContactInput, now: Instant) {
        match input {
            ContactInput::Char(c) => self.contact.handle_char_input(c),
            ContactInput::Backspace => self.contact.handle_backspace(),
            ContactInput::NextField => self.contact.focus_next(),
            ContactInput::PrevField => self.contact.focus_prev(),
            ContactInput::Submit => match self.contact.submit() {
                Ok(_) => self.toasts.success(SENT_MESSAGE, now),
                Err(e) => self.toasts.error(e.to_string(), now),
            },
            ContactInput::Leave => self.tab = Tab::Arcade,
        }
    }

    /// Display refresh: run the engine's pending frame and expire toasts.
    pub fn on_frame(&mut self, now: Instant) -> Option<TickOutcome> {
        let timestamp_ms = now.saturating_duration_since(self.started_at).as_secs_f64() * 1000.0;
        self.toasts.prune(now);
        self.engine.run_pending_frame(timestamp_ms)
    }

    /// Seconds since the app started, for the banner animation.
    pub fn elapsed_secs(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.started_at).as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::store::MemoryStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn app() -> App<MemoryStore, ChaCha8Rng> {
        let engine = ArcadeEngine::new(
            GameConfig::default(),
            MemoryStore::new(),
            ChaCha8Rng::seed_from_u64(3),
        );
        App::new(engine, Vec::new(), Instant::now())
    }

    #[test]
    fn test_flap_starts_when_idle() {
        let mut app = app();
        app.apply(Action::Flap, Instant::now());
        assert!(app.engine.is_running());
        // Starting does not also jump
        assert!(app.engine.bird().velocity.abs() < f64::EPSILON);

        app.apply(Action::Flap, Instant::now());
        assert!(app.engine.bird().velocity < 0.0);
    }

    #[test]
    fn test_start_button_restarts_running_session() {
        let mut app = app();
        let now = Instant::now();
        app.apply(Action::StartButton, now);
        let first = app.engine.pending_frame();
        app.apply(Action::StartButton, now);
        assert!(app.engine.is_running());
        assert_ne!(app.engine.pending_frame(), first);
    }

    #[test]
    fn test_on_frame_advances_running_game() {
        let mut app = app();
        let now = Instant::now();
        assert!(app.on_frame(now).is_none());
        app.apply(Action::Flap, now);
        let outcome = app.on_frame(now);
        assert!(matches!(outcome, Some(TickOutcome::Advanced { .. })));
    }

    #[test]
    fn test_contact_submit_raises_toasts() {
        let mut app = app();
        let now = Instant::now();
        app.apply(Action::SwitchTab, now);
        assert_eq!(app.tab, Tab::Contact);

        app.apply(Action::Contact(ContactInput::Submit), now);
        assert_eq!(
            app.toasts.iter().last().unwrap().message,
            "Please fill out all fields"
        );

        for c in "Ada".chars() {
            app.apply(Action::Contact(ContactInput::Char(c)), now);
        }
        app.apply(Action::Contact(ContactInput::NextField), now);
        for c in "ada@example.com".chars() {
            app.apply(Action::Contact(ContactInput::Char(c)), now);
        }
        app.apply(Action::Contact(ContactInput::NextField), now);
        for c in "Hello".chars() {
            app.apply(Action::Contact(ContactInput::Char(c)), now);
        }
        app.apply(Action::Contact(ContactInput::Submit), now);
        assert_eq!(app.toasts.len(), 2);
        assert_eq!(app.toasts.iter().last().unwrap().message, SENT_MESSAGE);
        assert!(app.contact.name.is_empty());

        app.apply(Action::Contact(ContactInput::Leave), now);
        assert_eq!(app.tab, Tab::Arcade);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.apply(Action::Quit, Instant::now());
        assert!(app.should_quit);
    }
}
