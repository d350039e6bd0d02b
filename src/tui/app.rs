use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tracing::{debug, info};

use crate::config::Config;
use crate::model::EventDraft;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{
    EventCreateState, EventListState, HelpState, draw_event_create, draw_event_list, draw_help,
};
use super::widgets::{StatusBarContext, draw_status_bar};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Events created this session.
    EventList,
    /// The event creation wizard.
    EventCreate,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    config: Config,
    event_list: EventListState,
    event_create: EventCreateState,
    help: HelpState,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::EventList`] screen.
    pub fn new(config: Config) -> Self {
        let event_create = EventCreateState::new(config.default_currency);
        Self {
            screen: Screen::EventList,
            config,
            event_list: EventListState::new(),
            event_create,
            help: HelpState::default(),
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the current screen above the status bar.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::EventList => draw_event_list(&self.event_list, frame, main_area),
            Screen::EventCreate => draw_event_create(&self.event_create, frame, main_area),
            Screen::Help => {
                match self.help.origin() {
                    Screen::EventCreate => {
                        draw_event_create(&self.event_create, frame, main_area);
                    }
                    _ => draw_event_list(&self.event_list, frame, main_area),
                }
                draw_help(&self.help, frame, main_area);
            }
        }

        draw_status_bar(&self.status_context(), frame, status_area);
    }

    /// What the status bar shows for the current screen.
    pub fn status_context(&self) -> StatusBarContext {
        let in_wizard = self.screen == Screen::EventCreate
            || (self.screen == Screen::Help && self.help.origin() == Screen::EventCreate);
        let flow = self.event_create.flow();
        StatusBarContext {
            step: in_wizard.then(|| (flow.step_number(), flow.total_steps())),
            event_count: self.event_list.events().len(),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.help = HelpState::open(self.screen, self.event_create.flow().step());
                self.screen = Screen::Help;
            }
            return;
        }

        let action = match self.screen {
            Screen::EventList => self.event_list.handle_key(key),
            Screen::EventCreate => self.event_create.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(Screen::EventCreate) if self.screen == Screen::EventList => {
                self.event_create = EventCreateState::new(self.config.default_currency);
                self.screen = Screen::EventCreate;
            }
            Action::Navigate(screen) => {
                debug!(from = ?self.screen, to = ?screen, "navigate");
                self.screen = screen;
            }
            Action::CreateEvent(draft) => {
                self.event_list.add_event(draft);
                info!(count = self.event_list.events().len(), "event stored");
                self.screen = Screen::EventList;
            }
            Action::Quit => self.should_quit = true,
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

    /// Events created so far.
    pub fn events(&self) -> &[EventDraft] {
        self.event_list.events()
    }

    /// Consumes the app, returning the created events.
    pub fn into_events(self) -> Vec<EventDraft> {
        self.event_list.into_events()
    }
}
