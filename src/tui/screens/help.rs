//! Key reference overlay for whatever the user was looking at when F1 was
//! pressed. Inside the wizard the table follows the active step.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Padding, Row, Table};

use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::wizard::Step;

/// Which key table is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    EventList,
    Details,
    Confirm,
}

impl HelpTopic {
    /// Picks the table for `screen`. `step` only matters inside the wizard.
    pub fn for_screen(screen: Screen, step: Step) -> Self {
        match (screen, step) {
            (Screen::EventCreate, Step::Details) => Self::Details,
            (Screen::EventCreate, Step::Confirm) => Self::Confirm,
            (Screen::EventList | Screen::Help, _) => Self::EventList,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::EventList => "Events",
            Self::Details => "New Event: Details",
            Self::Confirm => "New Event: Review",
        }
    }

    pub fn keys(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::EventList => &[
                ("↑/↓", "select event"),
                ("n", "new event"),
                ("q / Esc", "quit"),
            ],
            Self::Details => &[
                ("Tab / Shift-Tab", "next / prev field"),
                ("Space", "flip toggle"),
                ("← / →", "cycle event type or currency"),
                ("F2", "suggestions for type, name or location"),
                ("↑/↓ Enter", "pick from open list"),
                ("Enter", "review event"),
                ("Esc", "close list, or cancel"),
            ],
            Self::Confirm => &[
                ("Enter", "create event"),
                ("Esc / Backspace", "back to details"),
            ],
        }
    }
}

/// State for the help overlay.
#[derive(Debug, Clone)]
pub struct HelpState {
    origin: Screen,
    topic: HelpTopic,
}

impl Default for HelpState {
    fn default() -> Self {
        Self::open(Screen::EventList, Step::Details)
    }
}

impl HelpState {
    /// Help for `origin`, returning there on any key.
    pub fn open(origin: Screen, step: Step) -> Self {
        Self {
            origin,
            topic: HelpTopic::for_screen(origin, step),
        }
    }

    pub fn origin(&self) -> Screen {
        self.origin
    }

    pub fn topic(&self) -> HelpTopic {
        self.topic
    }
}

impl ScreenState for HelpState {
    fn handle_key(&mut self, _key: KeyEvent) -> Action {
        Action::Navigate(self.origin)
    }
}

/// Draws the key table as a popup centred in `area`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let keys = state.topic().keys();
    let height = keys.len() as u16 + 4;
    let [popup] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(64)])
        .flex(Flex::Center)
        .areas(popup);

    let block = Block::default()
        .title(format!(" Help: {} ", state.topic().title()))
        .title_bottom(" any key to close ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let rows = keys
        .iter()
        .map(|(key, desc)| Row::new(vec![key.to_string(), desc.to_string()]).style(key_style));
    let table = Table::new(rows, [Constraint::Length(18), Constraint::Min(0)])
        .block(block.padding(Padding::uniform(1)));

    frame.render_widget(Clear, popup);
    frame.render_widget(table, popup);
}
