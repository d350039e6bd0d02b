//! Event list screen: the events created this session.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::model::{EventDraft, EventSummary};
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

/// State for the event list screen.
#[derive(Debug, Clone, Default)]
pub struct EventListState {
    events: Vec<EventDraft>,
    /// Index of the highlighted event, or `None` if the list is empty.
    selected: Option<usize>,
}

impl EventListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a created event and highlights it.
    pub fn add_event(&mut self, event: EventDraft) {
        self.events.push(event);
        self.selected = Some(self.events.len() - 1);
    }

    pub fn events(&self) -> &[EventDraft] {
        &self.events
    }

    /// Consumes the state, returning the created events in creation order.
    pub fn into_events(self) -> Vec<EventDraft> {
        self.events
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Summary of the highlighted event.
    pub fn selected_summary(&self) -> Option<EventSummary> {
        self.selected
            .and_then(|i| self.events.get(i))
            .map(EventSummary::of)
    }

    fn select_prev(&mut self) {
        self.selected = match self.selected {
            Some(i) if i > 0 => Some(i - 1),
            other => other,
        };
    }

    fn select_next(&mut self) {
        self.selected = match self.selected {
            Some(i) if i + 1 < self.events.len() => Some(i + 1),
            other => other,
        };
    }
}

impl ScreenState for EventListState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.select_prev();
                Action::None
            }
            KeyCode::Down => {
                self.select_next();
                Action::None
            }
            KeyCode::Char('n') => Action::Navigate(Screen::EventCreate),
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the event list screen.
#[mutants::skip]
pub fn draw_event_list(state: &EventListState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Events ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if state.events().is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from("No events yet."),
            Line::from("Press 'n' to create a new event."),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header = Row::new(vec!["Name", "Type", "Dates", "Budget"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = state
        .events()
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let style = if state.selected() == Some(i) {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default()
            };
            let summary = EventSummary::of(event);
            Row::new(vec![
                summary.name,
                summary.category,
                summary.dates,
                summary.budget,
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(20),
        Constraint::Length(18),
        Constraint::Length(28),
        Constraint::Length(16),
    ];
    let table = Table::new(rows, widths).header(header);

    let [table_area, detail_area, footer_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(6),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(table, table_area);

    if let Some(summary) = state.selected_summary() {
        let label = Style::default().fg(Color::Gray);
        let row = |name: &'static str, text: String| {
            Line::from(vec![Span::styled(format!("{name:<10}"), label), Span::raw(text)])
        };
        let lines = vec![
            row("Name", summary.name),
            row("Type", summary.category),
            row("Location", summary.location),
            row("Dates", summary.dates),
            row("Budget", summary.budget),
        ];
        let detail = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));
        frame.render_widget(detail, detail_area);
    }

    let footer = Paragraph::new("n: new event  \u{2191}/\u{2193}: select  q: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
