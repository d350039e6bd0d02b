//! Popup list used for pickers and suggestions.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// A titled list with a highlighted entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    title: String,
    items: Vec<String>,
    /// `None` when the list is empty.
    selected: Option<usize>,
}

impl Dropdown {
    pub fn new(title: impl Into<String>, items: Vec<String>) -> Self {
        let selected = if items.is_empty() { None } else { Some(0) };
        Self {
            title: title.into(),
            items,
            selected,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the highlighted entry.
    pub fn current(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.items.get(i))
            .map(String::as_str)
    }

    /// Replaces the items, keeping the highlight in range.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.selected = match self.selected {
            _ if items.is_empty() => None,
            Some(i) => Some(i.min(items.len() - 1)),
            None => Some(0),
        };
        self.items = items;
    }

    /// Moves the highlight up by one (no wrap).
    pub fn select_prev(&mut self) {
        self.selected = match self.selected {
            Some(i) if i > 0 => Some(i - 1),
            other => other,
        };
    }

    /// Moves the highlight down by one (no wrap).
    pub fn select_next(&mut self) {
        self.selected = match self.selected {
            Some(i) if i + 1 < self.items.len() => Some(i + 1),
            other => other,
        };
    }
}

/// Renders the dropdown as a popup centred in `area`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_dropdown(dropdown: &Dropdown, frame: &mut Frame, area: Rect) {
    let height = (dropdown.items.len().max(1) as u16).saturating_add(2);
    let [popup] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(popup);

    let block = Block::default()
        .title(format!(" {} ", dropdown.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines: Vec<Line> = if dropdown.items.is_empty() {
        vec![Line::styled("No matches", Style::default().fg(Color::DarkGray))]
    } else {
        dropdown
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if dropdown.selected == Some(i) {
                    Style::default().fg(Color::Black).bg(Color::Yellow)
                } else {
                    Style::default()
                };
                Line::styled(item.clone(), style)
            })
            .collect()
    };

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
