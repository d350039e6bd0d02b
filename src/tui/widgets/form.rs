//! Reusable one-line-per-field form widget.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Width of the label column.
const LABEL_WIDTH: usize = 20;

/// How a field's value is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text typed by the user.
    Text,
    /// An on/off switch flipped with Space.
    Toggle(bool),
    /// A value cycled with Left/Right or picked from a dropdown.
    Choice,
}

/// A single field as rendered by [`draw_form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Display label shown to the left of the value.
    pub label: String,
    /// Current value text. Unused for toggles.
    pub value: String,
    pub kind: FieldKind,
    /// Hint shown after the value, e.g. a parse problem.
    pub hint: Option<String>,
    /// Whether the field is marked with `*`.
    pub required: bool,
    /// Disabled fields are dimmed and do not show a cursor.
    pub disabled: bool,
}

impl FormField {
    /// Creates an enabled field with no hint.
    pub fn new(label: impl Into<String>, value: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            kind,
            hint: None,
            required: false,
            disabled: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn hint(mut self, hint: Option<String>) -> Self {
        self.hint = hint;
        self
    }

    /// The text shown in the value column.
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Text => self.value.clone(),
            FieldKind::Toggle(on) => (if on { "[x]" } else { "[ ]" }).to_string(),
            FieldKind::Choice => format!("‹ {} ›", self.value),
        }
    }
}

/// Wrapping focus index over a fixed number of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    index: usize,
    len: usize,
}

impl Focus {
    /// Creates a focus ring over `len` fields, starting on the first.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves focus to the next field, wrapping around.
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Focuses `index`. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

/// Renders `fields` one per line within `area`, highlighting `focus`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(fields: &[FormField], focus: usize, frame: &mut Frame, area: Rect) {
    let constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(1)).collect();
    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in fields.iter().enumerate() {
        let is_focused = i == focus;

        let label_style = if is_focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let value_style = if field.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let label = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.clone()
        };

        let mut spans = vec![
            Span::styled(format!("{label:<LABEL_WIDTH$}"), label_style),
            Span::styled(field.display_value(), value_style),
        ];
        if is_focused && field.kind == FieldKind::Text && !field.disabled {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        if let Some(ref hint) = field.hint {
            spans.push(Span::styled(
                format!("  {hint}"),
                Style::default().fg(Color::Red),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), rows[i]);
    }
}
