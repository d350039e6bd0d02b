//! Status bar widget: persistent one-line context display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Wizard progress as `(current, total)` while creating an event.
    pub step: Option<(usize, usize)>,
    /// Number of events created this session.
    pub event_count: usize,
}

impl StatusBarContext {
    /// The status text, e.g. `Step 1 of 2  3 events`.
    pub fn text(&self) -> String {
        let events = match self.event_count {
            1 => "1 event".to_string(),
            n => format!("{n} events"),
        };
        match self.step {
            Some((current, total)) => format!("Step {current} of {total}  {events}"),
            None => events,
        }
    }
}

/// Renders a one-line status bar.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let line = Line::from(vec![Span::styled(ctx.text(), cyan)]);
    frame.render_widget(Paragraph::new(line), area);
}
