//! Event creation screen: hosts the two-step wizard.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::catalog::{self, NAME_SUGGESTIONS, POPULAR_DESTINATIONS};
use crate::model::{Category, Currency};
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::tui::widgets::{Dropdown, FieldKind, Focus, FormField, draw_dropdown, draw_form};
use crate::wizard::{FieldEdit, FlowError, FlowOutcome, Step, TextIssue, WizardFlow};

const CATEGORY: usize = 0;
const NAME: usize = 1;
const LOCATION: usize = 2;
const ANYWHERE: usize = 3;
const DATES_TBD: usize = 4;
const START: usize = 5;
const END: usize = 6;
const TIME: usize = 7;
const BUDGET_FLEX: usize = 8;
const CURRENCY: usize = 9;
const AMOUNT: usize = 10;

/// Number of focusable fields on the details step.
const FIELD_COUNT: usize = 11;

/// Which list an open dropdown is offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownKind {
    Category,
    Name,
    Destination,
}

/// State for the event creation screen.
#[derive(Debug, Clone)]
pub struct EventCreateState {
    flow: WizardFlow,
    focus: Focus,
    dropdown: Option<(DropdownKind, Dropdown)>,
    message: Option<String>,
}

impl Default for EventCreateState {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

impl EventCreateState {
    /// Starts a fresh wizard whose budget defaults to `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            flow: WizardFlow::new(currency),
            focus: Focus::new(FIELD_COUNT),
            dropdown: None,
            message: None,
        }
    }

    pub fn flow(&self) -> &WizardFlow {
        &self.flow
    }

    pub fn focus(&self) -> usize {
        self.focus.index()
    }

    pub fn dropdown(&self) -> Option<(DropdownKind, &Dropdown)> {
        self.dropdown.as_ref().map(|(kind, dd)| (*kind, dd))
    }

    /// Feedback from the last blocked transition, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => match self.flow.complete() {
                Ok(FlowOutcome::Created(draft)) => Action::CreateEvent(draft),
                Ok(_) => Action::None,
                Err(e) => self.fail(e),
            },
            KeyCode::Esc | KeyCode::Backspace => self.retreat(),
            _ => Action::None,
        }
    }

    fn handle_details_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.focus.next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus.prev();
                Action::None
            }
            KeyCode::Char(ch) => {
                if ch != ' ' || !self.toggle_focused() {
                    self.insert_char(ch);
                }
                Action::None
            }
            KeyCode::Backspace => {
                self.delete_char();
                Action::None
            }
            KeyCode::Left => {
                self.cycle(false);
                Action::None
            }
            KeyCode::Right => {
                self.cycle(true);
                Action::None
            }
            KeyCode::F(2) => {
                self.open_dropdown();
                Action::None
            }
            KeyCode::Enter => match self.flow.advance() {
                Ok(_) => {
                    self.message = None;
                    Action::None
                }
                Err(e) => self.fail(e),
            },
            KeyCode::Esc => self.retreat(),
            _ => Action::None,
        }
    }

    fn handle_dropdown_key(&mut self, key: KeyEvent) -> Action {
        let Some((kind, dropdown)) = self.dropdown.as_mut() else {
            return Action::None;
        };
        let kind = *kind;
        match key.code {
            KeyCode::Up => dropdown.select_prev(),
            KeyCode::Down => dropdown.select_next(),
            KeyCode::Esc => self.dropdown = None,
            KeyCode::Enter => self.pick_from_dropdown(),
            KeyCode::Char(ch) if kind == DropdownKind::Destination => {
                self.insert_char(ch);
                self.refresh_destinations();
            }
            KeyCode::Backspace if kind == DropdownKind::Destination => {
                self.delete_char();
                self.refresh_destinations();
            }
            _ => {}
        }
        Action::None
    }

    fn retreat(&mut self) -> Action {
        self.dropdown = None;
        self.message = None;
        match self.flow.retreat() {
            Ok(FlowOutcome::Cancelled) => Action::Navigate(Screen::EventList),
            Ok(_) => Action::None,
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, error: FlowError) -> Action {
        self.message = Some(match error {
            FlowError::Incomplete(problems) => problems
                .first()
                .map_or_else(|| "event details are incomplete".to_string(), ToString::to_string),
            other => other.to_string(),
        });
        Action::None
    }

    fn edit(&mut self, edit: FieldEdit) {
        match self.flow.apply(edit) {
            Ok(()) => self.message = None,
            Err(e) => {
                self.fail(e);
            }
        }
    }

    /// Flips the focused toggle. Returns `false` when the focused field is
    /// not a toggle.
    fn toggle_focused(&mut self) -> bool {
        let details = self.flow.details();
        let edit = match self.focus.index() {
            ANYWHERE => FieldEdit::SetLocationFlexible(!details.is_location_flexible()),
            DATES_TBD => FieldEdit::SetDatesFlexible(!details.are_dates_flexible()),
            BUDGET_FLEX => FieldEdit::SetBudgetFlexible(!details.is_budget_flexible()),
            _ => return false,
        };
        self.edit(edit);
        true
    }

    fn text_value(&self, field: usize) -> Option<&str> {
        let details = self.flow.details();
        match field {
            NAME => Some(details.name()),
            LOCATION => Some(details.location_text()),
            START => Some(details.start_date()),
            END => Some(details.end_date()),
            TIME => Some(details.time()),
            AMOUNT => Some(details.amount()),
            _ => None,
        }
    }

    fn set_text(&mut self, field: usize, text: String) {
        let edit = match field {
            NAME => FieldEdit::SetName(text),
            LOCATION => FieldEdit::SetLocation(text),
            START => FieldEdit::SetStartDate(text),
            END => FieldEdit::SetEndDate(text),
            TIME => FieldEdit::SetTime(text),
            AMOUNT => FieldEdit::SetAmount(text),
            _ => return,
        };
        self.edit(edit);
    }

    fn insert_char(&mut self, ch: char) {
        let field = self.focus.index();
        if !accepts(field, ch) {
            return;
        }
        if let Some(value) = self.text_value(field) {
            let mut text = value.to_string();
            text.push(ch);
            self.set_text(field, text);
        }
    }

    fn delete_char(&mut self) {
        let field = self.focus.index();
        if let Some(value) = self.text_value(field) {
            let mut text = value.to_string();
            if text.pop().is_some() {
                self.set_text(field, text);
            }
        }
    }

    fn cycle(&mut self, forward: bool) {
        let details = self.flow.details();
        match self.focus.index() {
            CATEGORY => {
                if let Some(category) = step_through(Category::all(), details.category(), forward)
                {
                    self.edit(FieldEdit::SelectCategory(category));
                }
            }
            CURRENCY => {
                if let Some(currency) =
                    step_through(Currency::all(), Some(details.currency()), forward)
                {
                    self.edit(FieldEdit::SetCurrency(currency));
                }
            }
            _ => {}
        }
    }

    fn open_dropdown(&mut self) {
        self.dropdown = match self.focus.index() {
            CATEGORY => {
                let items = Category::all()
                    .iter()
                    .map(|c| format!("{} {} - {}", c.emoji(), c.label(), c.subtitle()))
                    .collect();
                Some((DropdownKind::Category, Dropdown::new("Event Type", items)))
            }
            NAME => {
                let items = NAME_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
                Some((DropdownKind::Name, Dropdown::new("Suggestions", items)))
            }
            LOCATION => Some((
                DropdownKind::Destination,
                Dropdown::new("Destinations", self.destination_items()),
            )),
            _ => None,
        };
    }

    fn destination_items(&self) -> Vec<String> {
        let query = self.flow.details().location_text();
        if query.trim().is_empty() {
            POPULAR_DESTINATIONS.iter().map(|s| s.to_string()).collect()
        } else {
            catalog::search_destinations(query)
                .into_iter()
                .map(|d| d.name.to_string())
                .collect()
        }
    }

    fn refresh_destinations(&mut self) {
        let items = self.destination_items();
        if let Some((_, dropdown)) = self.dropdown.as_mut() {
            dropdown.set_items(items);
        }
    }

    fn pick_from_dropdown(&mut self) {
        let Some((kind, dropdown)) = self.dropdown.take() else {
            return;
        };
        let edit = match kind {
            DropdownKind::Category => dropdown
                .selected()
                .and_then(|i| Category::all().get(i))
                .map(|c| FieldEdit::SelectCategory(*c)),
            DropdownKind::Name => dropdown.current().map(|s| FieldEdit::SetName(s.into())),
            DropdownKind::Destination => {
                dropdown.current().map(|s| FieldEdit::SetLocation(s.into()))
            }
        };
        if let Some(edit) = edit {
            self.edit(edit);
        }
    }

    /// Rows for the details form, in field index order.
    fn fields(&self) -> Vec<FormField> {
        let details = self.flow.details();
        let issues = details.text_issues();
        let hint = |issue: TextIssue| {
            issues
                .contains(&issue)
                .then(|| issue.message().to_string())
        };
        let category = details
            .category()
            .map_or_else(|| "choose one".to_string(), |c| c.label().to_string());
        let currency = details.currency();
        let dates_off = details.are_dates_flexible();

        vec![
            FormField::new("Event Type", category, FieldKind::Choice).required(),
            FormField::new("Event Name", details.name(), FieldKind::Text).required(),
            FormField::new("Location", details.location_text(), FieldKind::Text).required(),
            FormField::new(
                "Anywhere",
                "",
                FieldKind::Toggle(details.is_location_flexible()),
            ),
            FormField::new("Dates TBD", "", FieldKind::Toggle(dates_off)),
            FormField::new("Start (YYYY-MM-DD)", details.start_date(), FieldKind::Text)
                .required()
                .disabled(dates_off)
                .hint(hint(TextIssue::StartDate)),
            FormField::new("End (optional)", details.end_date(), FieldKind::Text)
                .disabled(dates_off)
                .hint(hint(TextIssue::EndDate)),
            FormField::new("Time (HH:MM)", details.time(), FieldKind::Text)
                .disabled(dates_off)
                .hint(hint(TextIssue::Time)),
            FormField::new(
                "Flexible Budget",
                "",
                FieldKind::Toggle(details.is_budget_flexible()),
            ),
            FormField::new(
                "Currency",
                format!("{} {}", currency.symbol(), currency.code()),
                FieldKind::Choice,
            ),
            FormField::new("Amount", details.amount(), FieldKind::Text)
                .required()
                .disabled(details.is_budget_flexible())
                .hint(hint(TextIssue::Amount)),
        ]
    }
}

impl ScreenState for EventCreateState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match self.flow.step() {
            Step::Confirm => self.handle_confirm_key(key),
            Step::Details if self.dropdown.is_some() => self.handle_dropdown_key(key),
            Step::Details => self.handle_details_key(key),
        }
    }
}

/// Characters each text field accepts.
fn accepts(field: usize, ch: char) -> bool {
    match field {
        START | END => ch.is_ascii_digit() || ch == '-',
        TIME => ch.is_ascii_digit() || ch == ':',
        AMOUNT => ch.is_ascii_digit() || ch == '.',
        _ => true,
    }
}

/// The neighbour of `current` in `all`, wrapping. With no current value the
/// first (forward) or last (backward) entry is chosen.
fn step_through<T: Copy + PartialEq>(all: &[T], current: Option<T>, forward: bool) -> Option<T> {
    if all.is_empty() {
        return None;
    }
    let len = all.len();
    let index = match current.and_then(|c| all.iter().position(|x| *x == c)) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    all.get(index).copied()
}

/// Renders the event creation screen.
#[mutants::skip]
pub fn draw_event_create(state: &EventCreateState, frame: &mut Frame, area: Rect) {
    let flow = state.flow();
    let step_name = match flow.step() {
        Step::Details => "Details",
        Step::Confirm => "Confirm",
    };
    let block = Block::default()
        .title(format!(
            " New Event - Step {} of {}: {step_name} ",
            flow.step_number(),
            flow.total_steps()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match flow.step() {
        Step::Details => draw_details(state, frame, inner),
        Step::Confirm => draw_confirm(state, frame, inner),
    }
}

#[mutants::skip]
fn draw_details(state: &EventCreateState, frame: &mut Frame, area: Rect) {
    let [form_area, _gap, hints_area, message_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(FIELD_COUNT as u16),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    draw_form(&state.fields(), state.focus(), frame, form_area);

    let category = state
        .flow()
        .details()
        .category()
        .unwrap_or(Category::Travel);
    let dim = Style::default().fg(Color::DarkGray);
    let mut hints = vec![Line::from(Span::styled(
        "Budget ideas",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    hints.extend(catalog::budget_hints(category).iter().map(|h| {
        Line::from(vec![
            Span::styled(format!("  {:<28}", h.example), dim),
            Span::raw(h.estimate),
        ])
    }));
    frame.render_widget(Paragraph::new(hints), hints_area);

    if let Some(msg) = state.message() {
        let message = Paragraph::new(Line::from(Span::styled(
            msg,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(message, message_area);
    }

    let footer = Paragraph::new(Line::from(
        "Tab: next  Space: toggle  \u{2190}/\u{2192}: cycle  F2: list  Enter: continue  Esc: cancel",
    ))
    .style(dim);
    frame.render_widget(footer, footer_area);

    if let Some((_, dropdown)) = state.dropdown() {
        draw_dropdown(dropdown, frame, area);
    }
}

#[mutants::skip]
fn draw_confirm(state: &EventCreateState, frame: &mut Frame, area: Rect) {
    let summary = state.flow().summary();
    let label = Style::default().fg(Color::Gray);
    let value = Style::default().add_modifier(Modifier::BOLD);
    let header = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let row = |name: &'static str, text: String| {
        Line::from(vec![
            Span::styled(format!("{name:<12}"), label),
            Span::styled(text, value),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(summary.name.clone(), header)),
        Line::from(""),
        row("Type", summary.category),
        row("Location", summary.location),
        row("Dates", summary.dates),
        row("Budget", summary.budget),
        Line::from(""),
        Line::from(Span::styled("What happens next?", header)),
    ];
    for step in [
        "Invite people to join the event",
        "Plan activities together",
        "Track shared expenses",
    ] {
        lines.push(Line::from(format!("  \u{2022} {step}")));
    }

    let [content_area, message_area, footer_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(lines), content_area);

    if let Some(msg) = state.message() {
        let message = Paragraph::new(msg).style(Style::default().fg(Color::Red));
        frame.render_widget(message, message_area);
    }

    let footer = Paragraph::new("Enter: create event  Esc: back to details")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;
    use crate::model::{Budget, DateKind, EventDates, Location};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_string(state: &mut EventCreateState, s: &str) {
        for ch in s.chars() {
            state.handle_key(press(KeyCode::Char(ch)));
        }
    }

    fn focus_on(state: &mut EventCreateState, field: usize) {
        while state.focus() != field {
            state.handle_key(press(KeyCode::Tab));
        }
    }

    /// Travel, "Goa Adventure 2025", "Goa, India", 2025-03-15, flexible budget.
    fn fill_goa(state: &mut EventCreateState) {
        focus_on(state, CATEGORY);
        state.handle_key(press(KeyCode::Right));
        focus_on(state, NAME);
        type_string(state, "Goa Adventure 2025");
        focus_on(state, LOCATION);
        type_string(state, "Goa, India");
        focus_on(state, START);
        type_string(state, "2025-03-15");
        focus_on(state, BUDGET_FLEX);
        state.handle_key(press(KeyCode::Char(' ')));
    }

    mod construction {
        use super::*;

        #[test]
        fn starts_on_details_with_first_field_focused() {
            let state = EventCreateState::new(Currency::Inr);
            assert_eq!(state.flow().step(), Step::Details);
            assert_eq!(state.focus(), CATEGORY);
            assert!(state.dropdown().is_none());
            assert!(state.message().is_none());
            assert_eq!(state.flow().draft().budget.currency(), Currency::Inr);
        }

        #[test]
        fn default_uses_usd() {
            let state = EventCreateState::default();
            assert_eq!(state.flow().draft().budget.currency(), Currency::Usd);
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn tab_advances_focus() {
            let mut state = EventCreateState::default();
            state.handle_key(press(KeyCode::Tab));
            assert_eq!(state.focus(), NAME);
        }

        #[test]
        fn back_tab_wraps_to_last_field() {
            let mut state = EventCreateState::default();
            state.handle_key(press(KeyCode::BackTab));
            assert_eq!(state.focus(), AMOUNT);
        }

        #[test]
        fn esc_on_details_cancels_to_event_list() {
            let mut state = EventCreateState::default();
            let action = state.handle_key(press(KeyCode::Esc));
            assert_eq!(action, Action::Navigate(Screen::EventList));
            assert!(state.flow().is_finished());
        }

        #[test]
        fn enter_on_empty_form_shows_first_problem() {
            let mut state = EventCreateState::default();
            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::None);
            assert_eq!(state.flow().step(), Step::Details);
            assert_eq!(state.message(), Some("choose an event type"));
        }

        #[test]
        fn enter_on_complete_form_moves_to_confirm() {
            let mut state = EventCreateState::default();
            fill_goa(&mut state);
            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::None);
            assert_eq!(state.flow().step(), Step::Confirm);
            assert!(state.message().is_none());
        }

        #[test]
        fn esc_on_confirm_returns_to_details_with_values() {
            let mut state = EventCreateState::default();
            fill_goa(&mut state);
            state.handle_key(press(KeyCode::Enter));
            let action = state.handle_key(press(KeyCode::Esc));
            assert_eq!(action, Action::None);
            assert_eq!(state.flow().step(), Step::Details);
            assert_eq!(state.flow().details().name(), "Goa Adventure 2025");
        }

        #[test]
        fn enter_on_confirm_creates_event() {
            let mut state = EventCreateState::default();
            fill_goa(&mut state);
            state.handle_key(press(KeyCode::Enter));
            let action = state.handle_key(press(KeyCode::Enter));
            let Action::CreateEvent(draft) = action else {
                panic!("expected CreateEvent, got {action:?}");
            };
            assert_eq!(draft.category, Some(Category::Travel));
            assert_eq!(draft.name, "Goa Adventure 2025");
            assert_eq!(draft.location, Location::Named("Goa, India".into()));
            assert_eq!(draft.dates.kind(), DateKind::Single);
            assert!(draft.budget.is_flexible());
        }

        #[test]
        fn second_enter_after_create_reports_finished() {
            let mut state = EventCreateState::default();
            fill_goa(&mut state);
            state.handle_key(press(KeyCode::Enter));
            state.handle_key(press(KeyCode::Enter));
            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::None);
            assert_eq!(state.message(), Some("the wizard has already finished"));
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn typing_name_updates_draft() {
            let mut state = EventCreateState::default();
            focus_on(&mut state, NAME);
            type_string(&mut state, "Team Offsite");
            assert_eq!(state.flow().draft().name, "Team Offsite");
        }

        #[test]
        fn backspace_removes_last_char() {
            let mut state = EventCreateState::default();
            focus_on(&mut state, NAME);
            type_string(&mut state, "Trip");
            state.handle_key(press(KeyCode::Backspace));
            assert_eq!(state.flow().draft().name, "Tri");
        }

        #[test]
        fn space_in_text_field_is_typed() {
            let mut state = EventCreateState::default();
            focus_on(&mut state, NAME);
            type_string(&mut state, "a b");
            assert_eq!(state.flow().details().name(), "a b");
        }

        #[test]
        fn date_field_ignores_letters() {
            let mut state = EventCreateState::default();
            focus_on(&mut state, START);
            type_string(&mut state, "2025-0x3-15");
            assert_eq!(state.flow().details().start_date(), "2025-03-15");
        }

        #[test]
        fn amount_field_accepts_digits_and_dot() {
            let mut state = EventCreateState::default();
            focus_on(&mut state, AMOUNT);
            type_string(&mut state, "1,250.50");
            assert_eq!(state.flow().details().amount(), "1250.50");
        }

        #[test]
        fn end_date_makes_range() {
            let mut state = EventCreateState::default();
            focus_on(&mut state, START);
            type_string(&mut state, "2025-03-15");
            focus_on(&mut state, END);
            type_string(&mut state, "2025-03-18");
            assert_eq!(state.flow().draft().dates.kind(), DateKind::Multi);
        }

        #[test]
        fn space_toggles_dates_tbd_and_clears_dates() {
            let mut state = EventCreateState::default();
            focus_on(&mut state, START);
            type_string(&mut state, "2025-03-15");
            focus_on(&mut state, DATES_TBD);
            state.handle_key(press(KeyCode::Char(' ')));
            assert_eq!(state.flow().draft().dates, EventDates::Flexible);
            assert_eq!(state.flow().details().start_date(), "");
        }

        #[test]
        fn space_toggles_anywhere() {
            let mut state = EventCreateState::default();
            focus_on(&mut state, ANYWHERE);
            state.handle_key(press(KeyCode::Char(' ')));
            assert_eq!(state.flow().draft().location, Location::Flexible);
            state.handle_key(press(KeyCode::Char(' ')));
            assert!(!state.flow().details().is_location_flexible());
        }

        #[test]
        fn right_cycles_category_from_none_to_first() {
            let mut state = EventCreateState::default();
            state.handle_key(press(KeyCode::Right));
            assert_eq!(state.flow().draft().category, Some(Category::Travel));
            state.handle_key(press(KeyCode::Right));
            assert_eq!(state.flow().draft().category, Some(Category::Party));
        }

        #[test]
        fn left_cycles_category_from_none_to_last() {
            let mut state = EventCreateState::default();
            state.handle_key(press(KeyCode::Left));
            assert_eq!(state.flow().draft().category, Some(Category::Other));
        }

        #[test]
        fn right_cycles_currency() {
            let mut state = EventCreateState::default();
            focus_on(&mut state, CURRENCY);
            state.handle_key(press(KeyCode::Right));
            assert_eq!(state.flow().draft().budget.currency(), Currency::Eur);
            state.handle_key(press(KeyCode::Left));
            state.handle_key(press(KeyCode::Left));
            assert_eq!(state.flow().draft().budget.currency(), Currency::Jpy);
        }

        #[test]
        fn rupee_amount_reaches_draft() {
            let mut state = EventCreateState::new(Currency::Inr);
            focus_on(&mut state, AMOUNT);
            type_string(&mut state, "50000");
            let budget = &state.flow().draft().budget;
            assert!(matches!(budget, Budget::Fixed { .. }));
            assert_eq!(budget.amount().map(|a| a.value()), Some(50_000.0));
        }
    }

    mod dropdowns {
        use super::*;

        #[test]
        fn f2_on_category_picks_highlighted_entry() {
            let mut state = EventCreateState::default();
            state.handle_key(press(KeyCode::F(2)));
            let (kind, dropdown) = state.dropdown().unwrap();
            assert_eq!(kind, DropdownKind::Category);
            assert_eq!(dropdown.items().len(), Category::all().len());

            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Enter));
            assert!(state.dropdown().is_none());
            assert_eq!(state.flow().draft().category, Some(Category::Party));
        }

        #[test]
        fn f2_on_name_offers_suggestions() {
            let mut state = EventCreateState::default();
            focus_on(&mut state, NAME);
            state.handle_key(press(KeyCode::F(2)));
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Enter));
            assert_eq!(state.flow().draft().name, NAME_SUGGESTIONS[1]);
        }

        #[test]
        fn destination_dropdown_starts_with_popular() {
            let mut state = EventCreateState::default();
            focus_on(&mut state, LOCATION);
            state.handle_key(press(KeyCode::F(2)));
            let (kind, dropdown) = state.dropdown().unwrap();
            assert_eq!(kind, DropdownKind::Destination);
            assert_eq!(dropdown.items().len(), POPULAR_DESTINATIONS.len());
        }

        #[test]
        fn typing_filters_destinations() {
            let mut state = EventCreateState::default();
            focus_on(&mut state, LOCATION);
            state.handle_key(press(KeyCode::F(2)));
            type_string(&mut state, "dub");
            let (_, dropdown) = state.dropdown().unwrap();
            assert_eq!(dropdown.items(), ["Dubai, UAE".to_string()]);

            state.handle_key(press(KeyCode::Enter));
            assert_eq!(
                state.flow().draft().location,
                Location::Named("Dubai, UAE".into())
            );
        }

        #[test]
        fn esc_closes_dropdown_without_cancelling() {
            let mut state = EventCreateState::default();
            state.handle_key(press(KeyCode::F(2)));
            let action = state.handle_key(press(KeyCode::Esc));
            assert_eq!(action, Action::None);
            assert!(state.dropdown().is_none());
            assert!(!state.flow().is_finished());
        }

        #[test]
        fn f2_on_toggle_opens_nothing() {
            let mut state = EventCreateState::default();
            focus_on(&mut state, ANYWHERE);
            state.handle_key(press(KeyCode::F(2)));
            assert!(state.dropdown().is_none());
        }
    }

    mod helpers {
        use super::*;

        #[test]
        fn step_through_wraps_both_ways() {
            let all = [1, 2, 3];
            assert_eq!(step_through(&all, Some(3), true), Some(1));
            assert_eq!(step_through(&all, Some(1), false), Some(3));
            assert_eq!(step_through::<i32>(&[], None, true), None);
        }

        #[test]
        fn text_issue_hint_shown_for_bad_time() {
            let mut state = EventCreateState::default();
            focus_on(&mut state, TIME);
            type_string(&mut state, "25:99");
            let fields = state.fields();
            assert_eq!(
                fields[TIME].hint.as_deref(),
                Some(TextIssue::Time.message())
            );
            assert!(fields[START].hint.is_none());
        }

        #[test]
        fn flexible_budget_disables_amount() {
            let mut state = EventCreateState::default();
            focus_on(&mut state, BUDGET_FLEX);
            state.handle_key(press(KeyCode::Char(' ')));
            assert!(state.fields()[AMOUNT].disabled);
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn render(state: &EventCreateState) -> String {
            let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
            terminal
                .draw(|frame| draw_event_create(state, frame, frame.area()))
                .unwrap();
            let buf = terminal.backend().buffer();
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        #[test]
        fn details_shows_progress_and_fields() {
            let state = EventCreateState::default();
            let output = render(&state);
            assert!(output.contains("Step 1 of 2"));
            assert!(output.contains("Event Name"));
            assert!(output.contains("Budget ideas"));
        }

        #[test]
        fn details_shows_blocked_message() {
            let mut state = EventCreateState::default();
            state.handle_key(press(KeyCode::Enter));
            let output = render(&state);
            assert!(output.contains("choose an event type"));
        }

        #[test]
        fn confirm_shows_summary() {
            let mut state = EventCreateState::default();
            fill_goa(&mut state);
            state.handle_key(press(KeyCode::Enter));
            let output = render(&state);
            assert!(output.contains("Step 2 of 2"));
            assert!(output.contains("Goa Adventure 2025"));
            assert!(output.contains("Mar 15, 2025"));
            assert!(output.contains("Flexible"));
            assert!(output.contains("What happens next?"));
        }
    }
}
