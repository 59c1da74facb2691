use chrono::{Days, NaiveDate};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::errors::FormError;

use super::actions::TuiAction;
use super::editor::Editor;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Secret,
    Amount,
    Date,
    Choice(Vec<&'static str>),
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputClass {
    Typed,
    Date,
    Choice,
    Toggle,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub label: &'static str,
    placeholder: &'static str,
    kind: FieldKind,
    editor: Editor,
    choice: Option<usize>,
    checked: bool,
}

impl Field {
    fn new(label: &'static str, placeholder: &'static str, kind: FieldKind) -> Self {
        Self {
            label,
            placeholder,
            kind,
            editor: Editor::default(),
            choice: None,
            checked: false,
        }
    }

    pub fn text(label: &'static str, placeholder: &'static str) -> Self {
        Self::new(label, placeholder, FieldKind::Text)
    }

    pub fn secret(label: &'static str, placeholder: &'static str) -> Self {
        Self::new(label, placeholder, FieldKind::Secret)
    }

    pub fn amount(label: &'static str, placeholder: &'static str) -> Self {
        Self::new(label, placeholder, FieldKind::Amount)
    }

    pub fn date(label: &'static str, date: NaiveDate) -> Self {
        let mut field = Self::new(label, "YYYY-MM-DD", FieldKind::Date);
        field.set_date(date);
        field
    }

    pub fn choice(label: &'static str, placeholder: &'static str, options: Vec<&'static str>) -> Self {
        Self::new(label, placeholder, FieldKind::Choice(options))
    }

    pub fn toggle(label: &'static str) -> Self {
        Self::new(label, "", FieldKind::Toggle)
    }

    pub fn value(&self) -> &str {
        self.editor.value()
    }

    #[cfg(test)]
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.editor.set_value(value);
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.editor.set_value(date.format(DATE_FORMAT).to_string());
    }

    pub fn date_value(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.value().trim(), DATE_FORMAT).ok()
    }

    pub fn selected(&self) -> Option<usize> {
        self.choice
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    fn clear(&mut self) {
        self.editor.clear();
        self.choice = None;
        self.checked = false;
    }

    fn input_class(&self) -> InputClass {
        match self.kind {
            FieldKind::Text | FieldKind::Secret | FieldKind::Amount => InputClass::Typed,
            FieldKind::Date => InputClass::Date,
            FieldKind::Choice(_) => InputClass::Choice,
            FieldKind::Toggle => InputClass::Toggle,
        }
    }

    fn is_editable(&self) -> bool {
        matches!(self.input_class(), InputClass::Typed | InputClass::Date)
    }

    fn accepts(&self, c: char) -> bool {
        match self.kind {
            FieldKind::Text | FieldKind::Secret => !c.is_control(),
            FieldKind::Amount => c.is_ascii_digit() || ".,-".contains(c),
            FieldKind::Date => c.is_ascii_digit() || c == '-',
            FieldKind::Choice(_) | FieldKind::Toggle => false,
        }
    }

    fn cycle(&mut self, forward: bool) {
        let FieldKind::Choice(options) = &self.kind else {
            return;
        };
        let last = options.len().checked_sub(1);
        self.choice = match (self.choice, forward) {
            (None, true) => options.first().map(|_| 0),
            (None, false) => last,
            (Some(i), true) if Some(i) == last => None,
            (Some(i), true) => Some(i + 1),
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };
    }

    fn shift_date(&mut self, forward: bool) {
        if let Some(date) = self.date_value() {
            let shifted = if forward {
                date.checked_add_days(Days::new(1))
            } else {
                date.checked_sub_days(Days::new(1))
            };
            if let Some(shifted) = shifted {
                self.set_date(shifted);
            }
        }
    }

    /// Returns the visible text and whether it is the placeholder.
    fn display(&self) -> (String, bool) {
        match &self.kind {
            FieldKind::Choice(options) => match self.choice.and_then(|i| options.get(i)) {
                Some(option) => (format!("< {option} >"), false),
                None => (format!("< {} >", self.placeholder), true),
            },
            FieldKind::Toggle => {
                let mark = if self.checked { "[x]" } else { "[ ]" };
                (mark.to_string(), false)
            }
            _ if self.value().is_empty() => (self.placeholder.to_string(), true),
            FieldKind::Secret => ("•".repeat(self.value().chars().count()), false),
            _ => (self.value().to_string(), false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(usize),
    Button(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Button(usize),
    /// Focus moved past the last button and wrapped to the top.
    WrappedForward,
    /// Focus moved before the first field and wrapped to the bottom.
    WrappedBackward,
}

#[derive(Debug, Clone)]
pub struct Form {
    title: &'static str,
    pub fields: Vec<Field>,
    buttons: Vec<&'static str>,
    focus: usize,
    pub error: Option<FormError>,
}

impl Form {
    pub fn new(title: &'static str, fields: Vec<Field>, buttons: Vec<&'static str>) -> Self {
        Self {
            title,
            fields,
            buttons,
            focus: 0,
            error: None,
        }
    }

    fn focus_count(&self) -> usize {
        self.fields.len() + self.buttons.len()
    }

    pub fn focus(&self) -> Focus {
        if self.focus < self.fields.len() {
            Focus::Field(self.focus)
        } else {
            Focus::Button(self.focus - self.fields.len())
        }
    }

    pub fn focus_first(&mut self) {
        self.focus = 0;
    }

    pub fn focus_last(&mut self) {
        self.focus = self.focus_count().saturating_sub(1);
    }

    fn focus_next(&mut self) -> Option<FormEvent> {
        if self.focus + 1 >= self.focus_count() {
            self.focus = 0;
            Some(FormEvent::WrappedForward)
        } else {
            self.focus += 1;
            None
        }
    }

    fn focus_prev(&mut self) -> Option<FormEvent> {
        if self.focus == 0 {
            self.focus_last();
            Some(FormEvent::WrappedBackward)
        } else {
            self.focus -= 1;
            None
        }
    }

    fn focused_field(&mut self) -> Option<&mut Field> {
        match self.focus() {
            Focus::Field(i) => self.fields.get_mut(i),
            Focus::Button(_) => None,
        }
    }

    pub fn handle(&mut self, action: TuiAction) -> Option<FormEvent> {
        match action {
            TuiAction::NextFocus | TuiAction::MoveDown => return self.focus_next(),
            TuiAction::PrevFocus | TuiAction::MoveUp => return self.focus_prev(),
            _ => {}
        }

        if let Focus::Button(i) = self.focus() {
            return match action {
                TuiAction::Activate | TuiAction::InsertChar(' ') => Some(FormEvent::Button(i)),
                TuiAction::MoveRight if i + 1 < self.buttons.len() => self.focus_next(),
                TuiAction::MoveLeft if i > 0 => self.focus_prev(),
                _ => None,
            };
        }

        let field = self.focused_field()?;
        match (field.input_class(), action) {
            (InputClass::Toggle, TuiAction::Activate | TuiAction::InsertChar(' ')) => {
                field.checked = !field.checked;
                None
            }
            (_, TuiAction::Activate) => Some(FormEvent::Button(0)),
            (InputClass::Choice, TuiAction::MoveRight | TuiAction::InsertChar(' ')) => {
                field.cycle(true);
                None
            }
            (InputClass::Choice, TuiAction::MoveLeft) => {
                field.cycle(false);
                None
            }
            (InputClass::Choice, TuiAction::DeleteLeft | TuiAction::DeleteRight) => {
                field.choice = None;
                None
            }
            (InputClass::Date, TuiAction::PageUp) => {
                field.shift_date(true);
                None
            }
            (InputClass::Date, TuiAction::PageDown) => {
                field.shift_date(false);
                None
            }
            (_, TuiAction::InsertChar(c)) if field.accepts(c) => {
                field.editor.insert_char(c);
                None
            }
            (InputClass::Date | InputClass::Typed, action) => {
                match action {
                    TuiAction::MoveLeft => field.editor.move_left(),
                    TuiAction::MoveRight => field.editor.move_right(),
                    TuiAction::ToStart => field.editor.move_to_start(),
                    TuiAction::ToEnd => field.editor.move_to_end(),
                    TuiAction::DeleteLeft => field.editor.delete_left(),
                    TuiAction::DeleteRight => field.editor.delete_right(),
                    _ => {}
                }
                None
            }
            _ => None,
        }
    }

    /// Clears every field and the error, and moves focus back to the top.
    pub fn reset(&mut self) {
        self.fields.iter_mut().for_each(Field::clear);
        self.error = None;
        self.focus = 0;
    }

    pub fn height(&self) -> u16 {
        // borders, one line per field, a gap, the buttons and the error line
        (self.fields.len() + 5) as u16
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let label_width = self
            .fields
            .iter()
            .map(|field| Span::raw(field.label).width())
            .max()
            .unwrap_or(0)
            + 2;
        let focus = focused.then(|| self.focus());

        let mut lines: Vec<Line> = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let (text, is_placeholder) = field.display();
                let is_focused = focus == Some(Focus::Field(i));
                let label_style = if is_focused {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let value_style = match (is_placeholder, is_focused) {
                    (true, _) => Style::default().fg(Color::DarkGray),
                    (false, true) => Style::default().fg(Color::White).underlined(),
                    (false, false) => Style::default().fg(Color::White),
                };
                let padding = label_width - Span::raw(field.label).width();
                Line::from(vec![
                    Span::styled(
                        format!("{}{}", field.label, " ".repeat(padding)),
                        label_style,
                    ),
                    Span::styled(text, value_style),
                ])
            })
            .collect();

        lines.push(Line::default());
        let buttons: Vec<Span> = self
            .buttons
            .iter()
            .enumerate()
            .flat_map(|(i, button)| {
                let style = if focus == Some(Focus::Button(i)) {
                    Style::default().fg(Color::Black).bg(Color::Green).bold()
                } else {
                    Style::default().fg(Color::Green)
                };
                [Span::styled(format!("[ {button} ]"), style), Span::raw("  ")]
            })
            .collect();
        lines.push(Line::from(buttons));
        if let Some(error) = &self.error {
            lines.push(Line::from(Span::styled(
                format!("{}: {}", error.title(), error.description()),
                Style::default().fg(Color::Red),
            )));
        }

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.title);
        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);

        if let Some(Focus::Field(i)) = focus {
            let field = &self.fields[i];
            if field.is_editable() {
                let x = area.x + 1 + label_width as u16 + field.editor.cursor_position() as u16;
                let y = area.y + 1 + i as u16;
                if x < area.right() && y < area.bottom() {
                    frame.set_cursor_position((x, y));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn form() -> Form {
        Form::new(
            "Test",
            vec![
                Field::amount("Amount", "Enter amount"),
                Field::choice("Category", "Select category", vec!["Food", "Travel"]),
                Field::date("Date", date(2024, 3, 10)),
                Field::toggle("Remind me"),
            ],
            vec!["Save", "Cancel"],
        )
    }

    fn type_text(form: &mut Form, text: &str) {
        for c in text.chars() {
            form.handle(TuiAction::InsertChar(c));
        }
    }

    #[test]
    fn amount_fields_filter_characters() {
        let mut form = form();
        type_text(&mut form, "12a.5x");
        assert_eq!(form.fields[0].value(), "12.5");
    }

    #[test]
    fn focus_wraps_and_reports_it() {
        let mut form = form();
        assert_eq!(form.handle(TuiAction::PrevFocus), Some(FormEvent::WrappedBackward));
        assert_eq!(form.focus(), Focus::Button(1));
        assert_eq!(form.handle(TuiAction::NextFocus), Some(FormEvent::WrappedForward));
        assert_eq!(form.focus(), Focus::Field(0));
        form.handle(TuiAction::MoveDown);
        assert_eq!(form.focus(), Focus::Field(1));
    }

    #[test]
    fn enter_submits_from_any_field_and_presses_buttons() {
        let mut form = form();
        assert_eq!(form.handle(TuiAction::Activate), Some(FormEvent::Button(0)));
        form.focus_last();
        assert_eq!(form.handle(TuiAction::Activate), Some(FormEvent::Button(1)));
        form.handle(TuiAction::MoveLeft);
        assert_eq!(form.focus(), Focus::Button(0));
    }

    #[test]
    fn choices_cycle_through_unset() {
        let mut form = form();
        form.handle(TuiAction::NextFocus);
        form.handle(TuiAction::MoveRight);
        assert_eq!(form.fields[1].selected(), Some(0));
        form.handle(TuiAction::MoveRight);
        assert_eq!(form.fields[1].selected(), Some(1));
        form.handle(TuiAction::MoveRight);
        assert_eq!(form.fields[1].selected(), None);
        form.handle(TuiAction::MoveLeft);
        assert_eq!(form.fields[1].selected(), Some(1));
        form.handle(TuiAction::DeleteLeft);
        assert_eq!(form.fields[1].selected(), None);
    }

    #[test]
    fn dates_shift_by_a_day() {
        let mut form = form();
        form.handle(TuiAction::NextFocus);
        form.handle(TuiAction::NextFocus);
        form.handle(TuiAction::PageDown);
        assert_eq!(form.fields[2].date_value(), Some(date(2024, 3, 9)));
        form.handle(TuiAction::PageUp);
        form.handle(TuiAction::PageUp);
        assert_eq!(form.fields[2].value(), "2024-03-11");
    }

    #[test]
    fn toggles_flip_with_space_and_enter() {
        let mut form = form();
        for _ in 0..3 {
            form.handle(TuiAction::NextFocus);
        }
        form.handle(TuiAction::InsertChar(' '));
        assert!(form.fields[3].is_checked());
        assert_eq!(form.handle(TuiAction::Activate), None);
        assert!(!form.fields[3].is_checked());
    }

    #[test]
    fn reset_clears_values_and_errors() {
        let mut form = form();
        type_text(&mut form, "300");
        form.fields[3].checked = true;
        form.error = Some(FormError::NothingToAdd);
        form.handle(TuiAction::NextFocus);
        form.reset();
        assert_eq!(form.fields[0].value(), "");
        assert_eq!(form.fields[2].value(), "");
        assert!(!form.fields[3].is_checked());
        assert_eq!(form.error, None);
        assert_eq!(form.focus(), Focus::Field(0));
    }

    #[test]
    fn secrets_are_masked() {
        let mut field = Field::secret("Password", "Enter your password");
        assert_eq!(field.display(), ("Enter your password".to_string(), true));
        field.set_value("abc");
        assert_eq!(field.display(), ("•••".to_string(), false));
    }
}
