use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Tabs};
use ratatui::Frame;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::errors::{FormError, TrackerError};
use crate::format::{format_amount, format_rounded};
use crate::ledger::entry::Entry;
use crate::ledger::split::{parse_friends, SplitDraft, SplitId};
use crate::ledger::{ExpenseCategory, Ledger};
use crate::parse::parse_amount;

use super::actions::TuiAction;
use super::form::{Field, Form, FormEvent};
use super::{Context, Route, Transition, TuiWidget};

const INCOME: usize = 0;
const EXPENSE: usize = 1;
const CATEGORY: usize = 2;
const DATE: usize = 3;

const DESCRIPTION: usize = 0;
const TOTAL: usize = 1;
const FRIENDS: usize = 2;
const DUE_DATE: usize = 3;
const REMINDER: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Tracker,
    Splits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitPane {
    Form,
    Dues,
}

fn read_amount(field: &Field, name: &'static str) -> Result<Option<Decimal>, FormError> {
    let value = field.value().trim();
    if value.is_empty() {
        return Ok(None);
    }
    let amount = parse_amount(value).map_err(|error| FormError::InvalidAmount {
        field: name,
        reason: match error {
            TrackerError::Parse(reason) => reason,
            other => other.to_string(),
        },
    })?;
    if amount.is_sign_negative() {
        return Err(FormError::NegativeAmount { field: name });
    }
    Ok(Some(amount))
}

/// Turns the "Add New Entry" form into the entries to record, income first.
fn read_entries(form: &Form) -> Result<Vec<Entry>, FormError> {
    let income_field = &form.fields[INCOME];
    let expense_field = &form.fields[EXPENSE];
    if income_field.value().trim().is_empty() && expense_field.value().trim().is_empty() {
        return Err(FormError::NothingToAdd);
    }
    let income = read_amount(income_field, "Income")?;
    let expense = read_amount(expense_field, "Expense")?;
    let date = form.fields[DATE]
        .date_value()
        .ok_or(FormError::InvalidDate { field: "Date" })?;
    let category = form.fields[CATEGORY]
        .selected()
        .and_then(|i| ExpenseCategory::ALL.get(i).copied());

    let mut entries = Vec::with_capacity(2);
    if let Some(amount) = income {
        entries.push(Entry::income(amount, date));
    }
    if let Some(amount) = expense {
        entries.push(Entry::expense(amount, category, date));
    }
    Ok(entries)
}

fn read_split(form: &Form) -> Result<SplitDraft, FormError> {
    let description = form.fields[DESCRIPTION].value().trim();
    let total = form.fields[TOTAL].value().trim();
    let friends = form.fields[FRIENDS].value().trim();
    if description.is_empty() || total.is_empty() || friends.is_empty() {
        return Err(FormError::MissingInformation);
    }
    let friends = parse_friends(friends);
    if friends.is_empty() {
        return Err(FormError::NoFriends);
    }
    let total_amount =
        read_amount(&form.fields[TOTAL], "Total Amount")?.ok_or(FormError::MissingInformation)?;
    let due_date = form.fields[DUE_DATE]
        .date_value()
        .ok_or(FormError::InvalidDate { field: "Due Date" })?;
    Ok(SplitDraft {
        description: description.to_string(),
        total_amount,
        friends,
        due_date,
        reminder_enabled: form.fields[REMINDER].is_checked(),
    })
}

/// One row per friend across all splits, in display order.
fn dues_rows(ledger: &Ledger) -> Vec<(SplitId, String)> {
    ledger
        .splits()
        .iter()
        .flat_map(|split| {
            split
                .friends
                .iter()
                .map(move |friend| (split.id, friend.clone()))
        })
        .collect()
}

#[derive(Debug)]
pub struct DashboardScreen {
    tab: Tab,
    entry_form: Form,
    split_form: Form,
    pane: SplitPane,
    dues_selected: usize,
}

impl DashboardScreen {
    pub fn new(ctx: &Context) -> Self {
        let entry_form = Form::new(
            "➕ Add New Entry",
            vec![
                Field::amount("💵 Income", "Enter income amount"),
                Field::amount("💸 Expense", "Enter expense amount"),
                Field::choice("🛒 Category", "Select category", ExpenseCategory::options()),
                Field::date("📅 Date", ctx.today),
            ],
            vec!["Add Entry ✨"],
        );
        let split_form = Form::new(
            "💸 Split New Expense",
            vec![
                Field::text("📝 Description", "e.g., Trip to Goa, Dinner at restaurant"),
                Field::amount("💰 Total Amount", "Enter total expense amount"),
                Field::text("👥 Friends", "Riya, Aman, Priya"),
                Field::date("📅 Due Date", ctx.today),
                Field::toggle("🔔 Remind me 1 day before due"),
            ],
            vec!["Split Expense 💸"],
        );
        Self {
            tab: Tab::Tracker,
            entry_form,
            split_form,
            pane: SplitPane::Form,
            dues_selected: 0,
        }
    }

    fn add_entry(&mut self, ctx: &mut Context) {
        let entries = match read_entries(&self.entry_form) {
            Ok(entries) => entries,
            Err(error) => {
                debug!("Entry rejected: {}", error.description());
                ctx.toasts.push_error(&error);
                self.entry_form.error = Some(error);
                return;
            }
        };
        let currency = ctx.config.currency;
        for entry in entries {
            let amount = format_amount(entry.amount, currency);
            if entry.is_expense() {
                ctx.toasts.push(
                    "Expense Recorded 📝",
                    format!(
                        "{amount} spent on {}",
                        entry.category_label().to_lowercase()
                    ),
                );
            } else {
                ctx.toasts
                    .push("Income Added! 💰", format!("Added {amount} to your balance"));
            }
            ctx.ledger.record(entry);
        }
        self.entry_form.reset();
        self.entry_form.fields[DATE].set_date(ctx.today);
    }

    fn split_expense(&mut self, ctx: &mut Context) {
        let draft = match read_split(&self.split_form) {
            Ok(draft) => draft,
            Err(error) => {
                debug!("Split rejected: {}", error.description());
                ctx.toasts.push_error(&error);
                self.split_form.error = Some(error);
                return;
            }
        };
        let split = ctx.ledger.add_split(draft);
        let description = format!(
            "{} split between {} people",
            format_amount(split.total_amount, ctx.config.currency),
            split.participants()
        );
        ctx.toasts.push("Expense Split Created! 💸", description);
        self.split_form.reset();
        self.split_form.fields[DUE_DATE].set_date(ctx.today);
    }

    fn toggle_selected(&mut self, ctx: &mut Context) {
        let rows = dues_rows(&ctx.ledger);
        let Some((id, friend)) = rows.get(self.dues_selected) else {
            return;
        };
        match ctx.ledger.toggle_payment(*id, friend) {
            Ok(paid) => ctx.toasts.push(
                "Payment Updated",
                format!(
                    "Marked {friend}'s payment as {}",
                    if paid { "paid" } else { "unpaid" }
                ),
            ),
            Err(error) => warn!("Could not toggle payment: {}", error),
        }
    }

    fn handle_dues(&mut self, action: TuiAction, ctx: &mut Context) {
        let rows = dues_rows(&ctx.ledger).len();
        match action {
            TuiAction::MoveUp => self.dues_selected = self.dues_selected.saturating_sub(1),
            TuiAction::MoveDown if self.dues_selected + 1 < rows => self.dues_selected += 1,
            TuiAction::Activate | TuiAction::InsertChar(' ') => self.toggle_selected(ctx),
            TuiAction::NextFocus | TuiAction::Back => {
                self.split_form.focus_first();
                self.pane = SplitPane::Form;
            }
            TuiAction::PrevFocus => {
                self.split_form.focus_last();
                self.pane = SplitPane::Form;
            }
            _ => {}
        }
    }

    fn render_tracker(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let [cards, form] = Layout::horizontal([Constraint::Percentage(38), Constraint::Fill(1)])
            .areas(area);
        let [balance, budget] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(6)])
            .areas(cards);
        let currency = ctx.config.currency;
        let ledger = &ctx.ledger;

        let balance_text = Paragraph::new(Line::styled(
            format_amount(ledger.balance(), currency),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("💰 Current Balance"),
        );
        frame.render_widget(balance_text, balance);

        let budget_block = Block::default()
            .borders(Borders::ALL)
            .title("🎯 Budget Status");
        let inner = budget_block.inner(budget);
        frame.render_widget(budget_block, budget);
        let [used, gauge, remaining] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(inner);

        frame.render_widget(
            Paragraph::new(format!(
                "Used {} / {}",
                format_amount(ledger.total_expenses(), currency),
                format_amount(ledger.monthly_budget(), currency)
            )),
            used,
        );
        let usage = ledger.budget_usage();
        let gauge_color = if usage >= Decimal::ONE_HUNDRED {
            Color::Red
        } else if usage >= Decimal::from(80) {
            Color::Yellow
        } else {
            Color::Green
        };
        let ratio = (usage / Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or(0.0)
            .clamp(0.0, 1.0);
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(gauge_color).bg(Color::DarkGray))
                .ratio(ratio)
                .label(format!("{:.0}%", usage)),
            gauge,
        );
        frame.render_widget(
            Paragraph::new(format!(
                "{} remaining this month",
                format_amount(ledger.remaining_budget(), currency)
            ))
            .fg(Color::Gray),
            remaining,
        );

        self.entry_form.render(frame, form, true);
    }

    fn render_splits(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let [form, dues] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);
        self.split_form
            .render(frame, form, self.pane == SplitPane::Form);
        self.render_dues(frame, dues, ctx);
    }

    fn render_dues(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let focused = self.pane == SplitPane::Dues;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            })
            .title("📊 Dues Summary");
        let currency = ctx.config.currency;
        let splits = ctx.ledger.splits();

        if splits.is_empty() {
            let empty = Paragraph::new(vec![
                Line::default(),
                Line::from("No expenses split yet"),
                Line::styled(
                    "Create your first split to see the summary",
                    Style::default().fg(Color::DarkGray),
                ),
            ])
            .centered()
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);
        let [list_area, total_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);

        let mut items = Vec::new();
        let mut selected_item = None;
        let mut row = 0;
        for split in splits {
            let mut title = vec![Span::styled(
                split.description.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            if split.reminder_enabled {
                let bell_style = if split.reminder_due(ctx.today) {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                title.push(Span::styled("  🔔", bell_style));
            }
            if split.is_overdue(ctx.today) {
                title.push(Span::styled("  overdue", Style::default().fg(Color::Red)));
            }
            items.push(ListItem::new(Line::from(title)));
            items.push(ListItem::new(Line::styled(
                format!(
                    "Total: {} • Due: {}",
                    format_amount(split.total_amount, currency),
                    split.due_date.format("%d %b %Y")
                ),
                Style::default().fg(Color::Gray),
            )));

            for (friend, paid) in split.friends_with_status() {
                if focused && row == self.dues_selected {
                    selected_item = Some(items.len());
                }
                row += 1;
                let status = if paid {
                    Span::styled("✅ Paid", Style::default().fg(Color::Green))
                } else {
                    Span::styled("💰 Mark Paid", Style::default().fg(Color::Yellow))
                };
                items.push(ListItem::new(Line::from(vec![
                    Span::raw(format!(
                        "  {friend} owes you {}  ",
                        format_rounded(split.amount_per_person, currency)
                    )),
                    status,
                ])));
            }
            items.push(ListItem::new(Line::default()));
        }

        let list = List::new(items).highlight_style(Style::default().bg(Color::DarkGray));
        let mut state = ListState::default();
        state.select(selected_item);
        frame.render_stateful_widget(list, list_area, &mut state);

        frame.render_widget(
            Paragraph::new(format!(
                "Outstanding: {}",
                format_amount(ctx.ledger.outstanding_dues(), currency)
            ))
            .bold(),
            total_area,
        );
    }
}

impl TuiWidget for DashboardScreen {
    fn handle(&mut self, action: TuiAction, ctx: &mut Context) -> Option<Transition> {
        match action {
            TuiAction::OpenInsights => return Some(Transition::Navigate(Route::Insights)),
            TuiAction::SwitchTab => {
                self.tab = match self.tab {
                    Tab::Tracker => Tab::Splits,
                    Tab::Splits => Tab::Tracker,
                };
                self.pane = SplitPane::Form;
                return None;
            }
            _ => {}
        }

        match (self.tab, self.pane) {
            (Tab::Tracker, _) => {
                if let Some(FormEvent::Button(_)) = self.entry_form.handle(action) {
                    self.add_entry(ctx);
                }
            }
            (Tab::Splits, SplitPane::Form) => match self.split_form.handle(action) {
                Some(FormEvent::Button(_)) => self.split_expense(ctx),
                Some(FormEvent::WrappedForward | FormEvent::WrappedBackward)
                    if !ctx.ledger.splits().is_empty() =>
                {
                    self.pane = SplitPane::Dues;
                }
                _ => {}
            },
            (Tab::Splits, SplitPane::Dues) => self.handle_dues(action, ctx),
        }
        None
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let [tabs_area, body] =
            Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(area);
        let tabs = Tabs::new(vec!["💰 Expense Tracker", "💸 Split with Friends"])
            .select(match self.tab {
                Tab::Tracker => 0,
                Tab::Splits => 1,
            })
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, tabs_area);

        match self.tab {
            Tab::Tracker => self.render_tracker(frame, body, ctx),
            Tab::Splits => self.render_splits(frame, body, ctx),
        }
    }

    fn hints(&self) -> &'static str {
        match (self.tab, self.pane) {
            (Tab::Splits, SplitPane::Dues) => {
                "↑↓ select · Enter mark paid · Tab back to form · Ctrl+T tab · Ctrl+N insights · Ctrl+C quit"
            }
            _ => "Tab/↑↓ move · ←→ choose · PgUp/PgDn date · Enter submit · Ctrl+T tab · Ctrl+N insights · Ctrl+C quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use rust_decimal_macros::dec;

    use crate::config::TrackerConfig;
    use crate::notify::{Toasts, Variant};

    use super::*;

    fn context() -> Context {
        let config = TrackerConfig::default();
        Context {
            ledger: Ledger::new(&config),
            config,
            toasts: Toasts::new(Duration::from_secs(4)),
            session: None,
            today: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        }
    }

    fn type_text(screen: &mut DashboardScreen, ctx: &mut Context, text: &str) {
        for c in text.chars() {
            screen.handle(TuiAction::InsertChar(c), ctx);
        }
    }

    fn next(screen: &mut DashboardScreen, ctx: &mut Context, times: usize) {
        for _ in 0..times {
            screen.handle(TuiAction::NextFocus, ctx);
        }
    }

    fn draw(screen: &mut DashboardScreen, ctx: &Context) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|f| screen.render(f, f.area(), ctx))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn bell_color(buffer: &Buffer) -> Option<Color> {
        buffer
            .content()
            .iter()
            .find(|cell| cell.symbol() == "🔔")
            .map(|cell| cell.fg)
    }

    fn split_dinner(screen: &mut DashboardScreen, ctx: &mut Context) {
        screen.handle(TuiAction::SwitchTab, ctx);
        type_text(screen, ctx, "Dinner");
        next(screen, ctx, 1);
        type_text(screen, ctx, "900");
        next(screen, ctx, 1);
        type_text(screen, ctx, "Riya, Aman");
        screen.handle(TuiAction::Activate, ctx);
    }

    #[test]
    fn records_income_and_expense_in_one_submit() {
        let mut ctx = context();
        let mut screen = DashboardScreen::new(&ctx);
        type_text(&mut screen, &mut ctx, "2000");
        next(&mut screen, &mut ctx, 1);
        type_text(&mut screen, &mut ctx, "1500");
        next(&mut screen, &mut ctx, 1);
        screen.handle(TuiAction::MoveRight, &mut ctx);
        screen.handle(TuiAction::Activate, &mut ctx);

        assert_eq!(ctx.ledger.entries().len(), 2);
        assert_eq!(ctx.ledger.balance(), dec!(25500));
        assert_eq!(ctx.ledger.total_expenses(), dec!(6500));
        assert_eq!(ctx.ledger.entries()[1].category, Some(ExpenseCategory::Food));
        let toast = ctx.toasts.latest().unwrap();
        assert_eq!(toast.title, "Expense Recorded 📝");
        assert_eq!(toast.description, "₹1,500 spent on food");
        assert_eq!(screen.entry_form.fields[INCOME].value(), "");
        assert_eq!(screen.entry_form.fields[DATE].value(), "2024-03-15");
    }

    #[test]
    fn uncategorised_expenses_are_spent_on_expense() {
        let mut ctx = context();
        let mut screen = DashboardScreen::new(&ctx);
        next(&mut screen, &mut ctx, 1);
        type_text(&mut screen, &mut ctx, "250");
        screen.handle(TuiAction::Activate, &mut ctx);
        assert_eq!(ctx.toasts.latest().unwrap().description, "₹250 spent on expense");
        assert_eq!(ctx.ledger.balance(), dec!(24750));
    }

    #[test]
    fn empty_entry_is_rejected() {
        let mut ctx = context();
        let mut screen = DashboardScreen::new(&ctx);
        screen.handle(TuiAction::Activate, &mut ctx);
        assert!(ctx.ledger.entries().is_empty());
        assert_eq!(screen.entry_form.error, Some(FormError::NothingToAdd));
        assert_eq!(ctx.toasts.latest().unwrap().variant, Variant::Destructive);
    }

    #[test]
    fn negative_and_malformed_amounts_are_rejected() {
        let mut ctx = context();
        let mut screen = DashboardScreen::new(&ctx);
        type_text(&mut screen, &mut ctx, "-5");
        screen.handle(TuiAction::Activate, &mut ctx);
        assert_eq!(
            screen.entry_form.error,
            Some(FormError::NegativeAmount { field: "Income" })
        );

        screen.entry_form.fields[INCOME].set_value("1.234");
        screen.handle(TuiAction::Activate, &mut ctx);
        assert!(matches!(
            screen.entry_form.error,
            Some(FormError::InvalidAmount { field: "Income", .. })
        ));
        assert!(ctx.ledger.entries().is_empty());
    }

    #[test]
    fn invalid_dates_are_rejected() {
        let mut ctx = context();
        let mut screen = DashboardScreen::new(&ctx);
        screen.entry_form.fields[INCOME].set_value("10");
        screen.entry_form.fields[DATE].set_value("2024-02-30");
        screen.handle(TuiAction::Activate, &mut ctx);
        assert_eq!(
            screen.entry_form.error,
            Some(FormError::InvalidDate { field: "Date" })
        );
    }

    #[test]
    fn splits_an_expense_between_friends() {
        let mut ctx = context();
        let mut screen = DashboardScreen::new(&ctx);
        split_dinner(&mut screen, &mut ctx);

        let split = &ctx.ledger.splits()[0];
        assert_eq!(split.friends, vec!["Riya", "Aman"]);
        assert_eq!(split.amount_per_person, dec!(300));
        assert_eq!(split.due_date, ctx.today);
        assert!(!split.reminder_enabled);
        assert_eq!(ctx.ledger.balance(), dec!(25000));
        let toast = ctx.toasts.latest().unwrap();
        assert_eq!(toast.title, "Expense Split Created! 💸");
        assert_eq!(toast.description, "₹900 split between 3 people");
        assert_eq!(screen.split_form.fields[DESCRIPTION].value(), "");
    }

    #[test]
    fn split_requires_every_field_and_a_friend() {
        let mut ctx = context();
        let mut screen = DashboardScreen::new(&ctx);
        screen.handle(TuiAction::SwitchTab, &mut ctx);
        screen.split_form.fields[DESCRIPTION].set_value("Dinner");
        screen.split_form.fields[TOTAL].set_value("900");
        screen.handle(TuiAction::Activate, &mut ctx);
        assert_eq!(screen.split_form.error, Some(FormError::MissingInformation));
        assert_eq!(ctx.toasts.latest().unwrap().title, "Missing Information");

        screen.split_form.fields[FRIENDS].set_value(" , ,");
        screen.handle(TuiAction::Activate, &mut ctx);
        assert_eq!(screen.split_form.error, Some(FormError::NoFriends));
        assert!(ctx.ledger.splits().is_empty());
    }

    #[test]
    fn reminder_toggle_is_saved() {
        let mut ctx = context();
        let mut screen = DashboardScreen::new(&ctx);
        screen.handle(TuiAction::SwitchTab, &mut ctx);
        screen.split_form.fields[DESCRIPTION].set_value("Cab");
        screen.split_form.fields[TOTAL].set_value("300");
        screen.split_form.fields[FRIENDS].set_value("Priya");
        next(&mut screen, &mut ctx, 4);
        screen.handle(TuiAction::InsertChar(' '), &mut ctx);
        next(&mut screen, &mut ctx, 1);
        screen.handle(TuiAction::Activate, &mut ctx);
        let split = &ctx.ledger.splits()[0];
        assert!(split.reminder_enabled);
        assert_eq!(split.amount_per_person, dec!(150));
    }

    #[test]
    fn toggles_payments_from_the_dues_list() {
        let mut ctx = context();
        let mut screen = DashboardScreen::new(&ctx);
        split_dinner(&mut screen, &mut ctx);

        // five fields and one button, the next Tab wraps into the dues list
        next(&mut screen, &mut ctx, 6);
        assert_eq!(screen.pane, SplitPane::Dues);
        screen.handle(TuiAction::MoveDown, &mut ctx);
        screen.handle(TuiAction::Activate, &mut ctx);

        let split = &ctx.ledger.splits()[0];
        assert_eq!(split.is_paid("Aman"), Some(true));
        assert_eq!(split.is_paid("Riya"), Some(false));
        assert_eq!(ctx.toasts.latest().unwrap().description, "Marked Aman's payment as paid");

        screen.handle(TuiAction::Activate, &mut ctx);
        assert_eq!(ctx.ledger.splits()[0].is_paid("Aman"), Some(false));
        assert_eq!(
            ctx.toasts.latest().unwrap().description,
            "Marked Aman's payment as unpaid"
        );

        screen.handle(TuiAction::MoveDown, &mut ctx);
        assert_eq!(screen.dues_selected, 1);
        screen.handle(TuiAction::NextFocus, &mut ctx);
        assert_eq!(screen.pane, SplitPane::Form);
    }

    #[test]
    fn focus_stays_in_the_form_without_splits() {
        let mut ctx = context();
        let mut screen = DashboardScreen::new(&ctx);
        screen.handle(TuiAction::SwitchTab, &mut ctx);
        next(&mut screen, &mut ctx, 6);
        assert_eq!(screen.pane, SplitPane::Form);
    }

    #[test]
    fn opens_insights() {
        let mut ctx = context();
        let mut screen = DashboardScreen::new(&ctx);
        assert_eq!(
            screen.handle(TuiAction::OpenInsights, &mut ctx),
            Some(Transition::Navigate(Route::Insights))
        );
    }

    #[test]
    fn dues_show_overdue_marker_and_reminder_bell() {
        let mut ctx = context();
        let mut screen = DashboardScreen::new(&ctx);
        let id = ctx
            .ledger
            .add_split(SplitDraft {
                description: "Concert".to_string(),
                total_amount: dec!(1500),
                friends: vec!["Riya".to_string(), "Aman".to_string()],
                due_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
                reminder_enabled: true,
            })
            .id;
        screen.handle(TuiAction::SwitchTab, &mut ctx);

        let buffer = draw(&mut screen, &ctx);
        let text = buffer_text(&buffer);
        assert!(text.contains("Concert"));
        assert!(text.contains("overdue"));
        assert!(text.contains("Mark Paid"));
        assert_eq!(bell_color(&buffer), Some(Color::Yellow));

        ctx.ledger.toggle_payment(id, "Riya").unwrap();
        ctx.ledger.toggle_payment(id, "Aman").unwrap();
        let buffer = draw(&mut screen, &ctx);
        let text = buffer_text(&buffer);
        assert!(!text.contains("overdue"));
        assert!(!text.contains("Mark Paid"));
        assert_eq!(bell_color(&buffer), Some(Color::DarkGray));
    }

    #[test]
    fn dues_without_reminder_have_no_bell() {
        let mut ctx = context();
        let mut screen = DashboardScreen::new(&ctx);
        split_dinner(&mut screen, &mut ctx);

        let buffer = draw(&mut screen, &ctx);
        assert!(buffer_text(&buffer).contains("Dinner"));
        assert_eq!(bell_color(&buffer), None);
    }
}
