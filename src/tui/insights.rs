use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph,
};
use ratatui::Frame;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::format::format_amount;
use crate::insights::{Challenge, HabitStreak, Insights};

use super::actions::TuiAction;
use super::{Context, Route, Transition, TuiWidget};

#[derive(Debug, Default)]
pub struct InsightsScreen {
    insights: Option<Insights>,
}

impl InsightsScreen {
    /// Rebuilds the figures from the ledger, called whenever the page opens.
    pub fn refresh(&mut self, ctx: &Context) {
        self.insights = Some(Insights::build(&ctx.ledger, ctx.today));
    }

    fn render_trend(frame: &mut Frame, area: Rect, insights: &Insights, currency: char) {
        let points: Vec<(f64, f64)> = insights
            .trend
            .iter()
            .map(|point| {
                (
                    f64::from(point.day),
                    point.amount.to_f64().unwrap_or_default(),
                )
            })
            .collect();
        let highest = insights.highest_trend_amount();
        let y_max = highest.to_f64().unwrap_or_default().max(1.0) * 1.2;

        let dataset = Dataset::default()
            .name("Spent")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Magenta))
            .data(&points);
        let chart = Chart::new(vec![dataset])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("📈 Monthly Expense Trend"),
            )
            .x_axis(
                Axis::default()
                    .title("Day")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([1.0, 31.0])
                    .labels(vec![Span::raw("1"), Span::raw("15"), Span::raw("30")]),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, y_max])
                    .labels(vec![
                        Span::raw(format_amount(Decimal::ZERO, currency)),
                        Span::raw(format_amount(highest, currency)),
                    ]),
            );
        frame.render_widget(chart, area);
    }

    fn render_categories(frame: &mut Frame, area: Rect, insights: &Insights) {
        let bars: Vec<Bar> = insights
            .categories
            .iter()
            .map(|spending| {
                let value = spending.amount.round().to_u64().unwrap_or_default();
                Bar::default()
                    .value(value)
                    .label(Line::from(format!(
                        "{} {}",
                        spending.category.emoji(),
                        spending.category.label()
                    )))
                    .text_value(value.to_string())
            })
            .collect();
        let count = bars.len().max(1) as u16;
        let inner_width = area.width.saturating_sub(2);
        let bar_width = (inner_width / count).saturating_sub(1).clamp(3, 14);

        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("🎯 Spending by Category"),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(1)
            .bar_style(Style::default().fg(Color::Cyan))
            .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
        frame.render_widget(chart, area);
    }

    fn render_habits(frame: &mut Frame, area: Rect, habits: &[HabitStreak]) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("🏆 Habit Tracker");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(habits.iter().map(|_| Constraint::Length(2)))
            .split(inner);
        for (habit, row) in habits.iter().zip(rows.iter()) {
            let [text, gauge] =
                Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(*row);
            let line = Line::from(vec![
                Span::styled(
                    format!("{} {}", habit.emoji, habit.habit),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}/{} days", habit.streak, habit.target),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("  🔥 {} day streak!", habit.streak),
                    Style::default().fg(Color::Yellow),
                ),
            ]);
            frame.render_widget(Paragraph::new(line), text);
            frame.render_widget(
                Gauge::default()
                    .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
                    .ratio(habit.ratio())
                    .label(""),
                gauge,
            );
        }
    }

    fn render_challenge(frame: &mut Frame, area: Rect, challenge: &Challenge) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("{} {}", challenge.emoji, challenge.title));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [message, gauge, details, badge] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);
        frame.render_widget(
            Paragraph::new(challenge.message()).style(Style::default().fg(Color::Magenta)),
            message,
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(Color::Magenta).bg(Color::DarkGray))
                .ratio(challenge.ratio())
                .label(format!("{}%", challenge.progress)),
            gauge,
        );
        frame.render_widget(
            Paragraph::new(format!(
                "{} days remaining · {}/{}",
                challenge.days_left, challenge.current, challenge.target
            ))
            .style(Style::default().fg(Color::Gray)),
            details,
        );
        if let Some(text) = challenge.badge() {
            let style = if challenge.is_completed() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            let text = if challenge.is_completed() {
                format!("🏅 Badge Unlocked! {text}")
            } else {
                text.to_string()
            };
            frame.render_widget(Paragraph::new(text).style(style), badge);
        }
    }
}

impl TuiWidget for InsightsScreen {
    fn handle(&mut self, action: TuiAction, _ctx: &mut Context) -> Option<Transition> {
        match action {
            TuiAction::Back | TuiAction::InsertChar('b') | TuiAction::InsertChar('B') => {
                Some(Transition::Navigate(Route::Dashboard))
            }
            TuiAction::InsertChar('q') => Some(Transition::Quit),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &Context) {
        if self.insights.is_none() {
            self.refresh(ctx);
        }
        let Some(insights) = &self.insights else {
            return;
        };

        let habit_height = insights.habits.len() as u16 * 2 + 2;
        let [title, charts, habits, challenges] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(10),
            Constraint::Length(habit_height),
            Constraint::Length(6),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::styled(
                    "Insights & Progress",
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    "Track your financial habits and achievements",
                    Style::default().fg(Color::Gray),
                ),
            ]),
            title,
        );

        let [trend, categories] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(charts);
        Self::render_trend(frame, trend, insights, ctx.config.currency);
        Self::render_categories(frame, categories, insights);
        Self::render_habits(frame, habits, &insights.habits);

        let columns = Layout::horizontal(
            insights
                .challenges
                .iter()
                .map(|_| Constraint::Ratio(1, insights.challenges.len() as u32)),
        )
        .split(challenges);
        for (challenge, column) in insights.challenges.iter().zip(columns.iter()) {
            Self::render_challenge(frame, *column, challenge);
        }
    }

    fn hints(&self) -> &'static str {
        "Esc/b back to dashboard · q quit"
    }
}
