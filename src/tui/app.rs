use std::time::{Duration, Instant};

use chrono::NaiveDate;
use crossterm::event::KeyEvent;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use tracing::info;

use crate::config::TrackerConfig;
use crate::ledger::Ledger;
use crate::notify::{Toasts, Variant};

use super::actions::{key_action, TuiAction};
use super::dashboard::DashboardScreen;
use super::insights::InsightsScreen;
use super::login::LoginScreen;
use super::{Context, Route, Transition, TuiWidget};

const TOAST_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 4;

#[derive(Debug)]
pub struct App {
    route: Route,
    ctx: Context,
    login: LoginScreen,
    dashboard: DashboardScreen,
    insights: InsightsScreen,
    should_quit: bool,
}

impl App {
    pub fn new(config: TrackerConfig, today: NaiveDate) -> Self {
        let ctx = Context {
            ledger: Ledger::new(&config),
            toasts: Toasts::new(Duration::from_secs(config.toast_seconds)),
            config,
            session: None,
            today,
        };
        let dashboard = DashboardScreen::new(&ctx);
        Self {
            route: Route::Login,
            ctx,
            login: LoginScreen::new(),
            dashboard,
            insights: InsightsScreen::default(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = key_action(key) {
            self.perform(action);
        }
    }

    pub fn perform(&mut self, action: TuiAction) {
        if action == TuiAction::Quit {
            self.should_quit = true;
            return;
        }
        let transition = match self.route {
            Route::Login => self.login.handle(action, &mut self.ctx),
            Route::Dashboard => self.dashboard.handle(action, &mut self.ctx),
            Route::Insights => self.insights.handle(action, &mut self.ctx),
        };
        match transition {
            Some(Transition::Navigate(route)) => self.navigate(route),
            Some(Transition::Quit) => self.should_quit = true,
            None => {}
        }
    }

    fn navigate(&mut self, route: Route) {
        // everything past the login screen needs a session
        let route = if self.ctx.session.is_none() {
            Route::Login
        } else {
            route
        };
        if route == Route::Insights {
            self.insights.refresh(&self.ctx);
        }
        info!("Navigating from {:?} to {:?}", self.route, route);
        self.route = route;
    }

    /// Expires old toasts and follows the calendar across midnight.
    pub fn tick(&mut self, now: Instant, today: NaiveDate) {
        if !self.ctx.toasts.is_empty() {
            self.ctx.toasts.prune(now);
        }
        self.ctx.today = today;
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_header(frame, header);
        let hints = match self.route {
            Route::Login => {
                self.login.render(frame, body, &self.ctx);
                self.login.hints()
            }
            Route::Dashboard => {
                self.dashboard.render(frame, body, &self.ctx);
                self.dashboard.hints()
            }
            Route::Insights => {
                self.insights.render(frame, body, &self.ctx);
                self.insights.hints()
            }
        };
        frame.render_widget(
            Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
            footer,
        );
        self.render_toast(frame, body);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let who = match &self.ctx.session {
            Some(session) => format!("{} ({})", self.ctx.config.user_name, session.email),
            None => "not signed in".to_string(),
        };
        let line = Line::from(vec![
            Span::styled(
                "Broke2Boss",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("Master your money habits", Style::default().fg(Color::Gray)),
        ]);
        let header = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title_bottom(Line::from(who).right_aligned()),
        );
        frame.render_widget(header, area);
    }

    fn render_toast(&self, frame: &mut Frame, area: Rect) {
        let Some(toast) = self.ctx.toasts.latest() else {
            return;
        };
        let width = TOAST_WIDTH.min(area.width);
        let height = TOAST_HEIGHT.min(area.height);
        let toast_area = Rect {
            x: area.right().saturating_sub(width),
            y: area.bottom().saturating_sub(height),
            width,
            height,
        };
        let title = match self.ctx.toasts.len() {
            0 | 1 => toast.title.clone(),
            n => format!("{} (+{})", toast.title, n - 1),
        };
        let color = match toast.variant {
            Variant::Default => Color::Green,
            Variant::Destructive => Color::Red,
        };
        let paragraph = Paragraph::new(toast.description.as_str())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(Span::styled(
                        title,
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    )),
            );
        frame.render_widget(Clear, toast_area);
        frame.render_widget(paragraph, toast_area);
    }
}
