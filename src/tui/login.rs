use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::{debug, info};

use crate::session::Credentials;

use super::actions::TuiAction;
use super::form::{Field, Form, FormEvent};
use super::{Context, Route, Transition, TuiWidget};

const EMAIL: usize = 0;
const PASSWORD: usize = 1;

const SIGN_IN: usize = 0;
const SIGN_UP: usize = 1;
const FORGOT_PASSWORD: usize = 2;

#[derive(Debug)]
pub struct LoginScreen {
    form: Form,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    pub fn new() -> Self {
        let form = Form::new(
            "Welcome Back",
            vec![
                Field::text("📧 Email", "Enter your email"),
                Field::secret("🔒 Password", "Enter your password"),
            ],
            vec!["Sign In ✨", "Sign up", "Forgot password?"],
        );
        Self { form }
    }

    fn sign_in(&mut self, ctx: &mut Context) -> Option<Transition> {
        let credentials = Credentials {
            email: self.form.fields[EMAIL].value().to_string(),
            password: self.form.fields[PASSWORD].value().to_string(),
        };
        match credentials.sign_in() {
            Ok(session) => {
                info!("Signed in as {}", session.email);
                ctx.toasts
                    .push("Welcome back! 👋", format!("Signed in as {}", session.email));
                ctx.session = Some(session);
                self.form.reset();
                Some(Transition::Navigate(Route::Dashboard))
            }
            Err(error) => {
                debug!("Sign in rejected: {}", error.description());
                ctx.toasts.push_error(&error);
                self.form.error = Some(error);
                None
            }
        }
    }
}

impl TuiWidget for LoginScreen {
    fn handle(&mut self, action: TuiAction, ctx: &mut Context) -> Option<Transition> {
        match self.form.handle(action)? {
            FormEvent::Button(SIGN_IN) => self.sign_in(ctx),
            FormEvent::Button(SIGN_UP) => {
                ctx.toasts
                    .push("Sign up", "New accounts are not available offline");
                None
            }
            FormEvent::Button(FORGOT_PASSWORD) => {
                ctx.toasts.push(
                    "Forgot password?",
                    "Password recovery is not available offline",
                );
                None
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &Context) {
        let [column] = Layout::horizontal([Constraint::Length(64)])
            .flex(Flex::Center)
            .areas(area);
        let [intro, form] = Layout::default()
            .direction(Direction::Vertical)
            .flex(Flex::Center)
            .constraints([Constraint::Length(3), Constraint::Length(self.form.height())])
            .areas(column);

        let intro_text = vec![
            Line::styled(
                "Broke2Boss",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                "Sign in to continue your financial journey",
                Style::default().fg(Color::Gray),
            ),
        ];
        frame.render_widget(Paragraph::new(intro_text).centered(), intro);
        self.form.render(frame, form, true);
    }

    fn hints(&self) -> &'static str {
        "Tab/↑↓ move · Enter sign in · Ctrl+C quit"
    }
}
