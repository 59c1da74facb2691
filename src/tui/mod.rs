use std::io;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Frame;
use ratatui::Terminal;
use tracing::info;

use crate::config::TrackerConfig;
use crate::errors::TrackerError;
use crate::ledger::Ledger;
use crate::notify::Toasts;
use crate::session::Session;

use self::actions::{key_pressed, TuiAction};
use self::app::App;

pub mod actions;
pub mod app;
mod dashboard;
mod editor;
mod form;
mod insights;
mod login;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Insights,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Navigate(Route),
    Quit,
}

/// State shared by every screen.
#[derive(Debug)]
pub struct Context {
    pub config: TrackerConfig,
    pub ledger: Ledger,
    pub toasts: Toasts,
    pub session: Option<Session>,
    pub today: NaiveDate,
}

pub trait TuiWidget {
    fn handle(&mut self, action: TuiAction, ctx: &mut Context) -> Option<Transition>;
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &Context);
    /// Key hints shown in the footer.
    fn hints(&self) -> &'static str;
}

pub fn run(mut app: App) -> Result<(), TrackerError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("Terminal UI started");

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("Terminal UI stopped");

    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), TrackerError> {
    while !app.should_quit() {
        terminal.draw(|f| app.render(f))?;
        if let Some(key) = key_pressed() {
            app.handle_key(key);
        }
        app.tick(Instant::now(), Local::now().date_naive());
    }
    Ok(())
}
