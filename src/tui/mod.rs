//! Terminal report viewer.
//!
//! Feature-gated behind `tui`. Launch with `--tui` on the CLI.

mod controls;
mod layout;
mod style;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::advisor::EnergyReport;

/// Which breakdown the main panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Per-appliance consumption.
    Usage,
    /// Per-tenant smart-plan billing.
    Tenants,
}

/// Viewer state.
pub struct App {
    pub report: EnergyReport,
    pub view: View,
    pub quit: bool,
}

impl App {
    /// Creates viewer state for `report`, starting on the appliance view.
    ///
    /// # Arguments
    ///
    /// * `report` - Finished estimate to display
    pub fn new(report: EnergyReport) -> Self {
        Self {
            report,
            view: View::Usage,
            quit: false,
        }
    }

    /// Switches between the appliance and tenant breakdowns.
    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Usage => View::Tenants,
            View::Tenants => View::Usage,
        };
    }
}

/// Shows `report` until the user quits.
///
/// Sets up the terminal (raw mode, alternate screen), runs the event loop,
/// and restores the terminal on exit.
///
/// # Arguments
///
/// * `report` - Finished estimate to display
///
/// # Errors
///
/// Returns an `io::Error` if the terminal cannot be set up or drawn.
pub fn run(report: EnergyReport) -> io::Result<()> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e);
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(t) => t,
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e);
        }
    };

    let mut app = App::new(report);
    let result = event_loop(&mut terminal, &mut app);

    // Always restore terminal state
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| layout::render(frame, app))?;

        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                controls::handle_key(app, key);
            }
        }
    }
}
