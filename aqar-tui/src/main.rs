//! Aqar entry point: terminal setup, the draw/poll loop, teardown.

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use aqar_core::registry::MarketData;
use aqar_tui::app::AppState;
use aqar_tui::{input, ui};

#[derive(Parser, Debug)]
#[command(
    name = "aqar",
    about = "Riyadh real-estate market dashboard for the terminal",
    version
)]
struct Args {
    /// Start on this path, e.g. / or /analytics. An unknown path lands on
    /// the not-found view.
    #[arg(default_value = "/")]
    path: String,

    /// Input poll timeout in milliseconds.
    #[arg(long, default_value_t = 50)]
    tick_rate_ms: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Restore the terminal even if a draw panics.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new(MarketData::riyadh(), args.path);
    let tick_rate = Duration::from_millis(args.tick_rate_ms);
    let result = run_app(&mut terminal, &mut app, tick_rate);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.running {
            return Ok(());
        }
    }
}
