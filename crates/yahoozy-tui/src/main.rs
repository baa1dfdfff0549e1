use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fs::File;
use std::io;
use std::process;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use yahoozy_core::{HistoryStore, YhResult};

mod app;
mod data_dir;
mod reports;
mod ui;

use app::App;

fn main() {
    let dir = match data_dir::resolve() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Cannot resolve data directory: {}", e);
            process::exit(1);
        }
    };

    let store = match HistoryStore::open(&dir) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Cannot open history store in {}: {}", dir.display(), e);
            process::exit(1);
        }
    };

    // Logging goes to a file; stdout belongs to the alternate screen.
    if let Ok(log) = File::create(dir.join("yahoozy.log")) {
        let filter = EnvFilter::try_from_env("YAHOOZY_LOG")
            .unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(log))
            .with_ansi(false)
            .init();
    }
    info!(dir = %dir.display(), "starting");

    let mut app = match App::new(store) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Cannot read history: {}", e);
            process::exit(1);
        }
    };

    let result = run_terminal(&mut app);

    // The summary tables outlive the alternate screen.
    if app.games_completed > 0 {
        reports::final_results(&app.last_results);
        reports::top_ten(&app.top);
    }

    if let Err(e) = result {
        error!("fatal: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_terminal(app: &mut App) -> YhResult<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = app.run(&mut terminal);

    // Restore the terminal even when the app loop failed.
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
