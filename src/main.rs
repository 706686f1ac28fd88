use std::path::PathBuf;

use clap::Parser;
use glimpse::app::App;
use glimpse::config::Config;
use glimpse::error::AppError;
use glimpse::input::file::load_text_file;
use glimpse::logging;
use glimpse::ui::TuiManager;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal RSVP speed reader", long_about = None)]
struct Cli {
    /// Text file to load on startup
    file: Option<PathBuf>,

    /// Starting speed in words per minute (clamped to 50-1000)
    #[arg(short, long)]
    wpm: Option<u32>,

    /// Write logs to this file (verbosity via RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init(path)?;
    }

    let mut config = Config::default();
    if let Some(wpm) = cli.wpm {
        config.playback = config.playback.with_initial_wpm(wpm);
    }

    // Read the file before taking over the terminal so errors print normally
    let preload = cli.file.as_deref().map(load_text_file).transpose()?;

    let mut app = App::new(config.playback.clone());
    if let Some(text) = preload {
        app.load_document(&text);
    }
    info!(wpm = config.playback.initial_wpm, file = ?cli.file, "starting glimpse");

    let mut tui = TuiManager::new(config.ui)?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
