#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::{self, stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use productdesk::api::ProductApi;
use productdesk::config::Config;
use productdesk::tui::App;
use productdesk::{logging, worker};

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    let log_path = logging::init(&config.log_dir, &config.log_filter)?;
    tracing::info!(
        base_url = %config.base_url,
        log = %log_path.display(),
        "productdesk starting"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let (dispatch_tx, dispatch_rx) = mpsc::unbounded_channel();
    let (completion_tx, completion_rx) = mpsc::unbounded_channel();
    runtime.spawn(worker::serve(
        ProductApi::new(config.base_url),
        dispatch_rx,
        completion_tx,
    ));

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(dispatch_tx, completion_rx);
    let result = app.run(&mut terminal);

    let restore_result = restore_terminal();
    tracing::info!("productdesk exiting");
    match result {
        Err(e) => Err(e.into()),
        Ok(()) => restore_result.map_err(Into::into),
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn restore_terminal() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}
