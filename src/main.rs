// sortty: step-by-step sorting visualizer

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use sortty::algorithms::Algorithm;
use sortty::input::parse_values;
use sortty::playback::constants::{DEFAULT_DELAY_MS, DEFAULT_VALUES};
use sortty::playback::{Controller, PlaybackSession, SleepPacer, TraceRenderer};
use sortty::ui::App;

#[derive(Debug, Parser)]
#[command(
    name = "sortty",
    about = "Watch sorting algorithms compare, swap and merge, one step at a time",
    version
)]
struct Cli {
    /// Values to sort, comma or space separated
    #[arg(short, long, allow_hyphen_values = true)]
    values: Option<String>,

    /// selection, bubble, insertion, merge or quick (unknown names use quick)
    #[arg(short, long, default_value = "quick")]
    algorithm: String,

    /// Delay between steps in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_DELAY_MS)]
    delay: u64,

    /// Print every frame to stdout instead of starting the TUI
    #[arg(long)]
    trace: bool,

    /// Write logs to this file (the TUI otherwise runs without logging)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = &cli.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let values = match &cli.values {
        Some(text) => match parse_values(text) {
            Ok(values) => values,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => DEFAULT_VALUES.to_vec(),
    };
    let algorithm = Algorithm::from_key(&cli.algorithm);
    let session = Arc::new(PlaybackSession::new(cli.delay));

    if cli.trace {
        let renderer = TraceRenderer::new(io::stdout().lock());
        let mut controller = Controller::with_session(values, renderer, SleepPacer, session);
        controller.set_delay(cli.delay)?;
        let report = controller.start(algorithm)?;
        eprintln!(
            "{}: {} steps, {} comparisons, {} writes",
            report.algorithm,
            report.steps,
            controller.stats().comparisons(),
            controller.stats().writes()
        );
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(terminal, values, algorithm, session);
    app.controller.set_delay(cli.delay)?;
    let res = app.run();

    // Restore terminal
    let terminal = app.controller.renderer_mut().terminal_mut();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}
