// sortty: Step-Through Sorting Algorithm Visualizer

use std::fs::File;
use std::io;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::EnvFilter;

use sortty::config::{Cli, Config};
use sortty::input::format_values;
use sortty::playback::Playback;
use sortty::sorts;
use sortty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();
    let config = match Config::from_cli(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config)?;

    if config.print {
        return print_trace(&config);
    }

    let playback = match Playback::new(config.algorithm, &config.input, config.interval) {
        Ok(playback) => playback,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(playback);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Install the tracing subscriber. Set RUST_LOG=debug for verbose logging.
///
/// The TUI owns the terminal, so logs only go somewhere visible in print
/// mode (stderr) or when a log file is given.
fn init_logging(config: &Config) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match (&config.log_file, config.print) {
        (Some(path), _) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (None, true) => builder.with_writer(io::stderr).init(),
        (None, false) => builder.with_writer(io::sink).init(),
    }

    Ok(())
}

/// Print every step of the trace, one line each
fn print_trace(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let trace = match sorts::generate(config.algorithm, &config.input) {
        Ok(trace) => trace,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("{} on [{}]", trace.algorithm(), format_values(trace.input()));
    let total = trace.len();
    for (i, snapshot) in trace.iter().enumerate() {
        println!(
            "step {:>3}/{}: [{}]  {}",
            i + 1,
            total,
            format_values(&snapshot.array),
            snapshot.describe()
        );
    }

    Ok(())
}
