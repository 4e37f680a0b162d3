use std::fs::File;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lifecanvas::app::App;
use lifecanvas::app::Control;
use lifecanvas::app::canvas_size;
use lifecanvas::config::Config;
use lifecanvas::config::ConfigError;
use lifecanvas::controller::DEFAULT_LIVE_PROBABILITY;
use lifecanvas::io::TerminalPointer;
use lifecanvas::io::convert_event;
use lifecanvas::terminal::TerminalRenderer;

/// Conway's Game of Life on an interactive terminal canvas.
///
/// Click or drag on the canvas to draw cells, and on live cells to erase them.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of grid rows
    #[arg(long, default_value_t = 50)]
    rows: usize,

    /// Number of grid columns
    #[arg(long, default_value_t = 50)]
    columns: usize,

    /// Birth and survival counts, e.g. B3/S23 or b36s23
    #[arg(long, default_value = "B3/S23")]
    rule: String,

    /// Chance of each cell starting alive
    #[arg(long, default_value_t = DEFAULT_LIVE_PROBABILITY)]
    live_probability: f64,

    /// Milliseconds between steps while running
    #[arg(long, default_value_t = 300)]
    interval_ms: u64,

    /// Canvas width in terminal columns. Fills the terminal by default.
    #[arg(long)]
    width: Option<u16>,

    /// Canvas height in terminal rows. Fills the terminal by default.
    #[arg(long)]
    height: Option<u16>,

    /// Hide the gridlines (toggle with `g`)
    #[arg(long)]
    no_gridlines: bool,

    /// Seed for the random grid
    #[arg(long)]
    seed: Option<u64>,

    /// Start stopped instead of running
    #[arg(long)]
    paused: bool,

    /// Write logs to this file. Filtered by `RUST_LOG`, `info` by default.
    #[arg(long)]
    log: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> Result<Config, ConfigError> {
        let config = Config {
            rows: self.rows,
            columns: self.columns,
            rules: self.rule.parse()?,
            live_probability: self.live_probability,
            step_interval: Duration::from_millis(self.interval_ms),
            width: self.width,
            height: self.height,
            show_gridlines: !self.no_gridlines,
            seed: self.seed,
            start_paused: self.paused,
        };

        config.validate()?;

        Ok(config)
    }
}

/// Puts the terminal in raw mode with mouse capture, and restores it when dropped.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        // from here on, drop restores the terminal even if setup fails halfway
        let guard = Self;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide,
        )?;

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            cursor::Show,
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen,
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn run(config: &Config) -> anyhow::Result<()> {
    let _guard = TerminalGuard::enter().context("Failed to set up terminal")?;

    let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
    let viewport = canvas_size(config.width, config.height, cols, rows);

    let mut app = App::new(config, viewport, Instant::now())?;
    let mut renderer = TerminalRenderer::new(io::stdout());
    let pointer = TerminalPointer::new(0, 0);

    loop {
        if app.render(&mut renderer)? {
            renderer.draw_status(&app.status())?;
        }

        // Poll events until the next tick is due
        if event::poll(app.timeout(Instant::now()))? {
            let event = event::read()?;

            if let Some(event) = convert_event(event, &pointer) {
                if app.handle(event, Instant::now()) == Control::Exit {
                    break;
                }
            }
        }

        app.tick(Instant::now());
    }

    info!(generation = app.simulation().generation(), "exiting");

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.config().context("Invalid configuration")?;

    if let Some(path) = &args.log {
        init_logging(path)?;
    }

    info!(?config, "starting");

    run(&config)
}
