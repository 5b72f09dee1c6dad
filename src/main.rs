use std::io::{stdout, Stdout};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use folio::app::LogicThread;
use folio::config::Config;
use folio::content::Content;
use folio::render::RenderState;
use folio::{flog, flog_warn, ui, Result};

const FRAME_DURATION: Duration = Duration::from_micros(16_666); // 60fps

/// folio - a personal portfolio page that lives in the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    FOLIO_DEBUG=1    Enable debug logging (alternative to --debug)")]
pub struct Cli {
    /// Content file (TOML); falls back to the configured file, then the
    /// built-in sample portfolio
    pub content: Option<PathBuf>,

    /// Skip animations and render the page settled
    #[arg(short = 'r', long)]
    pub reduced_motion: bool,

    /// Enable debug logging (writes to ~/.folio/folio.log)
    #[arg(short = 'd', long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate a content file without starting the TUI
    Check {
        /// Path to the content file
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    folio::log::init_with_debug(cli.debug);

    if let Some(Command::Check { path }) = cli.command {
        return run_check(&path);
    }

    flog!("folio starting");

    let mut config = Config::load()?;
    if cli.reduced_motion {
        config.reduced_motion = true;
    }
    let content = load_content(cli.content.as_deref(), &config)?;

    let shutdown = Arc::new(AtomicBool::new(false));
    let (state_tx, state_rx) = crossbeam_channel::bounded::<RenderState>(1);

    let shutdown_clone = shutdown.clone();
    let logic_handle =
        thread::spawn(move || LogicThread::run(config, content, state_tx, shutdown_clone));

    let mut terminal = setup_terminal()?;
    let result = render_loop(&mut terminal, state_rx, shutdown.clone());
    restore_terminal(&mut terminal)?;

    shutdown.store(true, Ordering::Relaxed);
    match logic_handle.join() {
        Ok(logic_result) => logic_result?,
        Err(_) => flog_warn!("logic thread panicked"),
    }

    flog!("folio exiting");
    result
}

fn run_check(path: &Path) -> Result<()> {
    let content = Content::load(path)?;
    println!(
        "ok: {} ({} skills, {} projects, {} stats)",
        content.identity.name,
        content.skills.len(),
        content.projects.len(),
        content.stats.len()
    );
    Ok(())
}

fn load_content(cli_path: Option<&Path>, config: &Config) -> Result<Content> {
    if let Some(path) = cli_path {
        return Content::load(path);
    }
    if let Some(path) = config.content_path() {
        if path.exists() {
            return Content::load(&path);
        }
        flog_warn!("configured content file missing: {}", path.display());
    }
    Ok(Content::default())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(out))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draw loop: pull the latest snapshot (latest-wins channel), redraw only
/// when the version moved, hold a steady frame rate.
fn render_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state_rx: Receiver<RenderState>,
    shutdown: Arc<AtomicBool>,
) -> Result<()> {
    let mut state: Option<RenderState> = None;
    let mut last_drawn: Option<u64> = None;

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }
        let frame_start = Instant::now();

        match state_rx.try_recv() {
            Ok(new_state) => state = Some(new_state),
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }

        if let Some(ref current) = state {
            if last_drawn != Some(current.version) {
                terminal.draw(|frame| ui::draw(frame, current))?;
                last_drawn = Some(current.version);
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    Ok(())
}
