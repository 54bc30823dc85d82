//! Blockfall terminal runner (default binary).
//!
//! Wires crossterm input, the framebuffer renderer and the high score file
//! into a [`Session`] and runs it until game over or quit.

use std::fs::File;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use blockfall::engine::{Session, SessionConfig, SessionEnd};
use blockfall::frontend::{CrosstermInput, TerminalScreen};
use blockfall::guard::catch_fatal;
use blockfall::store::FileStore;
use blockfall::term::GameView;

const LOG_FILE: &str = "blockfall.log";

fn main() {
    init_logging();
    install_panic_hook();

    match catch_fatal(|| run(SessionConfig::default())) {
        Ok(SessionEnd::GameOver { score, saved }) => {
            if saved {
                println!("Game over. New high score: {}", score);
            } else {
                println!("Game over. Score: {}", score);
            }
        }
        Ok(SessionEnd::Quit { score }) => {
            tracing::info!("player quit with score {}", score);
        }
        Err(e) => {
            tracing::error!("fatal: {:#}", e);
            eprintln!("Error: {:#}", e);
        }
    }
}

fn run(config: SessionConfig) -> Result<SessionEnd> {
    let mut screen = TerminalScreen::new(GameView::default());
    screen.enter()?;

    let store = FileStore::new(&config.high_score_path);
    let mut session = Session::new(config, clock_seed(), screen, store);
    let result = session.run(&mut CrosstermInput);

    // Always try to restore terminal state, even when the loop failed.
    let (_, mut screen, _) = session.into_parts();
    let restored = screen.exit();
    let end = result?;
    restored?;
    Ok(end)
}

/// Log to a file so output never lands on the game screen. Logging is skipped
/// when the file cannot be created.
fn init_logging() {
    let Ok(file) = File::create(LOG_FILE) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// Restore terminal state before the default panic output. The panic itself
/// is then caught by [`catch_fatal`] and reported like any other error.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));
}

fn restore_terminal() {
    use crossterm::{cursor, execute, terminal};

    let _ = terminal::disable_raw_mode();
    let _ = execute!(
        std::io::stdout(),
        terminal::EnableLineWrap,
        terminal::LeaveAlternateScreen,
        cursor::Show
    );
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
