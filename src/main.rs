use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use air_shooter::assets::BuiltinAssets;
use air_shooter::event::{translate_key, Event, EventHandler, KeyHold};
use air_shooter::input::InputEvent;
use air_shooter::ui::{self, CellCanvas};
use air_shooter::{AirShooter, Settings};

#[derive(Parser, Debug)]
#[command(name = "air-shooter")]
#[command(about = "Side-scrolling arcade shooter for the terminal")]
struct Cli {
    /// JSON settings file; absent keys keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// RNG seed for a reproducible obstacle stream
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value = "air-shooter.log")]
    log_file: PathBuf,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!(
        "Air Shooter starting: {}x{} screen, seed {}",
        settings.screen_width,
        settings.screen_height,
        seed
    );
    let tick_rate = settings.tick_interval_ms();
    let game = AirShooter::new(settings, &BuiltinAssets, seed).context("failed to load game")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let releases_reported = supports_keyboard_enhancement().unwrap_or(false);
    if releases_reported {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal, game, tick_rate, releases_reported);

    // Restore terminal
    if releases_reported {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut game: AirShooter,
    tick_rate: u64,
    releases_reported: bool,
) -> Result<()> {
    let (w, h) = (game.settings().screen_width, game.settings().screen_height);
    let mut canvas = CellCanvas::new(w, h);
    let mut hold = KeyHold::new(releases_reported);
    let event_handler = EventHandler::new(tick_rate);
    let mut pending: Vec<InputEvent> = Vec::new();

    // Lay out the canvas before the first tick
    terminal.draw(|frame| ui::render(frame, &mut canvas, &game))?;

    loop {
        match event_handler.next()? {
            Event::Key(key) => pending.extend(translate_key(key)),
            Event::Click { column, row } => {
                if let Some((x, y)) = canvas.to_world(column, row) {
                    pending.push(InputEvent::PointerClick { x, y });
                }
            }
            Event::Tick => {
                for ev in &pending {
                    hold.observe(ev, game.ticks());
                }
                pending.extend(hold.expire(game.ticks()));

                game.tick(&pending, &mut canvas);
                pending.clear();
                if game.should_quit {
                    break;
                }
                terminal.draw(|frame| ui::render(frame, &mut canvas, &game))?;
            }
        }
    }

    log::info!("Quit after {} ticks", game.ticks());
    Ok(())
}
