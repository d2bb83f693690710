mod input;
mod ui;

use std::collections::HashSet;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use inkblade::art::{ArtStatus, ArtStudio, ArtSubject, GeminiImageGenerator};
use inkblade::config::{CliCommand, GameConfig};
use inkblade::core::game_logic::start_game;
use inkblade::core::tick::{game_tick, TickClock};
use inkblade::GameState;
use input::{handle_game_input, InputResult};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::prelude::*;
use ui::{draw_ui, UiState};

fn print_help() {
    println!("Ink Blade - Terminal Wuxia Clicker RPG\n");
    println!("Usage: inkblade [options]\n");
    println!("Options:");
    println!("  --lang <en|zh>      Interface language");
    println!("  --gold <amount>     Starting gold");
    println!("  --shop-size <n>     Listings per shop refresh");
    println!("  --no-art            Disable ink painting requests");
    println!("  --auto-paint        Paint enemies as they appear");
    println!("  --version           Show version information");
    println!("  --help              Show this help message\n");
    println!("Environment:");
    println!("  GEMINI_API_KEY, INKBLADE_IMAGE_MODEL, INKBLADE_AUTO_PAINT,");
    println!("  INKBLADE_STARTING_GOLD, INKBLADE_SHOP_SIZE, INKBLADE_LANG, INKBLADE_LOG_DIR");
}

fn log_directory() -> PathBuf {
    if let Ok(dir) = std::env::var("INKBLADE_LOG_DIR") {
        return PathBuf::from(dir);
    }
    directories::ProjectDirs::from("", "", "inkblade")
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("inkblade-logs"))
}

/// Logs go to a file; stderr belongs to the terminal UI.
fn setup_logging() -> io::Result<PathBuf> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "inkblade.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Keep the writer alive for the whole process
    std::mem::forget(guard);

    Ok(log_dir)
}

fn spawn_studio(config: &GameConfig) -> Option<ArtStudio> {
    if !config.art.enabled {
        return None;
    }
    let generator = GeminiImageGenerator::new(config.art.api_key.clone(), config.art.model.clone());
    match ArtStudio::spawn(generator) {
        Ok(studio) => Some(studio),
        Err(e) => {
            tracing::warn!(error = %e, "could not start art worker; painting disabled");
            None
        }
    }
}

/// Requests art for everything the screens show, once per key and
/// credential. A new key forgets earlier requests so failed art is retried.
#[derive(Debug, Default)]
struct AutoPainter {
    requested: HashSet<String>,
    epoch: u64,
}

impl AutoPainter {
    fn paint(&mut self, studio: &mut ArtStudio, state: &GameState) {
        if studio.needs_credential() {
            return;
        }
        if studio.credential_epoch() != self.epoch {
            self.requested.clear();
            self.epoch = studio.credential_epoch();
        }
        let subjects = state
            .active_enemy()
            .map(ArtSubject::enemy)
            .into_iter()
            .chain(state.encounter.stage_boss().map(ArtSubject::boss_avatar))
            .chain(state.skills.iter().map(ArtSubject::skill))
            .chain(state.buildings.iter().map(ArtSubject::building))
            .chain(state.shop.iter().map(ArtSubject::item));
        for subject in subjects {
            let key = subject.key.clone();
            // In-flight work may belong to an older key; check again later
            if self.requested.contains(&key) || studio.status(&key) == ArtStatus::Painting {
                continue;
            }
            studio.request(subject);
            self.requested.insert(key);
        }
    }
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &GameConfig,
    state: &mut GameState,
    studio: &mut Option<ArtStudio>,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut ui = UiState::new();
    let mut clock = TickClock::new(Instant::now());
    let mut last_frame = Instant::now();
    let mut painter = AutoPainter::default();
    let poll_interval = Duration::from_millis(config.tick_interval_ms);

    loop {
        terminal.draw(|frame| draw_ui(frame, state, &ui, studio.as_ref()))?;

        let timeout = poll_interval.min(clock.until_next(Instant::now()));
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && handle_game_input(key, state, &mut ui, studio.as_mut(), &mut rng)
                        == InputResult::Quit
                {
                    break;
                }
            }
        }

        let now = Instant::now();
        ui.update_effects(now.duration_since(last_frame).as_secs_f64());
        last_frame = now;

        if clock.ready(now) {
            let result = game_tick(state, &mut rng);
            ui.record_tick(&result);
        }

        if let Some(studio) = studio.as_mut() {
            studio.poll();
            if config.art.auto_paint {
                painter.paint(studio, state);
            }
        }

        ui.clamp_selection(state);
    }

    Ok(())
}

fn main() -> io::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match GameConfig::from_env().and_then(|config| config.parse_args(&args)) {
        Ok(CliCommand::Play(config)) => config,
        Ok(CliCommand::Version) => {
            println!("inkblade {}", env!("CARGO_PKG_VERSION"));
            std::process::exit(0);
        }
        Ok(CliCommand::Help) => {
            print_help();
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}\n", e);
            print_help();
            std::process::exit(1);
        }
    };

    match setup_logging() {
        Ok(dir) => tracing::info!(log_dir = %dir.display(), "logging initialized"),
        Err(e) => eprintln!("Warning: file logging disabled: {}", e),
    }

    let mut rng = rand::thread_rng();
    let mut state = start_game(&config, &mut rng);
    let mut studio = spawn_studio(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config, &mut state, &mut studio);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(
        stage = state.stats.stage,
        gold = state.stats.gold,
        "session ended"
    );
    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal loop failed");
    }
    println!("Farewell, wanderer.");

    result
}
