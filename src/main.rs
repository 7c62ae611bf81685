mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::process;
use std::sync::Mutex;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use space_garbage::config::Settings;
use space_garbage::frames::Assets;
use space_garbage::session::new_session;

use display::Terminal;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings = Settings::from_env()?;
    init_logging(&settings)?;

    // Missing frames abort before the terminal is touched.
    let assets = Assets::load(&settings.assets_dir)?;
    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut terminal = Terminal::start(BufWriter::new(stdout()))?;
    let result = play(&mut terminal, assets, rng);

    // Always restore the terminal
    terminal.restore();
    result
}

fn play<W: Write>(terminal: &mut Terminal<W>, assets: Assets, rng: StdRng) -> Result<()> {
    let (rows, columns) = Terminal::<W>::size()?;
    let (mut scheduler, mut world) = new_session(rows, columns, assets, rng)?;
    scheduler.run(&mut world, terminal)?;
    info!(tick = world.tick, year = world.year, "session ended");
    Ok(())
}

/// Tracing goes to a file, if one is configured; the terminal belongs to
/// the game.
fn init_logging(settings: &Settings) -> Result<()> {
    let Some(path) = &settings.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
