/// Compile-time game constants and the few runtime knobs read from the
/// environment.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::KeyCode;

use crate::canvas::Style;

// ── Clock ─────────────────────────────────────────────────────────────────────

/// Wall-clock length of one scheduler pass.
pub const TIC_TIMEOUT: Duration = Duration::from_millis(50);

// ── Canvas ────────────────────────────────────────────────────────────────────

pub const BORDER_WIDTH: u16 = 1;
pub const STARS_AMOUNT: usize = 100;
pub const STAR_SYMBOLS: &[char] = &['+', '*', '.', ':'];

/// Smallest grid that still leaves room for the ship between the borders.
pub const MIN_ROWS: u16 = 12;
pub const MIN_COLUMNS: u16 = 30;

// ── Star brightness cycle ─────────────────────────────────────────────────────

pub const BLINK_PHASES: [(Style, Duration); 4] = [
    (Style::Dim, Duration::from_millis(2000)),
    (Style::Normal, Duration::from_millis(300)),
    (Style::Bold, Duration::from_millis(500)),
    (Style::Normal, Duration::from_millis(300)),
];

// ── Scenario ──────────────────────────────────────────────────────────────────

pub const START_YEAR: u32 = 1957;
/// First year in which the ship may fire.
pub const GUN_YEAR: u32 = 2020;
pub const YEAR_DURATION: Duration = Duration::from_millis(1500);
/// Unit of the spawn-delay table in `scenario`.
pub const SPAWN_DELAY_UNIT: Duration = Duration::from_millis(100);

// ── Physics ───────────────────────────────────────────────────────────────────

pub const SHIP_FADING: f64 = 0.9;
pub const SHIP_SPEED_LIMIT: f64 = 2.0;
/// How long each rocket pose stays on screen before the next one.
pub const SHIP_POSE_DURATION: Duration = Duration::from_secs(2);
/// Rows per tick; negative is upward.
pub const SHOT_SPEED: f64 = -1.0;
pub const GARBAGE_SPEED: f64 = 0.5;

// ── Key bindings ──────────────────────────────────────────────────────────────

pub const UP_KEYS: &[KeyCode] = &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')];
pub const DOWN_KEYS: &[KeyCode] = &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')];
pub const LEFT_KEYS: &[KeyCode] = &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
pub const RIGHT_KEYS: &[KeyCode] = &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
pub const FIRE_KEY: KeyCode = KeyCode::Char(' ');

// ── Runtime settings ──────────────────────────────────────────────────────────

const ASSETS_VAR: &str = "SPACE_GARBAGE_ASSETS";
const LOG_VAR: &str = "SPACE_GARBAGE_LOG";
const SEED_VAR: &str = "SPACE_GARBAGE_SEED";

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Directory holding the animation frame files.
    pub assets_dir: PathBuf,
    /// Where tracing output goes; logging is off when unset.
    pub log_file: Option<PathBuf>,
    /// Fixed RNG seed for reproducible sessions.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            assets_dir: PathBuf::from("animation_frames"),
            log_file: None,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Settings::default();
        let seed = match lookup(SEED_VAR) {
            Some(raw) => Some(
                raw.trim()
                    .parse()
                    .with_context(|| format!("{SEED_VAR} must be an unsigned integer, got {raw:?}"))?,
            ),
            None => None,
        };
        Ok(Settings {
            assets_dir: lookup(ASSETS_VAR).map(PathBuf::from).unwrap_or(defaults.assets_dir),
            log_file: lookup(LOG_VAR).map(PathBuf::from),
            seed,
        })
    }
}
