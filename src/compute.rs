/// Pure helper functions shared by the tasks.
///
/// Nothing here touches the canvas, the registry or the clock; every
/// function maps its arguments to a result so it can be tested alone.

use std::time::Duration;

use crossterm::event::KeyCode;

use crate::canvas::Style;
use crate::config::{
    BLINK_PHASES, DOWN_KEYS, FIRE_KEY, LEFT_KEYS, RIGHT_KEYS, TIC_TIMEOUT, UP_KEYS,
};

// ── Clock ─────────────────────────────────────────────────────────────────────

/// Number of whole ticks in `duration`, never less than one.
pub fn ticks(duration: Duration) -> u64 {
    let count = duration.as_millis() / TIC_TIMEOUT.as_millis();
    (count as u64).max(1)
}

// ── Input ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Controls {
    /// -1 up, 1 down, 0 none.
    pub rows_direction: i8,
    /// -1 left, 1 right, 0 none.
    pub columns_direction: i8,
    pub fire: bool,
}

/// Fold a batch of key presses into one tick of controls.  The last
/// directional key on each axis wins.
pub fn read_controls(keys: &[KeyCode]) -> Controls {
    let mut controls = Controls::default();
    for key in keys {
        if UP_KEYS.contains(key) {
            controls.rows_direction = -1;
        } else if DOWN_KEYS.contains(key) {
            controls.rows_direction = 1;
        } else if LEFT_KEYS.contains(key) {
            controls.columns_direction = -1;
        } else if RIGHT_KEYS.contains(key) {
            controls.columns_direction = 1;
        } else if *key == FIRE_KEY {
            controls.fire = true;
        }
    }
    controls
}

// ── Ship physics ──────────────────────────────────────────────────────────────

fn apply_acceleration(speed: f64, speed_limit: f64, forward: bool) -> f64 {
    let speed_limit = speed_limit.abs();
    let delta = (speed / speed_limit).cos() * 0.75;
    let result = if forward { speed + delta } else { speed - delta };
    let result = result.clamp(-speed_limit, speed_limit);
    if result.abs() < 0.1 {
        0.0
    } else {
        result
    }
}

/// Damp the current velocity by `fading`, then accelerate along each
/// non-zero direction.  Returns `(row_speed, column_speed)`.
pub fn update_speed(
    row_speed: f64,
    column_speed: f64,
    rows_direction: i8,
    columns_direction: i8,
    speed_limit: f64,
    fading: f64,
) -> (f64, f64) {
    debug_assert!((-1..=1).contains(&rows_direction));
    debug_assert!((-1..=1).contains(&columns_direction));
    let fading = fading.clamp(0.0, 1.0);

    let mut row_speed = row_speed * fading;
    let mut column_speed = column_speed * fading;

    if rows_direction != 0 {
        row_speed = apply_acceleration(row_speed, speed_limit, rows_direction > 0);
    }
    if columns_direction != 0 {
        column_speed = apply_acceleration(column_speed, speed_limit, columns_direction > 0);
    }
    (row_speed, column_speed)
}

/// Keep a sprite of `extent` cells inside `[border, dimension - extent - border]`.
/// On a grid too small for the sprite the lower bound wins.
pub fn clamp_axis(position: f64, extent: u16, dimension: u16, border: u16) -> f64 {
    let low = border as f64;
    let high = dimension as f64 - extent as f64 - border as f64;
    position.min(high).max(low)
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Offset that centres `extent` within `dimension`.
pub fn centered(dimension: u16, extent: u16) -> f64 {
    (dimension as f64 - extent as f64) / 2.0
}

// ── Star blinking ─────────────────────────────────────────────────────────────

/// Total ticks in one dim → normal → bold → normal cycle.
pub fn blink_cycle_ticks() -> u64 {
    BLINK_PHASES.iter().map(|(_, d)| ticks(*d)).sum()
}

/// Phase index and style for a position within the blink cycle.
pub fn blink_phase_at(clock: u64) -> (usize, Style) {
    let mut clock = clock % blink_cycle_ticks();
    for (i, (style, duration)) in BLINK_PHASES.iter().enumerate() {
        let length = ticks(*duration);
        if clock < length {
            return (i, *style);
        }
        clock -= length;
    }
    (0, BLINK_PHASES[0].0)
}
