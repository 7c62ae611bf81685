/// Building a fresh game session.

use std::rc::Rc;

use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::canvas::Canvas;
use crate::compute::blink_cycle_ticks;
use crate::config::{BORDER_WIDTH, MIN_COLUMNS, MIN_ROWS, STARS_AMOUNT, STAR_SYMBOLS};
use crate::frames::Assets;
use crate::scheduler::Scheduler;
use crate::tasks::{GarbageSpawner, ScenarioClock, Spaceship, Star};
use crate::world::World;

/// A framed canvas of the given size with stars, the ship, the debris
/// spawner and the scenario clock already scheduled.
pub fn new_session(rows: u16, columns: u16, assets: Assets, rng: StdRng) -> Result<(Scheduler, World)> {
    if rows < MIN_ROWS || columns < MIN_COLUMNS {
        bail!("Terminal is {columns}x{rows}, need at least {MIN_COLUMNS}x{MIN_ROWS}");
    }
    if assets.rocket.is_empty() {
        bail!("No spaceship frames loaded");
    }

    let canvas = Canvas::framed(rows, columns, BORDER_WIDTH);
    let mut world = World::new(canvas, Rc::new(assets), rng);
    let mut scheduler = Scheduler::new();

    let cycle = blink_cycle_ticks();
    let border = BORDER_WIDTH as i32;
    for _ in 0..STARS_AMOUNT {
        let row = world.rng.gen_range(border..rows as i32 - border);
        let column = world.rng.gen_range(border..columns as i32 - border);
        let symbol = *STAR_SYMBOLS.choose(&mut world.rng).unwrap_or(&'*');
        let offset = world.rng.gen_range(0..cycle);
        scheduler.spawn(Star::new(row, column, symbol, offset));
    }

    let ship_row = (rows / 2) as f64 - 1.0;
    let ship_column = (columns / 2) as f64 - 1.0;
    scheduler.spawn(Spaceship::new(ship_row, ship_column, world.assets.rocket.clone()));
    scheduler.spawn(GarbageSpawner::new(world.assets.garbage.clone()));
    scheduler.spawn(ScenarioClock::new());

    info!(rows, columns, tasks = scheduler.len(), year = world.year, "session started");
    Ok((scheduler, world))
}
