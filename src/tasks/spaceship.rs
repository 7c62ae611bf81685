use std::rc::Rc;

use tracing::info;

use crate::compute::{clamp_axis, read_controls, ticks, update_speed};
use crate::config::{BORDER_WIDTH, GUN_YEAR, SHIP_FADING, SHIP_POSE_DURATION, SHIP_SPEED_LIMIT};
use crate::frames::Frame;
use crate::obstacles::Rect;
use crate::scheduler::{Step, Task};
use crate::tasks::{Explosion, GameOver, Shot};
use crate::world::World;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShipState {
    Active,
    Destroyed,
}

/// The player's ship: reads controls, flies, fires once guns are
/// unlocked, and ends the game on contact with debris.
pub struct Spaceship {
    row: f64,
    column: f64,
    row_speed: f64,
    column_speed: f64,
    poses: Vec<Rc<Frame>>,
    /// Hull size, taken from the first pose.
    size: (u16, u16),
    pose_ticks: u64,
    clock: u64,
    drawn: Option<(f64, f64, Rc<Frame>)>,
    state: ShipState,
}

impl Spaceship {
    pub const NAME: &'static str = "spaceship";

    /// `poses` must not be empty.
    pub fn new(row: f64, column: f64, poses: Vec<Rc<Frame>>) -> Self {
        let size = poses.first().map(|f| f.size()).unwrap_or((0, 0));
        Spaceship {
            row,
            column,
            row_speed: 0.0,
            column_speed: 0.0,
            poses,
            size,
            pose_ticks: ticks(SHIP_POSE_DURATION),
            clock: 0,
            drawn: None,
            state: ShipState::Active,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    pub fn speed(&self) -> (f64, f64) {
        (self.row_speed, self.column_speed)
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn state(&self) -> ShipState {
        self.state
    }

    fn hull(&self) -> Rect {
        Rect::at(self.row, self.column, self.size)
    }

    fn pose(&self) -> Option<Rc<Frame>> {
        if self.poses.is_empty() {
            return None;
        }
        let index = (self.clock / self.pose_ticks) as usize % self.poses.len();
        Some(Rc::clone(&self.poses[index]))
    }
}

impl Task for Spaceship {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn step(&mut self, world: &mut World) -> Step {
        if self.state == ShipState::Destroyed {
            return Step::Done;
        }
        if let Some((row, column, frame)) = self.drawn.take() {
            world.canvas.draw_frame(row, column, &frame, true);
        }

        let controls = read_controls(&world.canvas.read_pending_keys());
        (self.row_speed, self.column_speed) = update_speed(
            self.row_speed,
            self.column_speed,
            controls.rows_direction,
            controls.columns_direction,
            SHIP_SPEED_LIMIT,
            SHIP_FADING,
        );

        let (rows, columns) = world.canvas.dimensions();
        self.row = clamp_axis(self.row + self.row_speed, self.size.0, rows, BORDER_WIDTH);
        self.column = clamp_axis(self.column + self.column_speed, self.size.1, columns, BORDER_WIDTH);

        if controls.fire && world.year >= GUN_YEAR {
            let nose = self.column + (self.size.1 / 2) as f64;
            world.canvas.beep();
            world.spawn(Shot::new(self.row, nose));
        }

        if world.obstacles.first_hit(&self.hull()).is_some() {
            info!(row = self.row, column = self.column, year = world.year, "ship destroyed");
            self.state = ShipState::Destroyed;
            let center_row = self.row + self.size.0 as f64 / 2.0;
            let center_column = self.column + self.size.1 as f64 / 2.0;
            let explosion = world.assets.explosion.clone();
            let banner = Rc::clone(&world.assets.game_over);
            world.spawn(Explosion::new(explosion, center_row, center_column));
            let dimensions = world.canvas.dimensions();
            world.spawn(GameOver::new(banner, dimensions));
            return Step::Done;
        }

        if let Some(frame) = self.pose() {
            world.canvas.draw_frame(self.row, self.column, &frame, false);
            self.drawn = Some((self.row, self.column, frame));
        }
        self.clock += 1;
        Step::Continue
    }
}
