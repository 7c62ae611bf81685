use std::rc::Rc;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::config::GARBAGE_SPEED;
use crate::frames::Frame;
use crate::obstacles::{Obstacle, ObstacleId, Rect};
use crate::scenario::spawn_delay_ticks;
use crate::scheduler::{Step, Task};
use crate::world::{TaskId, World};

/// A piece of debris falling straight down a fixed column.
///
/// Owns exactly one obstacle for its whole life.  The obstacle follows the
/// drawn frame every tick and is removed when the debris leaves the grid or
/// consumes a hit.
pub struct FlyingGarbage {
    id: TaskId,
    obstacle: ObstacleId,
    frame: Rc<Frame>,
    row: f64,
    column: f64,
    speed: f64,
    drawn: bool,
}

impl FlyingGarbage {
    pub const NAME: &'static str = "garbage";

    /// Debris entering at the top row.
    pub fn new(world: &mut World, column: f64, frame: Rc<Frame>, speed: f64) -> Self {
        Self::at(world, 0.0, column, frame, speed)
    }

    /// Debris starting at an arbitrary row.  The column is clamped to the
    /// grid.  The obstacle is registered and the frame drawn at the start
    /// row together, so the hit-region never exists without its glyphs.
    pub fn at(world: &mut World, row: f64, column: f64, frame: Rc<Frame>, speed: f64) -> Self {
        let (_, columns) = world.canvas.dimensions();
        let column = column.min(columns as f64 - 1.0).max(0.0);
        let id = world.allocate_task_id();
        let obstacle = world.obstacles.register(Obstacle {
            rect: Rect::at(row, column, frame.size()),
            owner: id,
        });
        world.canvas.draw_frame(row, column, &frame, false);
        FlyingGarbage { id, obstacle, frame, row, column, speed, drawn: true }
    }

    pub fn obstacle(&self) -> ObstacleId {
        self.obstacle
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }
}

impl Task for FlyingGarbage {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn step(&mut self, world: &mut World) -> Step {
        if self.drawn {
            world.canvas.draw_frame(self.row, self.column, &self.frame, true);
            self.drawn = false;
        }

        if world.obstacles.take_struck(self.obstacle) {
            debug!(task = %self.id, row = self.row, column = self.column, "garbage destroyed");
            return Step::Done;
        }

        self.row += self.speed;
        let (rows, _) = world.canvas.dimensions();
        if self.row >= rows as f64 {
            world.obstacles.deregister(self.obstacle);
            return Step::Done;
        }

        world
            .obstacles
            .update(self.obstacle, Rect::at(self.row, self.column, self.frame.size()));
        world.canvas.draw_frame(self.row, self.column, &self.frame, false);
        self.drawn = true;
        Step::Continue
    }
}

/// Launches debris forever at the cadence the current year allows.
pub struct GarbageSpawner {
    frames: Vec<Rc<Frame>>,
    speed: f64,
    cooldown: u64,
}

impl GarbageSpawner {
    pub const NAME: &'static str = "garbage_spawner";

    pub fn new(frames: Vec<Rc<Frame>>) -> Self {
        GarbageSpawner { frames, speed: GARBAGE_SPEED, cooldown: 0 }
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }
}

impl Task for GarbageSpawner {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn step(&mut self, world: &mut World) -> Step {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return Step::Continue;
        }
        let Some(delay) = spawn_delay_ticks(world.year) else {
            return Step::Continue;
        };

        let (_, columns) = world.canvas.dimensions();
        let column = world.rng.gen_range(0..columns.max(1)) as f64;
        let Some(frame) = self.frames.choose(&mut world.rng).cloned() else {
            return Step::Continue;
        };

        let garbage = FlyingGarbage::new(world, column, frame, self.speed);
        trace!(column, year = world.year, delay, "garbage launched");
        world.spawn(garbage);
        // This step counts as the first tick of the wait.
        self.cooldown = delay.saturating_sub(1);
        Step::Continue
    }
}
