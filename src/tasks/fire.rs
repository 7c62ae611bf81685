use tracing::debug;

use crate::canvas::Style;
use crate::config::SHOT_SPEED;
use crate::obstacles::Rect;
use crate::scheduler::{Step, Task};
use crate::tasks::Explosion;
use crate::world::World;

/// A projectile moving in a straight line until it leaves the grid or
/// hits an obstacle.
pub struct Shot {
    row: f64,
    column: f64,
    rows_speed: f64,
    columns_speed: f64,
    drawn: Option<(i32, i32)>,
}

impl Shot {
    pub const NAME: &'static str = "shot";

    /// A shot heading straight up.
    pub fn new(row: f64, column: f64) -> Self {
        Shot {
            row,
            column,
            rows_speed: SHOT_SPEED,
            columns_speed: 0.0,
            drawn: None,
        }
    }

    pub fn with_speed(mut self, rows_speed: f64, columns_speed: f64) -> Self {
        self.rows_speed = rows_speed;
        self.columns_speed = columns_speed;
        self
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    fn symbol(&self) -> char {
        if self.columns_speed != 0.0 {
            '-'
        } else {
            '|'
        }
    }
}

impl Task for Shot {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn step(&mut self, world: &mut World) -> Step {
        if let Some((row, column)) = self.drawn.take() {
            world.canvas.draw_char(row, column, ' ', Style::Normal);
        }

        self.row += self.rows_speed;
        self.column += self.columns_speed;

        // Hits count even on the border rows, where the shot is never drawn.
        if let Some(hit) = world.obstacles.first_hit(&Rect::point(self.row, self.column)) {
            world.obstacles.strike(hit);
            debug!(row = self.row, column = self.column, ?hit, "shot hit an obstacle");
            let frames = world.assets.explosion.clone();
            world.spawn(Explosion::new(frames, self.row, self.column));
            return Step::Done;
        }

        let (rows, columns) = world.canvas.dimensions();
        let (max_row, max_column) = (rows as f64 - 1.0, columns as f64 - 1.0);
        let inside = 0.0 < self.row && self.row < max_row && 0.0 < self.column && self.column < max_column;
        if !inside {
            return Step::Done;
        }

        let (row, column) = (self.row.round() as i32, self.column.round() as i32);
        world.canvas.draw_char(row, column, self.symbol(), Style::Normal);
        self.drawn = Some((row, column));
        Step::Continue
    }
}
