use std::rc::Rc;

use crate::compute::centered;
use crate::frames::Frame;
use crate::scheduler::{Step, Task};
use crate::world::World;

/// The final banner.  Redrawn every tick and never finishes.
pub struct GameOver {
    frame: Rc<Frame>,
    row: f64,
    column: f64,
}

impl GameOver {
    pub const NAME: &'static str = "game_over";

    pub fn new(frame: Rc<Frame>, (rows, columns): (u16, u16)) -> Self {
        let (frame_rows, frame_columns) = frame.size();
        GameOver {
            row: centered(rows, frame_rows),
            column: centered(columns, frame_columns),
            frame,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }
}

impl Task for GameOver {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn step(&mut self, world: &mut World) -> Step {
        world.canvas.draw_frame(self.row, self.column, &self.frame, false);
        Step::Continue
    }
}
