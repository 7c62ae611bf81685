use std::rc::Rc;

use crate::frames::Frame;
use crate::scheduler::{Step, Task};
use crate::world::World;

/// Plays each frame for one tick, blanks it for one tick, then finishes.
pub struct Explosion {
    frames: Vec<Rc<Frame>>,
    row: f64,
    column: f64,
    phase: usize,
}

impl Explosion {
    pub const NAME: &'static str = "explosion";

    /// An explosion centred on the given point.
    pub fn new(frames: Vec<Rc<Frame>>, center_row: f64, center_column: f64) -> Self {
        let (rows, columns) = frames.first().map(|f| f.size()).unwrap_or((0, 0));
        Explosion {
            frames,
            row: center_row - rows as f64 / 2.0,
            column: center_column - columns as f64 / 2.0,
            phase: 0,
        }
    }

    /// Top-left corner of the animation.
    pub fn corner(&self) -> (f64, f64) {
        (self.row, self.column)
    }
}

impl Task for Explosion {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn step(&mut self, world: &mut World) -> Step {
        let Some(frame) = self.frames.get(self.phase / 2) else {
            return Step::Done;
        };
        if self.phase == 0 {
            world.canvas.beep();
        }
        let erase = self.phase % 2 == 1;
        world.canvas.draw_frame(self.row, self.column, frame, erase);
        self.phase += 1;
        Step::Continue
    }
}
