use crate::compute::blink_phase_at;
use crate::scheduler::{Step, Task};
use crate::world::World;

/// A background star cycling dim → normal → bold → normal.  Only redraws
/// when the phase changes.
pub struct Star {
    row: i32,
    column: i32,
    symbol: char,
    clock: u64,
    phase: Option<usize>,
}

impl Star {
    pub const NAME: &'static str = "star";

    /// `offset` shifts the star into its cycle so stars don't blink in step.
    pub fn new(row: i32, column: i32, symbol: char, offset: u64) -> Self {
        Star { row, column, symbol, clock: offset, phase: None }
    }
}

impl Task for Star {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn step(&mut self, world: &mut World) -> Step {
        let (phase, style) = blink_phase_at(self.clock);
        if self.phase != Some(phase) {
            world.canvas.draw_char(self.row, self.column, self.symbol, style);
            self.phase = Some(phase);
        }
        self.clock += 1;
        Step::Continue
    }
}
