use tracing::info;

use crate::compute::ticks;
use crate::config::{BORDER_WIDTH, YEAR_DURATION};
use crate::scenario::banner_for;
use crate::scheduler::{Step, Task};
use crate::world::World;

/// Shows the current year with its caption, then moves the year on.
/// The only task that writes `World::year`.
pub struct ScenarioClock {
    hold: u64,
    remaining: u64,
    banner: Option<String>,
}

impl ScenarioClock {
    pub const NAME: &'static str = "scenario";

    pub fn new() -> Self {
        Self::with_hold(ticks(YEAR_DURATION))
    }

    /// A clock that spends `hold` ticks on each year.
    pub fn with_hold(hold: u64) -> Self {
        ScenarioClock { hold: hold.max(1), remaining: 0, banner: None }
    }

    pub fn hold(&self) -> u64 {
        self.hold
    }

    fn origin() -> (f64, f64) {
        (BORDER_WIDTH as f64, BORDER_WIDTH as f64 + 1.0)
    }
}

impl Default for ScenarioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Task for ScenarioClock {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn step(&mut self, world: &mut World) -> Step {
        let (row, column) = Self::origin();
        let banner = match self.banner.take() {
            Some(banner) => banner,
            None => {
                self.remaining = self.hold;
                banner_for(world.year)
            }
        };
        world.canvas.draw_text(row, column, &banner, false);

        self.remaining -= 1;
        if self.remaining == 0 {
            world.canvas.draw_text(row, column, &banner, true);
            world.year += 1;
            info!(year = world.year, "year advanced");
        } else {
            self.banner = Some(banner);
        }
        Step::Continue
    }
}
