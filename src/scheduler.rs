/// Cooperative round-robin scheduler.
///
/// A task is a state machine whose `step` performs exactly one tick of
/// work and reports whether it wants to run again.  One pass steps every
/// live task once, in insertion order, then appends whatever was spawned
/// during the pass.

use std::ops::ControlFlow;
use std::thread;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::KeyCode;
use tracing::{info, trace};

use crate::canvas::Canvas;
use crate::config::TIC_TIMEOUT;
use crate::world::World;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Done,
}

pub trait Task {
    fn name(&self) -> &'static str;

    /// Advance by one tick.
    fn step(&mut self, world: &mut World) -> Step;
}

/// Where the canvas is shown and where key presses come from.
pub trait Frontend {
    /// Keys pressed since the last poll, or `Break` when the user
    /// interrupted the session.
    fn poll_keys(&mut self) -> Result<ControlFlow<(), Vec<KeyCode>>>;

    fn refresh(&mut self, canvas: &mut Canvas) -> Result<()>;
}

#[derive(Default)]
pub struct Scheduler {
    tasks: Vec<Box<dyn Task>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, task: impl Task + 'static) {
        self.tasks.push(Box::new(task));
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Live tasks with the given name.
    pub fn count(&self, name: &str) -> usize {
        self.tasks.iter().filter(|t| t.name() == name).count()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tasks.iter().map(|t| t.name()).collect()
    }

    /// Step every live task once.  Finished tasks are dropped as soon as
    /// they report `Done`; tasks spawned during the pass join at the end.
    pub fn pass(&mut self, world: &mut World) {
        self.tasks.retain_mut(|task| match task.step(world) {
            Step::Continue => true,
            Step::Done => {
                trace!(task = task.name(), tick = world.tick, "task finished");
                false
            }
        });
        self.tasks.extend(world.take_spawned());
        world.tick += 1;
    }

    /// Repaint, feed input, pass, sleep out the rest of the tick.  Returns
    /// only when the frontend reports an interrupt or fails.
    pub fn run<F: Frontend>(&mut self, world: &mut World, frontend: &mut F) -> Result<()> {
        loop {
            let tick_start = Instant::now();

            frontend.refresh(&mut world.canvas)?;
            match frontend.poll_keys()? {
                ControlFlow::Continue(keys) => world.canvas.push_keys(keys),
                ControlFlow::Break(()) => {
                    info!(tick = world.tick, year = world.year, "session interrupted");
                    return Ok(());
                }
            }

            self.pass(world);

            let elapsed = tick_start.elapsed();
            if elapsed < TIC_TIMEOUT {
                thread::sleep(TIC_TIMEOUT - elapsed);
            }
        }
    }
}
