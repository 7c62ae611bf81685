/// Session state shared by every task.
///
/// The scheduler hands `&mut World` to one task at a time, so tasks never
/// observe each other mid-step.  New tasks go into a spawn queue that the
/// scheduler drains after the pass; a task never sees a sibling it spawned
/// in the same pass.

use std::fmt;
use std::rc::Rc;

use rand::rngs::StdRng;

use crate::canvas::Canvas;
use crate::config::START_YEAR;
use crate::frames::Assets;
use crate::obstacles::ObstacleRegistry;
use crate::scheduler::Task;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task#{}", self.0)
    }
}

pub struct World {
    pub canvas: Canvas,
    pub obstacles: ObstacleRegistry,
    /// Completed scheduler passes.
    pub tick: u64,
    pub year: u32,
    pub assets: Rc<Assets>,
    pub rng: StdRng,
    spawned: Vec<Box<dyn Task>>,
    next_task_id: u64,
}

impl World {
    pub fn new(canvas: Canvas, assets: Rc<Assets>, rng: StdRng) -> Self {
        World {
            canvas,
            obstacles: ObstacleRegistry::new(),
            tick: 0,
            year: START_YEAR,
            assets,
            rng,
            spawned: Vec::new(),
            next_task_id: 0,
        }
    }

    /// Queue a task; it runs from the next pass on.
    pub fn spawn(&mut self, task: impl Task + 'static) {
        self.spawned.push(Box::new(task));
    }

    pub fn take_spawned(&mut self) -> Vec<Box<dyn Task>> {
        std::mem::take(&mut self.spawned)
    }

    pub fn pending_spawns(&self) -> usize {
        self.spawned.len()
    }

    /// Fresh id for a task that needs to tag what it owns.
    pub fn allocate_task_id(&mut self) -> TaskId {
        let id = TaskId(self.next_task_id);
        self.next_task_id += 1;
        id
    }
}
