/// Collision registry.
///
/// Obstacles live in a generational arena so a debris task can hold a
/// small `ObstacleId` instead of a reference.  A shot that hits an obstacle
/// `strike`s it: the obstacle stops taking part in collision checks at once,
/// and its owner consumes the event with `take_struck` on its next step.
///
/// Iteration order is arena slot order.  Slots are reused after removal, so
/// when several obstacles overlap one probe the one reported first is not
/// necessarily the oldest.

use crate::world::TaskId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub row: i32,
    pub column: i32,
    pub rows: u16,
    pub columns: u16,
}

impl Rect {
    pub fn new(row: i32, column: i32, rows: u16, columns: u16) -> Self {
        Rect { row, column, rows, columns }
    }

    /// A 1×1 probe at the rounded position.
    pub fn point(row: f64, column: f64) -> Self {
        Rect::new(row.round() as i32, column.round() as i32, 1, 1)
    }

    /// Rectangle of `size` anchored at the rounded position.
    pub fn at(row: f64, column: f64, size: (u16, u16)) -> Self {
        Rect::new(row.round() as i32, column.round() as i32, size.0, size.1)
    }

    /// True when both the row ranges and the column ranges overlap.
    /// Empty rectangles never overlap anything.
    pub fn overlaps(&self, other: &Rect) -> bool {
        fn ranges(a: i32, a_len: u16, b: i32, b_len: u16) -> bool {
            a_len > 0 && b_len > 0 && a < b + b_len as i32 && b < a + a_len as i32
        }
        ranges(self.row, self.rows, other.row, other.rows)
            && ranges(self.column, self.columns, other.column, other.columns)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Obstacle {
    pub rect: Rect,
    pub owner: TaskId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObstacleId {
    index: u32,
    generation: u32,
}

#[derive(Clone, Debug)]
struct Entry {
    obstacle: Obstacle,
    struck: bool,
}

#[derive(Clone, Debug, Default)]
struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

#[derive(Clone, Debug, Default)]
pub struct ObstacleRegistry {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, obstacle: Obstacle) -> ObstacleId {
        let entry = Some(Entry { obstacle, struck: false });
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.entry = entry;
                ObstacleId { index, generation: slot.generation }
            }
            None => {
                self.slots.push(Slot { generation: 0, entry });
                ObstacleId { index: self.slots.len() as u32 - 1, generation: 0 }
            }
        }
    }

    /// Remove an obstacle, struck or not.  Removing twice is a no-op.
    pub fn deregister(&mut self, id: ObstacleId) -> Option<Obstacle> {
        let slot = self.slot_mut(id)?;
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        Some(entry.obstacle)
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.entry(id).map(|e| &e.obstacle)
    }

    /// Move a live obstacle.  Returns false if the id is stale.
    pub fn update(&mut self, id: ObstacleId, rect: Rect) -> bool {
        match self.slot_mut(id).and_then(|s| s.entry.as_mut()) {
            Some(entry) => {
                entry.obstacle.rect = rect;
                true
            }
            None => false,
        }
    }

    /// Whether the obstacle still takes part in collision checks.
    pub fn is_active(&self, id: ObstacleId) -> bool {
        self.entry(id).is_some_and(|e| !e.struck)
    }

    /// Every active obstacle overlapping `probe`, in slot order.
    pub fn check(&self, probe: &Rect) -> Vec<ObstacleId> {
        self.active()
            .filter(|(_, obstacle)| obstacle.rect.overlaps(probe))
            .map(|(id, _)| id)
            .collect()
    }

    /// The first active obstacle overlapping `probe`, if any.
    pub fn first_hit(&self, probe: &Rect) -> Option<ObstacleId> {
        self.active()
            .find(|(_, obstacle)| obstacle.rect.overlaps(probe))
            .map(|(id, _)| id)
    }

    /// Flag an obstacle as hit.  Returns false if it was already struck
    /// or no longer exists.
    pub fn strike(&mut self, id: ObstacleId) -> bool {
        match self.slot_mut(id).and_then(|s| s.entry.as_mut()) {
            Some(entry) if !entry.struck => {
                entry.struck = true;
                true
            }
            _ => false,
        }
    }

    /// Consume a pending hit: if the obstacle was struck, remove it and
    /// return true.
    pub fn take_struck(&mut self, id: ObstacleId) -> bool {
        if self.entry(id).is_some_and(|e| e.struck) {
            self.deregister(id);
            true
        } else {
            false
        }
    }

    /// Number of active (not yet struck) obstacles.
    pub fn len(&self) -> usize {
        self.active().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Active obstacles in slot order.
    pub fn active(&self) -> impl Iterator<Item = (ObstacleId, &Obstacle)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.entry.as_ref().filter(|e| !e.struck).map(|e| {
                let id = ObstacleId { index: index as u32, generation: slot.generation };
                (id, &e.obstacle)
            })
        })
    }

    fn entry(&self, id: ObstacleId) -> Option<&Entry> {
        self.slots
            .get(id.index as usize)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.entry.as_ref())
    }

    fn slot_mut(&mut self, id: ObstacleId) -> Option<&mut Slot> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|s| s.generation == id.generation)
    }
}
