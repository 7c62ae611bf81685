use space_garbage::obstacles::*;
use space_garbage::world::TaskId;

fn obstacle(row: i32, column: i32, rows: u16, columns: u16) -> Obstacle {
    Obstacle {
        rect: Rect::new(row, column, rows, columns),
        owner: TaskId(7),
    }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn overlap_requires_both_axes() {
    let a = Rect::new(5, 5, 3, 4); // rows 5..8, columns 5..9
    assert!(a.overlaps(&Rect::new(7, 8, 1, 1)));
    assert!(!a.overlaps(&Rect::new(8, 8, 1, 1)));
    assert!(!a.overlaps(&Rect::new(7, 9, 1, 1)));
    assert!(a.overlaps(&Rect::new(0, 0, 10, 10)));
}

#[test]
fn overlap_is_symmetric() {
    let a = Rect::new(0, 0, 4, 4);
    let b = Rect::new(3, 3, 4, 4);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn empty_rect_never_overlaps() {
    assert!(!Rect::new(5, 5, 0, 3).overlaps(&Rect::new(5, 5, 1, 1)));
}

#[test]
fn point_and_at_round_positions() {
    assert_eq!(Rect::point(4.6, 2.4), Rect::new(5, 2, 1, 1));
    assert_eq!(Rect::at(1.5, 0.2, (2, 3)), Rect::new(2, 0, 2, 3));
}

// ── ObstacleRegistry ──────────────────────────────────────────────────────────

#[test]
fn register_and_check() {
    let mut registry = ObstacleRegistry::new();
    let a = registry.register(obstacle(0, 0, 2, 2));
    let b = registry.register(obstacle(10, 10, 2, 2));

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.check(&Rect::point(1.0, 1.0)), vec![a]);
    assert_eq!(registry.first_hit(&Rect::point(11.0, 10.0)), Some(b));
    assert_eq!(registry.first_hit(&Rect::point(5.0, 5.0)), None);
}

#[test]
fn check_reports_every_overlap() {
    let mut registry = ObstacleRegistry::new();
    let a = registry.register(obstacle(0, 0, 5, 5));
    let b = registry.register(obstacle(2, 2, 5, 5));
    let hits = registry.check(&Rect::point(3.0, 3.0));
    assert_eq!(hits.len(), 2);
    assert!(hits.contains(&a) && hits.contains(&b));
}

#[test]
fn deregister_is_idempotent() {
    let mut registry = ObstacleRegistry::new();
    let id = registry.register(obstacle(0, 0, 1, 1));
    assert!(registry.deregister(id).is_some());
    assert!(registry.deregister(id).is_none());
    assert!(registry.is_empty());
    assert!(registry.get(id).is_none());
}

#[test]
fn stale_id_does_not_touch_reused_slot() {
    let mut registry = ObstacleRegistry::new();
    let old = registry.register(obstacle(0, 0, 1, 1));
    registry.deregister(old);
    let new = registry.register(obstacle(3, 3, 1, 1));

    assert_ne!(old, new);
    assert!(!registry.update(old, Rect::new(9, 9, 1, 1)));
    assert!(registry.deregister(old).is_none());
    assert_eq!(registry.get(new).map(|o| o.rect), Some(Rect::new(3, 3, 1, 1)));
}

#[test]
fn update_moves_obstacle() {
    let mut registry = ObstacleRegistry::new();
    let id = registry.register(obstacle(0, 0, 2, 2));
    assert!(registry.update(id, Rect::new(6, 0, 2, 2)));
    assert!(registry.first_hit(&Rect::point(0.0, 0.0)).is_none());
    assert_eq!(registry.first_hit(&Rect::point(7.0, 1.0)), Some(id));
}

#[test]
fn struck_obstacle_leaves_checks_until_consumed() {
    let mut registry = ObstacleRegistry::new();
    let id = registry.register(obstacle(0, 0, 2, 2));

    assert!(registry.strike(id));
    assert!(!registry.strike(id), "second strike is rejected");
    assert!(!registry.is_active(id));
    assert!(registry.first_hit(&Rect::point(0.0, 0.0)).is_none());
    assert_eq!(registry.len(), 0);
    assert!(registry.get(id).is_some(), "owner has not consumed the hit yet");

    assert!(registry.take_struck(id));
    assert!(registry.get(id).is_none());
    assert!(!registry.take_struck(id));
}

#[test]
fn take_struck_ignores_unstruck_obstacles() {
    let mut registry = ObstacleRegistry::new();
    let id = registry.register(obstacle(0, 0, 1, 1));
    assert!(!registry.take_struck(id));
    assert!(registry.is_active(id));
}

#[test]
fn obstacle_keeps_owner() {
    let mut registry = ObstacleRegistry::new();
    let id = registry.register(obstacle(0, 0, 1, 1));
    assert_eq!(registry.get(id).map(|o| o.owner), Some(TaskId(7)));
}
