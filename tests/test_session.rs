use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use space_garbage::config::{START_YEAR, STARS_AMOUNT};
use space_garbage::frames::Assets;
use space_garbage::session::new_session;
use space_garbage::tasks::*;

fn assets() -> Assets {
    Assets::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("animation_frames"))
        .expect("bundled frames load")
}

#[test]
fn session_seeds_all_tasks() {
    let (scheduler, world) =
        new_session(40, 120, assets(), StdRng::seed_from_u64(3)).expect("session starts");
    assert_eq!(scheduler.count(Star::NAME), STARS_AMOUNT);
    assert_eq!(scheduler.count(Spaceship::NAME), 1);
    assert_eq!(scheduler.count(GarbageSpawner::NAME), 1);
    assert_eq!(scheduler.count(ScenarioClock::NAME), 1);
    assert_eq!(world.year, START_YEAR);
    assert_eq!(world.canvas.dimensions(), (40, 120));
}

#[test]
fn tiny_terminal_is_rejected() {
    let err = new_session(5, 10, assets(), StdRng::seed_from_u64(3)).err().expect("too small");
    assert!(err.to_string().contains("10x5"));
}

#[test]
fn session_runs_without_input() {
    let (mut scheduler, mut world) =
        new_session(40, 120, assets(), StdRng::seed_from_u64(3)).expect("session starts");
    for _ in 0..200 {
        scheduler.pass(&mut world);
    }
    assert_eq!(world.tick, 200);
    assert!(world.year > START_YEAR);
    // Static tasks never finish.
    assert_eq!(scheduler.count(Star::NAME), STARS_AMOUNT);
    assert_eq!(scheduler.count(ScenarioClock::NAME), 1);
    assert_eq!(scheduler.count(GarbageSpawner::NAME), 1);
}

#[test]
fn same_seed_same_session() {
    let run = |seed| {
        let (mut scheduler, mut world) =
            new_session(40, 120, assets(), StdRng::seed_from_u64(seed)).expect("session starts");
        for _ in 0..300 {
            scheduler.pass(&mut world);
        }
        world.canvas.cells().to_vec()
    };
    assert_eq!(run(11), run(11));
}
