/// Task bodies driven by the scheduler, one tick per `step`.

mod explosion;
mod fire;
mod gameover;
mod garbage;
mod scenario_clock;
mod spaceship;
mod star;

pub use explosion::Explosion;
pub use fire::Shot;
pub use gameover::GameOver;
pub use garbage::{FlyingGarbage, GarbageSpawner};
pub use scenario_clock::ScenarioClock;
pub use spaceship::{ShipState, Spaceship};
pub use star::Star;
