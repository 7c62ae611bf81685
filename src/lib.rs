pub mod canvas;
pub mod compute;
pub mod config;
pub mod frames;
pub mod obstacles;
pub mod scenario;
pub mod scheduler;
pub mod session;
pub mod tasks;
pub mod world;
