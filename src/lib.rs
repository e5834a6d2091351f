//! Discrete-time simulation of a single elevator serving floor-to-floor
//! requests.

/* Modules */
pub mod config;
pub mod elevator;
pub mod shared;


pub use elevator::{Request, Simulation};
pub use shared::{ConfigError, Direction, Policy, SimError, SimulationReport, TickTrace};
