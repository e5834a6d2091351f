mod fsm;
pub mod request;
pub mod simulation;


pub use request::Request;
pub use simulation::Simulation;
