pub mod error;
pub mod macros;
pub mod structs;

pub use error::ConfigError;
pub use error::SimError;
pub use structs::Direction;
pub use structs::Policy;
pub use structs::SimulationReport;
pub use structs::TickTrace;
