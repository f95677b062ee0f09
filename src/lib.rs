pub mod arena;
pub mod config;
pub mod engine;
pub mod entity;
pub mod error;
pub mod geometry;
pub mod health;
pub mod population;
pub mod rng;
pub mod scenario;
pub mod telemetry;

pub use config::{PopulationParams, SimulationConfig};
pub use engine::{Engine, RunOutcome, TickSummary};
pub use error::PopulationError;
pub use population::{Census, Population};
pub use scenario::Scenario;
