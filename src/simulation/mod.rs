pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod energy;
pub mod collision;
pub mod log;
pub mod engine;
pub mod scenario;
