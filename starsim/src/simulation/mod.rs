pub mod states;
pub mod params;
pub mod store;
pub mod forces;
pub mod integrator;
pub mod scenario;
