pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{Result, SimError};

pub use simulation::states::{Body, BodyView, NVec2, Tint, Viewport};
pub use simulation::params::Parameters;
pub use simulation::store::BodyStore;
pub use simulation::forces::{Acceleration, SoftenedGravity, VisibleGravity};
pub use simulation::integrator::euler_integrator;
pub use simulation::scenario::Scene;

pub use configuration::config::{GravityModel, ParametersConfig, ScenarioConfig, ViewportConfig, load_scenario};

pub use visualization::viewer2d::run_2d;

pub use benchmark::benchmark::bench_step;
