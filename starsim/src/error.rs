//! Error types for the simulation kernel.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised by scene configuration, body construction and stepping.
///
/// All of them are raised eagerly (at configure / reset / body creation time)
/// so the per-step path only has to check `dt`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// Bad scene parameters (negative counts, non-positive bounds, ...).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A body that would break the integrator (non-positive mass, negative radius).
    #[error("invalid body state: {0}")]
    InvalidBodyState(String),

    /// Bad call argument, e.g. a negative time step or an empty viewport.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_category() {
        let e = SimError::InvalidConfiguration("particle_count must be >= 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid configuration"));
        assert!(msg.contains("particle_count"));

        let e = SimError::InvalidArgument("dt = -1".to_string());
        assert!(format!("{e}").starts_with("invalid argument"));
    }
}
