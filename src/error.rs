#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a parameter is set below its declared minimum.
    #[error("cannot set '{name}' to {value}: below the declared minimum {vmin}")]
    ParameterBelowMinimum {
        /// The name of the parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// The declared lower bound.
        vmin: f64,
    },

    /// Returned when a parameter is set above its declared maximum.
    #[error("cannot set '{name}' to {value}: above the declared maximum {vmax}")]
    ParameterAboveMaximum {
        /// The name of the parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// The declared upper bound.
        vmax: f64,
    },

    /// Returned when setting a parameter the sampler never declared.
    #[error("unknown parameter '{name}'")]
    UnknownParameter {
        /// The undeclared parameter name.
        name: String,
    },

    /// Returned when an internal invariant is violated.
    #[error("internal error: {0}")]
    Internal(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
