//! Spatial distribution collaborator interface.
//!
//! The population orchestrator, not this crate, owns the spatial and
//! luminosity distributions; the sampler core needs only the surface below
//! (a name for graph wiring, a differential volume, a rate density, and the
//! luminosity-to-flux transform). The spherical implementations here are the
//! standard homogeneous and redshift-power-law cases.

use core::f64::consts::PI;

use crate::parameter::{ParamSpec, ParameterStore};

/// The interface a spatial distribution exposes to the sampler core.
pub trait SpatialDistribution {
    /// The distribution name, used when wiring distance edges into an
    /// exported dependency graph.
    fn name(&self) -> &str;

    /// The differential comoving volume at radius `r`.
    fn differential_volume(&self, r: f64) -> f64;

    /// The object rate density at the given distance.
    #[allow(non_snake_case)]
    fn dNdV(&self, distance: f64) -> f64;

    /// Transforms a luminosity at radius `r` into an observed flux.
    fn transform(&self, luminosity: f64, r: f64) -> f64;
}

const CONSTANT_PARAMETERS: &[ParamSpec] = &[
    ParamSpec::new("Lambda", 1.0).vmin(0.0),
    ParamSpec::new("r_max", 10.0).vmin(0.0),
];

/// A homogeneous spherical distribution with constant rate density `Lambda`.
pub struct ConstantSphericalDistribution {
    name: String,
    parameters: ParameterStore,
}

impl ConstantSphericalDistribution {
    /// Creates a homogeneous spherical distribution.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: ParameterStore::new(CONSTANT_PARAMETERS),
        }
    }

    /// The distribution parameters (`Lambda`, `r_max`).
    #[must_use]
    pub fn parameters(&self) -> &ParameterStore {
        &self.parameters
    }

    /// Mutable access to the distribution parameters.
    pub fn parameters_mut(&mut self) -> &mut ParameterStore {
        &mut self.parameters
    }
}

impl SpatialDistribution for ConstantSphericalDistribution {
    fn name(&self) -> &str {
        &self.name
    }

    fn differential_volume(&self, r: f64) -> f64 {
        4.0 * PI * r * r
    }

    #[allow(non_snake_case)]
    fn dNdV(&self, _distance: f64) -> f64 {
        self.parameters.value("Lambda")
    }

    fn transform(&self, luminosity: f64, r: f64) -> f64 {
        luminosity / (4.0 * PI * (r + 1.0) * (r + 1.0))
    }
}

const Z_POWER_PARAMETERS: &[ParamSpec] = &[
    ParamSpec::new("Lambda", 1.0).vmin(0.0),
    ParamSpec::new("delta", 1.0),
    ParamSpec::new("r_max", 10.0).vmin(0.0),
];

/// A spherical distribution whose rate density scales as
/// `Lambda * (1 + z)^delta`.
pub struct ZPowerSphericalDistribution {
    name: String,
    parameters: ParameterStore,
}

impl ZPowerSphericalDistribution {
    /// Creates a redshift-power-law spherical distribution.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: ParameterStore::new(Z_POWER_PARAMETERS),
        }
    }

    /// The distribution parameters (`Lambda`, `delta`, `r_max`).
    #[must_use]
    pub fn parameters(&self) -> &ParameterStore {
        &self.parameters
    }

    /// Mutable access to the distribution parameters.
    pub fn parameters_mut(&mut self) -> &mut ParameterStore {
        &mut self.parameters
    }
}

impl SpatialDistribution for ZPowerSphericalDistribution {
    fn name(&self) -> &str {
        &self.name
    }

    fn differential_volume(&self, r: f64) -> f64 {
        4.0 * PI * r * r
    }

    #[allow(non_snake_case)]
    fn dNdV(&self, distance: f64) -> f64 {
        self.parameters.value("Lambda") * (distance + 1.0).powf(self.parameters.value("delta"))
    }

    fn transform(&self, luminosity: f64, r: f64) -> f64 {
        luminosity / (4.0 * PI * (r + 1.0) * (r + 1.0))
    }
}
