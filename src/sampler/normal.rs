//! Gaussian auxiliary sampler.

use crate::parameter::ParamSpec;
use crate::rng_util;
use crate::sampler::{AuxiliarySampler, SamplerCore};

const PARAMETERS: &[ParamSpec] = &[
    ParamSpec::new("mu", 0.0),
    ParamSpec::new("tau", 1.0).vmin(0.0),
    ParamSpec::new("sigma", 1.0).vmin(0.0),
];

/// A sampler whose latent values are Gaussian.
///
/// True values are drawn from `N(mu, tau)`; when observed, independent
/// measurement noise of scale `sigma` is added on top.
///
/// # Parameters
///
/// | Name | Default | Bounds |
/// |------|---------|--------|
/// | `mu` | 0 | — |
/// | `tau` | 1 | `>= 0` |
/// | `sigma` | 1 | `>= 0` |
pub struct NormalAuxSampler {
    core: SamplerCore,
}

impl NormalAuxSampler {
    /// Creates a Gaussian sampler with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>, observed: bool) -> Self {
        Self {
            core: SamplerCore::new(name, PARAMETERS, observed, false, false),
        }
    }
}

impl AuxiliarySampler for NormalAuxSampler {
    fn core(&self) -> &SamplerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SamplerCore {
        &mut self.core
    }

    fn true_sampler(&mut self, size: usize) {
        let mu = self.core.parameters().value("mu");
        let tau = self.core.parameters().value("tau");

        let values = (0..size)
            .map(|_| rng_util::normal(self.core.rng_mut(), mu, tau))
            .collect();

        self.core.set_true_values(values);
    }

    fn observation_sampler(&mut self, size: usize) {
        let sigma = self.core.parameters().value("sigma");
        let truth = self.core.true_values().to_vec();

        let values = (0..size)
            .map(|i| truth[i] + rng_util::normal(self.core.rng_mut(), 0.0, sigma))
            .collect();

        self.core.set_obs_values(values);
    }
}
