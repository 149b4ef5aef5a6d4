//! Delta-function auxiliary sampler.

use crate::parameter::ParamSpec;
use crate::rng_util;
use crate::sampler::{AuxiliarySampler, SamplerCore};

const PARAMETERS: &[ParamSpec] = &[
    ParamSpec::new("xp", 0.0),
    ParamSpec::new("sigma", 1.0).vmin(0.0),
];

/// A sampler whose latent value is a single fixed point.
///
/// Every object gets the true value `xp`; when observed, measurement noise
/// of scale `sigma` is added. Useful for quantities that are physically
/// constant across the population but still measured imperfectly.
///
/// # Parameters
///
/// | Name | Default | Bounds |
/// |------|---------|--------|
/// | `xp` | 0 | — |
/// | `sigma` | 1 | `>= 0` |
///
/// # Examples
///
/// ```
/// use popsynth::sampler::delta::DeltaAuxSampler;
/// use popsynth::sampler::AuxiliarySampler;
///
/// let mut sampler = DeltaAuxSampler::new("line_width", true);
/// sampler.core_mut().parameters_mut().set("xp", 2.5).unwrap();
/// sampler.draw(100);
/// assert!(sampler.core().true_values().iter().all(|&v| v == 2.5));
/// ```
pub struct DeltaAuxSampler {
    core: SamplerCore,
}

impl DeltaAuxSampler {
    /// Creates a delta sampler with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>, observed: bool) -> Self {
        Self {
            core: SamplerCore::new(name, PARAMETERS, observed, false, false),
        }
    }
}

impl AuxiliarySampler for DeltaAuxSampler {
    fn core(&self) -> &SamplerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SamplerCore {
        &mut self.core
    }

    fn true_sampler(&mut self, size: usize) {
        let xp = self.core.parameters().value("xp");
        self.core.set_true_values(vec![xp; size]);
    }

    fn observation_sampler(&mut self, size: usize) {
        let sigma = self.core.parameters().value("sigma");
        let truth = self.core.true_values().to_vec();

        let values = (0..size)
            .map(|i| rng_util::normal(self.core.rng_mut(), truth[i], sigma))
            .collect();

        self.core.set_obs_values(values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn true_values_are_the_fixed_point() {
        let mut s = DeltaAuxSampler::new("delta", false);
        s.core_mut().parameters_mut().set("xp", 7.0).unwrap();
        s.draw(25);
        assert_eq!(s.core().true_values(), &[7.0; 25]);
        // Unobserved: passthrough.
        assert_eq!(s.core().obs_values(), &[7.0; 25]);
    }

    #[test]
    fn observed_values_scatter_around_the_fixed_point() {
        let mut s = DeltaAuxSampler::new("delta", true);
        s.set_seed(99);
        s.core_mut().parameters_mut().set("xp", 7.0).unwrap();
        s.draw(2000);

        let obs = s.core().obs_values();
        assert_eq!(obs.len(), 2000);
        assert!(obs.iter().any(|&v| v != 7.0));

        #[allow(clippy::cast_precision_loss)]
        let mean = obs.iter().sum::<f64>() / obs.len() as f64;
        assert!((mean - 7.0).abs() < 0.2, "mean was {mean}");
    }

    #[test]
    fn sigma_cannot_go_negative() {
        let mut s = DeltaAuxSampler::new("delta", true);
        assert!(s.core_mut().parameters_mut().set("sigma", -0.5).is_err());
        assert_eq!(s.core().parameters().value("sigma"), 1.0);
    }
}
