#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]

//! Synthetic survey population synthesis: composable auxiliary samplers
//! that draw latent ("true") quantities per object, apply measurement
//! noise to produce observed quantities, and compute selection masks —
//! with samplers depending on other samplers through an owned dependency
//! graph that is resolved by a recursive, depth-first draw.
//!
//! # Getting Started
//!
//! ```
//! use popsynth::prelude::*;
//!
//! let mut width = NormalAuxSampler::new("line_width", true);
//! width.set_seed(42);
//! width.core_mut().parameters_mut().set("mu", 2.0)?;
//!
//! width.draw(100);
//!
//! assert_eq!(width.core().true_values().len(), 100);
//! assert_eq!(width.core().obs_values().len(), 100);
//! assert!(width.core().selection().iter().all(|&s| s));
//! # Ok::<(), popsynth::Error>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`AuxiliarySampler`](sampler::AuxiliarySampler) | The sampler contract: a required `true_sampler`, optional observation and selection models, and the provided recursive draw protocol. |
//! | [`SamplerCore`](sampler::SamplerCore) | The state every sampler embeds: drawn arrays, secondaries, flags, parameters, RNG. |
//! | [`ParamSpec`](parameter::ParamSpec) / [`ParameterStore`](parameter::ParameterStore) | Declared, bounded scalar parameters with per-instance storage and validated assignment. |
//! | [`DerivedLumSampler`](sampler::DerivedLumSampler) | A never-observed variant that derives a per-object luminosity after the draw. |
//! | [`SamplerProperties`](sampler::SamplerProperties) | Flat child-before-parent export of every sampler's drawn arrays. |
//! | [`DependencyGraph`](graph::DependencyGraph) | Node/edge export of the sampler wiring, renderable as Graphviz DOT. |
//! | [`SpatialDistribution`](distribution::SpatialDistribution) | The surface this crate needs from the orchestrator's spatial distribution. |
//!
//! # Drawing a dependency graph
//!
//! A sampler that reads another sampler's true values attaches it as a
//! *secondary* before drawing. Secondaries are drawn first, depth-first,
//! so dependencies are always populated when a parent's `true_sampler`
//! runs:
//!
//! ```
//! use popsynth::prelude::*;
//!
//! let mut parent = NormalAuxSampler::new("parent", false);
//! parent.set_secondary_sampler(Box::new(NormalAuxSampler::new("child", false)));
//! parent.set_seed(7);
//! parent.draw(50);
//!
//! let child = parent.core().secondary("child").unwrap();
//! assert_eq!(child.core().true_values().len(), 50);
//! ```
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on the export types ([`SamplerProperties`](sampler::SamplerProperties), [`DependencyGraph`](graph::DependencyGraph)) | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) as samplers draw and attach | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod distribution;
mod error;
pub mod graph;
pub mod parameter;
mod rng_util;
pub mod sampler;

pub use error::{Error, Result};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use popsynth::prelude::*;
/// ```
pub mod prelude {
    pub use crate::distribution::{
        ConstantSphericalDistribution, SpatialDistribution, ZPowerSphericalDistribution,
    };
    pub use crate::error::{Error, Result};
    pub use crate::graph::DependencyGraph;
    pub use crate::parameter::{ParamSpec, ParameterStore};
    pub use crate::sampler::delta::DeltaAuxSampler;
    pub use crate::sampler::normal::NormalAuxSampler;
    pub use crate::sampler::{
        AuxiliarySampler, DerivedLumSampler, PropertyRecord, SamplerCore, SamplerProperties,
    };
}
