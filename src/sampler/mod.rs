//! Auxiliary sampler trait and the recursive draw protocol.
//!
//! An auxiliary sampler produces a latent "true" value per object and,
//! optionally, a noisy "observed" value and a selection mask. Samplers can
//! depend on other samplers: a *secondary* sampler is attached to its parent
//! with [`AuxiliarySampler::set_secondary_sampler`] and is drawn recursively,
//! depth-first, before the parent's [`AuxiliarySampler::true_sampler`] runs.
//! Because secondaries are owned, the dependency graph is a tree by
//! construction and cannot contain cycles.
//!
//! Concrete samplers embed a [`SamplerCore`] and implement the trait:
//!
//! ```
//! use popsynth::parameter::ParamSpec;
//! use popsynth::sampler::{AuxiliarySampler, SamplerCore};
//!
//! const PARAMETERS: &[ParamSpec] = &[ParamSpec::new("level", 1.0)];
//!
//! struct LevelSampler {
//!     core: SamplerCore,
//! }
//!
//! impl AuxiliarySampler for LevelSampler {
//!     fn core(&self) -> &SamplerCore {
//!         &self.core
//!     }
//!
//!     fn core_mut(&mut self) -> &mut SamplerCore {
//!         &mut self.core
//!     }
//!
//!     fn true_sampler(&mut self, size: usize) {
//!         let level = self.core.parameters().value("level");
//!         self.core.set_true_values(vec![level; size]);
//!     }
//! }
//!
//! let mut sampler = LevelSampler {
//!     core: SamplerCore::new("level", PARAMETERS, false, false, false),
//! };
//! sampler.draw(10);
//! assert_eq!(sampler.core().true_values(), &[1.0; 10]);
//! ```

pub mod delta;
pub mod normal;

use crate::graph::DependencyGraph;
use crate::parameter::{ParamSpec, ParameterStore};

/// The per-sampler arrays exported by property aggregation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyRecord {
    /// The latent values drawn by `true_sampler`.
    pub true_values: Vec<f64>,
    /// The observed values (equal to the true values when unobserved).
    pub obs_values: Vec<f64>,
    /// The per-object selection mask.
    pub selection: Vec<bool>,
}

/// Accumulator for walking a sampler graph.
///
/// Records are keyed by sampler name and kept in insertion order, which for
/// [`AuxiliarySampler::get_secondary_properties`] is child-before-parent.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerProperties {
    records: Vec<(String, PropertyRecord)>,
}

impl SamplerProperties {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record under the given sampler name.
    ///
    /// # Panics
    ///
    /// Panics if a record of that name was already collected; a sampler
    /// graph never visits the same sampler twice.
    pub fn insert(&mut self, name: &str, record: PropertyRecord) {
        assert!(
            self.get(name).is_none(),
            "properties for '{name}' collected twice"
        );
        self.records.push((name.to_string(), record));
    }

    /// Returns the record for a sampler name, if collected.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyRecord> {
        self.records
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Returns the collected names in insertion order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Iterates the collected `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyRecord)> + '_ {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of collected records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The state shared by every auxiliary sampler.
///
/// Concrete samplers embed one of these and expose it through
/// [`AuxiliarySampler::core`] / [`AuxiliarySampler::core_mut`]; the draw
/// protocol, secondary attachment, and injection setters all operate on it.
pub struct SamplerCore {
    name: String,
    obs_name: String,
    is_observed: bool,
    uses_distance: bool,
    uses_luminosity: bool,
    true_values: Option<Vec<f64>>,
    obs_values: Option<Vec<f64>>,
    selection: Option<Vec<bool>>,
    secondaries: Vec<Box<dyn AuxiliarySampler>>,
    is_secondary: bool,
    is_sampled: bool,
    distance: Option<Vec<f64>>,
    luminosity: Option<Vec<f64>>,
    parameters: ParameterStore,
    rng: fastrand::Rng,
}

impl core::fmt::Debug for SamplerCore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SamplerCore")
            .field("name", &self.name)
            .field("observed", &self.is_observed)
            .field("is_secondary", &self.is_secondary)
            .field("is_sampled", &self.is_sampled)
            .field("uses_distance", &self.uses_distance)
            .field("uses_luminosity", &self.uses_luminosity)
            .field("n_secondaries", &self.secondaries.len())
            .field("parameters", &self.parameters)
            .finish()
    }
}

impl SamplerCore {
    /// Creates a sampler core.
    ///
    /// `observed` controls whether `observation_sampler` runs during draw;
    /// `uses_distance` / `uses_luminosity` declare that `true_sampler` reads
    /// the corresponding injected array.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        parameters: &'static [ParamSpec],
        observed: bool,
        uses_distance: bool,
        uses_luminosity: bool,
    ) -> Self {
        let name = name.into();
        Self {
            obs_name: format!("{name}_obs"),
            name,
            is_observed: observed,
            uses_distance,
            uses_luminosity,
            true_values: None,
            obs_values: None,
            selection: None,
            secondaries: Vec::new(),
            is_secondary: false,
            is_sampled: false,
            distance: None,
            luminosity: None,
            parameters: ParameterStore::new(parameters),
            rng: fastrand::Rng::new(),
        }
    }

    /// Creates a core for a sampler that never exposes an observation.
    ///
    /// The observed values become a copy of the true values on draw.
    #[must_use]
    pub fn non_observed(
        name: impl Into<String>,
        parameters: &'static [ParamSpec],
        uses_distance: bool,
        uses_luminosity: bool,
    ) -> Self {
        Self::new(name, parameters, false, uses_distance, uses_luminosity)
    }

    /// Creates a core for a derived-luminosity sampler.
    ///
    /// Derived-luminosity samplers are never observed directly; their
    /// luminosity is pulled through
    /// [`DerivedLumSampler::compute_luminosity`] after the draw.
    #[must_use]
    pub fn derived(
        name: impl Into<String>,
        parameters: &'static [ParamSpec],
        uses_distance: bool,
    ) -> Self {
        Self::new(name, parameters, false, uses_distance, false)
    }

    /// The sampler name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name of the observed quantity, `"<name>_obs"`.
    #[must_use]
    pub fn obs_name(&self) -> &str {
        &self.obs_name
    }

    /// Whether an observation model is applied during draw.
    #[must_use]
    pub fn observed(&self) -> bool {
        self.is_observed
    }

    /// Whether this sampler reads the injected distances.
    #[must_use]
    pub fn uses_distance(&self) -> bool {
        self.uses_distance
    }

    /// Whether this sampler reads the injected luminosities.
    #[must_use]
    pub fn uses_luminosity(&self) -> bool {
        self.uses_luminosity
    }

    /// Whether this sampler is attached as someone's secondary.
    #[must_use]
    pub fn is_secondary(&self) -> bool {
        self.is_secondary
    }

    /// Whether any secondary samplers are attached.
    #[must_use]
    pub fn has_secondary(&self) -> bool {
        !self.secondaries.is_empty()
    }

    /// Whether `draw` has completed on this sampler.
    #[must_use]
    pub fn is_sampled(&self) -> bool {
        self.is_sampled
    }

    /// The latent values drawn by `true_sampler`.
    ///
    /// # Panics
    ///
    /// Panics when called before `draw`.
    #[must_use]
    pub fn true_values(&self) -> &[f64] {
        self.true_values
            .as_deref()
            .unwrap_or_else(|| panic!("'{}' has no true values; call draw first", self.name))
    }

    /// The observed values.
    ///
    /// # Panics
    ///
    /// Panics when called before `draw`.
    #[must_use]
    pub fn obs_values(&self) -> &[f64] {
        self.obs_values
            .as_deref()
            .unwrap_or_else(|| panic!("'{}' has no observed values; call draw first", self.name))
    }

    /// The per-object selection mask.
    ///
    /// # Panics
    ///
    /// Panics when called before `draw`.
    #[must_use]
    pub fn selection(&self) -> &[bool] {
        self.selection
            .as_deref()
            .unwrap_or_else(|| panic!("'{}' has no selection; call draw first", self.name))
    }

    /// Stores the latent values. Called from `true_sampler`.
    pub fn set_true_values(&mut self, values: Vec<f64>) {
        self.true_values = Some(values);
    }

    /// Stores the observed values. Called from `observation_sampler`.
    pub fn set_obs_values(&mut self, values: Vec<f64>) {
        self.obs_values = Some(values);
    }

    /// Stores the selection mask. Called from `apply_selection` overrides.
    pub fn set_selection(&mut self, selection: Vec<bool>) {
        self.selection = Some(selection);
    }

    /// The sampler's declared parameters.
    #[must_use]
    pub fn parameters(&self) -> &ParameterStore {
        &self.parameters
    }

    /// Mutable access to the declared parameters.
    pub fn parameters_mut(&mut self) -> &mut ParameterStore {
        &mut self.parameters
    }

    /// A flat `{parameter: value}` snapshot for provenance.
    #[must_use]
    pub fn truth(&self) -> std::collections::BTreeMap<String, f64> {
        self.parameters.snapshot()
    }

    /// The injected distances.
    ///
    /// # Panics
    ///
    /// Panics when no distances were injected; a sampler that declares
    /// `uses_distance` must receive `set_distance` before `draw`.
    #[must_use]
    pub fn distance(&self) -> &[f64] {
        self.distance
            .as_deref()
            .unwrap_or_else(|| panic!("'{}' reads the distance but none was injected", self.name))
    }

    /// The injected luminosities.
    ///
    /// # Panics
    ///
    /// Panics when no luminosities were injected; a sampler that declares
    /// `uses_luminosity` must receive `set_luminosity` before `draw`.
    #[must_use]
    pub fn luminosity(&self) -> &[f64] {
        self.luminosity.as_deref().unwrap_or_else(|| {
            panic!("'{}' reads the luminosity but none was injected", self.name)
        })
    }

    /// The sampler's random number generator.
    pub fn rng_mut(&mut self) -> &mut fastrand::Rng {
        &mut self.rng
    }

    /// Looks up an attached secondary by name.
    #[must_use]
    pub fn secondary(&self, name: &str) -> Option<&dyn AuxiliarySampler> {
        self.secondaries
            .iter()
            .find(|s| s.core().name == name)
            .map(AsRef::as_ref)
    }

    /// Iterates the attached secondaries in attachment order.
    pub fn secondary_samplers(&self) -> impl Iterator<Item = &dyn AuxiliarySampler> + '_ {
        self.secondaries.iter().map(AsRef::as_ref)
    }
}

/// An auxiliary quantity sampler.
///
/// Implementors embed a [`SamplerCore`] and provide [`true_sampler`];
/// [`observation_sampler`] defaults to a passthrough of the true values and
/// [`apply_selection`] to an all-true mask. The draw protocol, attachment,
/// injection, and aggregation are provided methods and are not meant to be
/// overridden.
///
/// [`true_sampler`]: AuxiliarySampler::true_sampler
/// [`observation_sampler`]: AuxiliarySampler::observation_sampler
/// [`apply_selection`]: AuxiliarySampler::apply_selection
pub trait AuxiliarySampler {
    /// The embedded sampler state.
    fn core(&self) -> &SamplerCore;

    /// Mutable access to the embedded sampler state.
    fn core_mut(&mut self) -> &mut SamplerCore;

    /// Draws the latent values.
    ///
    /// Must store exactly `size` values via [`SamplerCore::set_true_values`].
    /// May read any attached secondary's true values and, when declared, the
    /// injected distance or luminosity arrays — the draw protocol guarantees
    /// those are populated before this runs.
    fn true_sampler(&mut self, size: usize);

    /// Draws the observed values. Defaults to a copy of the true values.
    ///
    /// Overrides must store exactly `size` values via
    /// [`SamplerCore::set_obs_values`], typically the true values plus
    /// measurement noise.
    fn observation_sampler(&mut self, size: usize) {
        let _ = size;
        let truth = self.core().true_values().to_vec();
        self.core_mut().set_obs_values(truth);
    }

    /// Computes the selection mask from the observed values.
    ///
    /// The default selects everything: an all-true mask the length of the
    /// observed values.
    fn apply_selection(&mut self) {
        let len = self.core().obs_values().len();
        self.core_mut().set_selection(vec![true; len]);
    }

    /// Draws this sampler and, recursively, every attached secondary.
    ///
    /// Secondaries are drawn depth-first in attachment order, so by the time
    /// [`true_sampler`](AuxiliarySampler::true_sampler) runs every dependency
    /// it reads is populated. The call is idempotent: once a sampler is
    /// drawn, further calls return immediately without resampling. Re-drawing
    /// requires an explicit [`reset`](AuxiliarySampler::reset).
    ///
    /// # Panics
    ///
    /// Panics on a structurally broken graph or a malformed implementation:
    /// an attached sampler not flagged secondary, or a `true_sampler` /
    /// `observation_sampler` that fails to populate exactly `size` values.
    fn draw(&mut self, size: usize) {
        if self.core().is_sampled {
            return;
        }

        trace_info!("sampling: {}", self.core().name);

        if self.core().has_secondary() {
            trace_debug!("{} draws its secondary quantities", self.core().name);
        }

        for sampler in &mut self.core_mut().secondaries {
            assert!(
                sampler.core().is_secondary,
                "'{}' was attached without the secondary flag; this is a wiring bug",
                sampler.core().name
            );
            sampler.draw(size);
        }

        // Every dependency is populated by now.
        self.true_sampler(size);

        if self.core().is_observed {
            self.observation_sampler(size);
        } else {
            let truth = self.core().true_values.clone().unwrap_or_default();
            self.core_mut().obs_values = Some(truth);
        }

        let core = self.core();
        assert!(
            core.true_values.as_ref().is_some_and(|v| v.len() == size),
            "'{}' has a bad true_sampler: expected {size} true values",
            core.name
        );
        assert!(
            core.obs_values.as_ref().is_some_and(|v| v.len() == size),
            "'{}' has a bad observation_sampler: expected {size} observed values",
            core.name
        );

        self.apply_selection();

        self.core_mut().is_sampled = true;
    }

    /// Clears the drawn arrays and the sampled latch, recursively.
    ///
    /// After a reset the whole subtree can be drawn again. Attachment state
    /// and parameter values are untouched.
    fn reset(&mut self) {
        let core = self.core_mut();
        core.true_values = None;
        core.obs_values = None;
        core.selection = None;
        core.is_sampled = false;
        for sampler in &mut core.secondaries {
            sampler.reset();
        }
    }

    /// Seeds this sampler's RNG and, with derived seeds, every secondary's.
    ///
    /// Secondaries receive seeds derived from the parent seed and their
    /// attachment index, so a single graph-wide seed reproduces the whole
    /// draw while keeping the streams independent.
    #[allow(clippy::cast_possible_truncation)]
    fn set_seed(&mut self, seed: u64) {
        self.core_mut().rng = fastrand::Rng::with_seed(seed);
        for (i, sampler) in self.core_mut().secondaries.iter_mut().enumerate() {
            let child_seed = seed ^ (i as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
            sampler.set_seed(child_seed);
        }
    }

    /// Injects the per-object distances, forwarding recursively.
    ///
    /// Called by the population orchestrator once per draw cycle, before
    /// `draw`, when any sampler in the graph declares `uses_distance`.
    fn set_distance(&mut self, distance: &[f64]) {
        self.core_mut().distance = Some(distance.to_vec());
        for sampler in &mut self.core_mut().secondaries {
            sampler.set_distance(distance);
        }
    }

    /// Injects the per-object luminosities, forwarding recursively.
    fn set_luminosity(&mut self, luminosity: &[f64]) {
        self.core_mut().luminosity = Some(luminosity.to_vec());
        for sampler in &mut self.core_mut().secondaries {
            sampler.set_luminosity(luminosity);
        }
    }

    /// Flags this sampler as a secondary.
    ///
    /// [`set_secondary_sampler`](AuxiliarySampler::set_secondary_sampler)
    /// calls this on attachment; the flag is what the draw loop asserts on
    /// and what guards against attaching the same sampler twice.
    fn make_secondary(&mut self) {
        self.core_mut().is_secondary = true;
    }

    /// Attaches a sampler whose true values this sampler derives from.
    ///
    /// The attached sampler is flagged secondary and will be drawn, along
    /// with its own secondaries, before this sampler's `true_sampler` runs.
    /// Attachment order is draw order.
    ///
    /// # Panics
    ///
    /// Panics when the sampler is already flagged secondary (it belongs to
    /// another parent — attaching it twice would silently re-sample it) or
    /// when a secondary of the same name is already attached.
    fn set_secondary_sampler(&mut self, mut sampler: Box<dyn AuxiliarySampler>) {
        assert!(
            !sampler.core().is_secondary,
            "'{}' is already attached as a secondary elsewhere",
            sampler.core().name
        );
        assert!(
            self.core().secondary(sampler.core().name()).is_none(),
            "a secondary named '{}' is already attached to '{}'",
            sampler.core().name,
            self.core().name
        );

        trace_debug!(
            "attaching '{}' as a secondary of '{}'",
            sampler.core().name,
            self.core().name
        );

        sampler.make_secondary();
        self.core_mut().secondaries.push(sampler);
    }

    /// Collects every sampler's drawn arrays into a flat accumulator.
    ///
    /// Walks the secondary tree depth-first and inserts a
    /// [`PropertyRecord`] per sampler, children before parents. When a
    /// [`DependencyGraph`] is supplied, also registers the wiring: an edge
    /// from each secondary to its parent, an edge from a secondary's
    /// observed node to the secondary when it is observed, and — when a
    /// spatial distribution name is supplied — an edge from the spatial
    /// distribution to each secondary that reads the distance.
    ///
    /// Samplers that were never drawn contribute empty arrays.
    fn get_secondary_properties(
        &self,
        accumulator: &mut SamplerProperties,
        mut graph: Option<&mut DependencyGraph>,
        spatial_name: Option<&str>,
    ) {
        for sampler in &self.core().secondaries {
            let child = sampler.core();

            if let Some(g) = graph.as_deref_mut() {
                g.add_node(child.name(), false);
                g.add_edge(child.name(), self.core().name());

                if child.observed() {
                    g.add_node(child.obs_name(), true);
                    g.add_edge(child.obs_name(), child.name());
                }

                // Best-effort: the distance edge needs the collaborator's
                // name, which the orchestrator may not supply.
                if child.uses_distance() {
                    if let Some(spatial) = spatial_name {
                        g.add_edge(spatial, child.name());
                    }
                }
            }

            sampler.get_secondary_properties(accumulator, graph.as_deref_mut(), spatial_name);
        }

        let core = self.core();
        accumulator.insert(
            core.name(),
            PropertyRecord {
                true_values: core.true_values.clone().unwrap_or_default(),
                obs_values: core.obs_values.clone().unwrap_or_default(),
                selection: core.selection.clone().unwrap_or_default(),
            },
        );
    }
}

/// A sampler that derives a per-object luminosity instead of being observed.
///
/// Derived-luminosity samplers are constructed with
/// [`SamplerCore::derived`] (never observed); the population orchestrator
/// pulls [`compute_luminosity`](DerivedLumSampler::compute_luminosity) once
/// `draw` has completed. The luminosity is a second computed quantity, not
/// part of the draw protocol.
pub trait DerivedLumSampler: AuxiliarySampler {
    /// Derives one luminosity per drawn object.
    fn compute_luminosity(&self) -> Vec<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_PARAMS: &[ParamSpec] = &[];

    struct ConstSampler {
        core: SamplerCore,
        level: f64,
    }

    impl ConstSampler {
        fn new(name: &str, level: f64, observed: bool) -> Self {
            Self {
                core: SamplerCore::new(name, NO_PARAMS, observed, false, false),
                level,
            }
        }
    }

    impl AuxiliarySampler for ConstSampler {
        fn core(&self) -> &SamplerCore {
            &self.core
        }

        fn core_mut(&mut self) -> &mut SamplerCore {
            &mut self.core
        }

        fn true_sampler(&mut self, size: usize) {
            let level = self.level;
            self.core.set_true_values(vec![level; size]);
        }
    }

    #[test]
    fn draw_populates_all_arrays() {
        let mut s = ConstSampler::new("const", 3.0, false);
        s.draw(5);
        assert_eq!(s.core().true_values(), &[3.0; 5]);
        assert_eq!(s.core().obs_values(), &[3.0; 5]);
        assert_eq!(s.core().selection(), &[true; 5]);
        assert!(s.core().is_sampled());
    }

    #[test]
    fn obs_name_is_derived_from_name() {
        let s = ConstSampler::new("flux", 0.0, true);
        assert_eq!(s.core().name(), "flux");
        assert_eq!(s.core().obs_name(), "flux_obs");
    }

    #[test]
    fn reset_clears_and_allows_redraw() {
        let mut s = ConstSampler::new("const", 1.0, false);
        s.draw(4);
        s.reset();
        assert!(!s.core().is_sampled());
        s.draw(8);
        assert_eq!(s.core().true_values().len(), 8);
    }

    #[test]
    fn has_secondary_tracks_attachment() {
        let mut parent = ConstSampler::new("parent", 0.0, false);
        assert!(!parent.core().has_secondary());
        parent.set_secondary_sampler(Box::new(ConstSampler::new("child", 1.0, false)));
        assert!(parent.core().has_secondary());
        assert!(parent.core().secondary("child").is_some());
        assert!(parent.core().secondary("child").unwrap().core().is_secondary());
    }

    #[test]
    #[should_panic(expected = "already attached as a secondary")]
    fn reattaching_a_secondary_panics() {
        let mut child = ConstSampler::new("child", 1.0, false);
        child.make_secondary();
        let mut parent = ConstSampler::new("parent", 0.0, false);
        parent.set_secondary_sampler(Box::new(child));
    }

    #[test]
    #[should_panic(expected = "already attached to")]
    fn duplicate_secondary_name_panics() {
        let mut parent = ConstSampler::new("parent", 0.0, false);
        parent.set_secondary_sampler(Box::new(ConstSampler::new("child", 1.0, false)));
        parent.set_secondary_sampler(Box::new(ConstSampler::new("child", 2.0, false)));
    }

    struct ShortSampler {
        core: SamplerCore,
    }

    impl AuxiliarySampler for ShortSampler {
        fn core(&self) -> &SamplerCore {
            &self.core
        }

        fn core_mut(&mut self) -> &mut SamplerCore {
            &mut self.core
        }

        fn true_sampler(&mut self, size: usize) {
            // Deliberately one short.
            self.core.set_true_values(vec![0.0; size - 1]);
        }
    }

    #[test]
    #[should_panic(expected = "bad true_sampler")]
    fn short_true_sampler_panics() {
        let mut s = ShortSampler {
            core: SamplerCore::new("short", NO_PARAMS, false, false, false),
        };
        s.draw(3);
    }

    #[test]
    #[should_panic(expected = "no true values")]
    fn reading_before_draw_panics() {
        let s = ConstSampler::new("const", 0.0, false);
        let _ = s.core().true_values();
    }

    #[test]
    fn properties_collect_child_before_parent() {
        let mut parent = ConstSampler::new("parent", 0.0, false);
        parent.set_secondary_sampler(Box::new(ConstSampler::new("child", 1.0, false)));
        parent.draw(3);

        let mut props = SamplerProperties::new();
        parent.get_secondary_properties(&mut props, None, None);

        assert_eq!(props.names(), vec!["child", "parent"]);
        assert_eq!(props.get("child").unwrap().true_values, vec![1.0; 3]);
        assert_eq!(props.get("parent").unwrap().selection, vec![true; 3]);
    }

    #[test]
    fn undrawn_sampler_exports_empty_records() {
        let s = ConstSampler::new("const", 0.0, false);
        let mut props = SamplerProperties::new();
        s.get_secondary_properties(&mut props, None, None);
        assert!(props.get("const").unwrap().true_values.is_empty());
    }
}
