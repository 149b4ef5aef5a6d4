//! Declared, bounded sampler parameters.
//!
//! Each concrete sampler declares its parameters as a static table of
//! [`ParamSpec`] entries — name, default, optional bounds — and carries a
//! per-instance [`ParameterStore`] seeded from the declared defaults. Two
//! instances of the same sampler type never share mutable parameter state.
//!
//! # Example
//!
//! ```
//! use popsynth::parameter::{ParamSpec, ParameterStore};
//!
//! const PARAMETERS: &[ParamSpec] = &[
//!     ParamSpec::new("mu", 2.0),
//!     ParamSpec::new("tau", 1.0).vmin(0.0),
//! ];
//!
//! let mut store = ParameterStore::new(PARAMETERS);
//! assert_eq!(store.value("mu"), 2.0);
//!
//! store.set("mu", 4.5).unwrap();
//! assert_eq!(store.value("mu"), 4.5);
//!
//! // Out of bounds: rejected, stored value untouched.
//! assert!(store.set("tau", -1.0).is_err());
//! assert_eq!(store.value("tau"), 1.0);
//! ```

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// The declaration of a single bounded scalar parameter.
///
/// Specs are `const`-constructible so a sampler type can register its
/// parameters as a `const PARAMETERS: &[ParamSpec]` table, built once at
/// compile time rather than per instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamSpec {
    /// The parameter name. Immutable once declared.
    pub name: &'static str,
    /// The default value copied into each new instance store.
    pub default: f64,
    /// Optional inclusive lower bound.
    pub vmin: Option<f64>,
    /// Optional inclusive upper bound.
    pub vmax: Option<f64>,
}

impl ParamSpec {
    /// Declares a parameter with the given name and default, unbounded.
    #[must_use]
    pub const fn new(name: &'static str, default: f64) -> Self {
        Self {
            name,
            default,
            vmin: None,
            vmax: None,
        }
    }

    /// Sets an inclusive lower bound.
    #[must_use]
    pub const fn vmin(mut self, vmin: f64) -> Self {
        self.vmin = Some(vmin);
        self
    }

    /// Sets an inclusive upper bound.
    #[must_use]
    pub const fn vmax(mut self, vmax: f64) -> Self {
        self.vmax = Some(vmax);
        self
    }

    /// Checks a candidate value against the declared bounds.
    ///
    /// # Errors
    ///
    /// Returns an error naming the parameter and the violated bound when
    /// the value falls outside `[vmin, vmax]`. Values are never clamped.
    pub fn validate(&self, value: f64) -> Result<()> {
        if let Some(vmin) = self.vmin {
            if value < vmin {
                return Err(Error::ParameterBelowMinimum {
                    name: self.name,
                    value,
                    vmin,
                });
            }
        }
        if let Some(vmax) = self.vmax {
            if value > vmax {
                return Err(Error::ParameterAboveMaximum {
                    name: self.name,
                    value,
                    vmax,
                });
            }
        }
        Ok(())
    }
}

/// Per-instance storage for a sampler's declared parameters.
///
/// Construction copies every declared default into the instance store, so
/// reads always succeed for declared names and mutation on one instance is
/// invisible to every other.
#[derive(Clone, Debug)]
pub struct ParameterStore {
    specs: &'static [ParamSpec],
    values: BTreeMap<&'static str, f64>,
}

impl ParameterStore {
    /// Builds a store from a declaration table, seeded with the defaults.
    ///
    /// # Panics
    ///
    /// Panics if the table declares the same name twice or a default that
    /// violates its own bounds. Both are bugs in the declaring sampler.
    #[must_use]
    pub fn new(specs: &'static [ParamSpec]) -> Self {
        let mut values = BTreeMap::new();
        for spec in specs {
            spec.validate(spec.default)
                .unwrap_or_else(|e| panic!("default for '{}' violates its bounds: {e}", spec.name));
            let previous = values.insert(spec.name, spec.default);
            assert!(
                previous.is_none(),
                "parameter '{}' declared twice",
                spec.name
            );
        }
        Self { specs, values }
    }

    /// Returns the declaration table this store was built from.
    #[must_use]
    pub fn specs(&self) -> &'static [ParamSpec] {
        self.specs
    }

    /// Returns the current value of a declared parameter.
    ///
    /// # Panics
    ///
    /// Panics if `name` was never declared. Concrete samplers read only the
    /// names they declared themselves, so this indicates a bug in the
    /// sampler, not a runtime error.
    #[must_use]
    pub fn value(&self, name: &str) -> f64 {
        *self
            .values
            .get(name)
            .unwrap_or_else(|| panic!("parameter '{name}' was never declared"))
    }

    /// Returns the current value of a parameter, or `None` if undeclared.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Sets a declared parameter after validating its bounds.
    ///
    /// # Errors
    ///
    /// Returns an error when `name` was never declared or `value` violates
    /// the declared bounds; in either case the stored value is unchanged.
    pub fn set(&mut self, name: &str, value: f64) -> Result<()> {
        let spec = self
            .specs
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| Error::UnknownParameter {
                name: name.to_string(),
            })?;

        spec.validate(value)?;
        self.values.insert(spec.name, value);
        Ok(())
    }

    /// Returns a flat `{name: value}` snapshot for provenance.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, f64> {
        self.values
            .iter()
            .map(|(k, v)| ((*k).to_string(), *v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPECS: &[ParamSpec] = &[
        ParamSpec::new("xp", 0.0),
        ParamSpec::new("sigma", 1.0).vmin(0.0),
        ParamSpec::new("efficiency", 0.5).vmin(0.0).vmax(1.0),
    ];

    #[test]
    fn defaults_are_seeded() {
        let store = ParameterStore::new(SPECS);
        assert_eq!(store.value("xp"), 0.0);
        assert_eq!(store.value("sigma"), 1.0);
        assert_eq!(store.value("efficiency"), 0.5);
    }

    #[test]
    fn set_within_bounds() {
        let mut store = ParameterStore::new(SPECS);
        store.set("sigma", 2.5).unwrap();
        assert_eq!(store.value("sigma"), 2.5);
    }

    #[test]
    fn set_below_minimum_is_rejected_and_value_unchanged() {
        let mut store = ParameterStore::new(SPECS);
        let err = store.set("sigma", -0.5).unwrap_err();
        assert!(matches!(
            err,
            Error::ParameterBelowMinimum {
                name: "sigma",
                vmin,
                ..
            } if vmin == 0.0
        ));
        assert_eq!(store.value("sigma"), 1.0);
    }

    #[test]
    fn set_above_maximum_is_rejected() {
        let mut store = ParameterStore::new(SPECS);
        assert!(matches!(
            store.set("efficiency", 1.5),
            Err(Error::ParameterAboveMaximum { name: "efficiency", .. })
        ));
        assert_eq!(store.value("efficiency"), 0.5);
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut store = ParameterStore::new(SPECS);
        store.set("efficiency", 0.0).unwrap();
        store.set("efficiency", 1.0).unwrap();
        assert_eq!(store.value("efficiency"), 1.0);
    }

    #[test]
    fn unknown_parameter_is_an_error() {
        let mut store = ParameterStore::new(SPECS);
        assert!(matches!(
            store.set("nope", 1.0),
            Err(Error::UnknownParameter { .. })
        ));
        assert!(store.get("nope").is_none());
    }

    #[test]
    fn instances_do_not_alias() {
        let mut a = ParameterStore::new(SPECS);
        let b = ParameterStore::new(SPECS);
        a.set("xp", 9.0).unwrap();
        assert_eq!(a.value("xp"), 9.0);
        assert_eq!(b.value("xp"), 0.0);
    }

    #[test]
    fn snapshot_is_flat_and_complete() {
        let store = ParameterStore::new(SPECS);
        let snap = store.snapshot();
        assert_eq!(snap.len(), 3);
        assert_eq!(snap["sigma"], 1.0);
    }

    #[test]
    #[should_panic(expected = "never declared")]
    fn reading_an_undeclared_parameter_panics() {
        let store = ParameterStore::new(SPECS);
        let _ = store.value("missing");
    }

    #[test]
    #[should_panic(expected = "declared twice")]
    fn duplicate_declaration_panics() {
        const DUP: &[ParamSpec] = &[ParamSpec::new("x", 0.0), ParamSpec::new("x", 1.0)];
        let _ = ParameterStore::new(DUP);
    }
}
