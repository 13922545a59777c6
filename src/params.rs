use serde::{Deserialize, Serialize};

use crate::consts::GEOMETRY_TOLERANCE;
use crate::error::ConfigError;
use crate::sites::{Site, SitePair};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatchGeometry {
    eccentricity: f64, // offset of the patch center from the particle center
    radius: f64,       // radius of the patch interaction sphere
}

impl PatchGeometry {
    pub fn new(eccentricity: f64, radius: f64) -> Self {
        Self {
            eccentricity,
            radius,
        }
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Radius of the sphere that contains the patch, i.e. the particle itself.
    pub fn enclosing_radius(&self) -> f64 {
        self.eccentricity + self.radius
    }
}

/// Physical configuration of one run.
///
/// Energies are stored as given and divided by `e_min` when the tables are
/// built. Patch fields come last so the struct serializes to valid toml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    e_core_core: f64,
    e_core_patch1: f64,
    e_core_patch2: f64,
    e_patch1_patch1: f64,
    e_patch2_patch2: f64,
    e_patch1_patch2: f64,
    e_min: f64,

    fake_hs_coefficient: f64,
    fake_hs_exponent: f64,

    sampling_step: f64,
    cutoff: f64,

    first_patch: PatchGeometry,
    second_patch: PatchGeometry,
}

// order of the fields in the plain text input file
const LEGACY_FIELDS: [&str; 15] = [
    "e_BB",
    "e_Bs1",
    "e_Bs2",
    "e_s1s1",
    "e_s2s2",
    "e_s1s2",
    "e_min",
    "first_patch_eccentricity",
    "first_patch_radius",
    "second_patch_eccentricity",
    "second_patch_radius",
    "fake_hs_coefficient",
    "fake_hs_exponent",
    "sampling_step",
    "cutoff",
];

impl Default for ModelParameters {
    fn default() -> Self {
        let patch = PatchGeometry::new(0.22, 0.38);
        Self {
            e_core_core: 1.0,
            e_core_patch1: -2.0,
            e_core_patch2: -2.0,
            e_patch1_patch1: -5.0,
            e_patch2_patch2: -5.0,
            e_patch1_patch2: -5.0,
            e_min: 1.0,

            fake_hs_coefficient: 500.0,
            fake_hs_exponent: 15.0,

            sampling_step: 1e-5,
            cutoff: 5000.0,

            first_patch: patch,
            second_patch: patch,
        }
    }
}

impl ModelParameters {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        energies: [f64; 6],
        e_min: f64,
        first_patch: PatchGeometry,
        second_patch: PatchGeometry,
        fake_hs_coefficient: f64,
        fake_hs_exponent: f64,
        sampling_step: f64,
        cutoff: f64,
    ) -> Result<Self, ConfigError> {
        let [e_core_core, e_core_patch1, e_core_patch2, e_patch1_patch1, e_patch2_patch2, e_patch1_patch2] =
            energies;
        let params = Self {
            e_core_core,
            e_core_patch1,
            e_core_patch2,
            e_patch1_patch1,
            e_patch2_patch2,
            e_patch1_patch2,
            e_min,
            fake_hs_coefficient,
            fake_hs_exponent,
            sampling_step,
            cutoff,
            first_patch,
            second_patch,
        };
        params.check()?;
        Ok(params)
    }

    /// Reads the whitespace separated input format: six energies, e_min,
    /// the two (eccentricity, radius) pairs, the fake hard sphere
    /// coefficient and exponent, sampling step and cutoff.
    pub fn from_legacy_str(contents: &str) -> Result<Self, ConfigError> {
        let mut tokens = contents.split_whitespace();
        let mut values = [0.0; LEGACY_FIELDS.len()];
        for (value, &name) in values.iter_mut().zip(LEGACY_FIELDS.iter()) {
            let token = tokens.next().ok_or(ConfigError::MissingField(name))?;
            *value = token
                .parse::<f64>()
                .map_err(|_| ConfigError::MalformedField {
                    name,
                    token: token.to_string(),
                })?;
        }
        let [e_bb, e_bs1, e_bs2, e_s1s1, e_s2s2, e_s1s2, e_min, ecc1, r1, ecc2, r2, hs_coefficient, hs_exponent, step, cutoff] =
            values;
        Self::new(
            [e_bb, e_bs1, e_bs2, e_s1s1, e_s2s2, e_s1s2],
            e_min,
            PatchGeometry::new(ecc1, r1),
            PatchGeometry::new(ecc2, r2),
            hs_coefficient,
            hs_exponent,
            step,
            cutoff,
        )
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let params: Self = toml::from_str(contents)?;
        params.check()?;
        Ok(params)
    }

    /// Same parameters sampled on a different grid.
    pub fn with_sampling_step(mut self, sampling_step: f64) -> Result<Self, ConfigError> {
        self.sampling_step = sampling_step;
        self.check()?;
        Ok(self)
    }

    // assert well-formedness predicate for ModelParameters
    pub fn check(&self) -> Result<(), ConfigError> {
        let named = [
            ("e_BB", self.e_core_core),
            ("e_Bs1", self.e_core_patch1),
            ("e_Bs2", self.e_core_patch2),
            ("e_s1s1", self.e_patch1_patch1),
            ("e_s2s2", self.e_patch2_patch2),
            ("e_s1s2", self.e_patch1_patch2),
            ("e_min", self.e_min),
            ("first_patch_eccentricity", self.first_patch.eccentricity),
            ("first_patch_radius", self.first_patch.radius),
            ("second_patch_eccentricity", self.second_patch.eccentricity),
            ("second_patch_radius", self.second_patch.radius),
            ("fake_hs_coefficient", self.fake_hs_coefficient),
            ("fake_hs_exponent", self.fake_hs_exponent),
            ("sampling_step", self.sampling_step),
            ("cutoff", self.cutoff),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(invalid(name, value, "must be finite"));
            }
        }

        if !self.e_min.is_normal() {
            return Err(invalid("e_min", self.e_min, "must be non-zero"));
        }
        if self.sampling_step <= 0.0 {
            return Err(invalid(
                "sampling_step",
                self.sampling_step,
                "must be positive",
            ));
        }
        if self.cutoff <= 0.0 {
            return Err(invalid("cutoff", self.cutoff, "must be positive"));
        }
        let patches = [
            (
                &self.first_patch,
                "first_patch_eccentricity",
                "first_patch_radius",
            ),
            (
                &self.second_patch,
                "second_patch_eccentricity",
                "second_patch_radius",
            ),
        ];
        for (patch, ecc_name, radius_name) in patches {
            if patch.eccentricity < 0.0 {
                return Err(invalid(ecc_name, patch.eccentricity, "must not be negative"));
            }
            if patch.radius <= 0.0 {
                return Err(invalid(radius_name, patch.radius, "must be positive"));
            }
        }

        // patch geometry integrity check
        let first = self.first_patch.enclosing_radius();
        let second = self.second_patch.enclosing_radius();
        if (first - second).abs() >= GEOMETRY_TOLERANCE {
            return Err(ConfigError::InconsistentGeometry { first, second });
        }
        Ok(())
    }

    pub fn first_patch(&self) -> &PatchGeometry {
        &self.first_patch
    }

    pub fn second_patch(&self) -> &PatchGeometry {
        &self.second_patch
    }

    pub fn e_min(&self) -> f64 {
        self.e_min
    }

    pub fn fake_hs_coefficient(&self) -> f64 {
        self.fake_hs_coefficient
    }

    pub fn fake_hs_exponent(&self) -> f64 {
        self.fake_hs_exponent
    }

    pub fn sampling_step(&self) -> f64 {
        self.sampling_step
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn ipc_radius(&self) -> f64 {
        self.first_patch.enclosing_radius()
    }

    pub fn interaction_range(&self) -> f64 {
        2.0 * self.ipc_radius()
    }

    /// Number of sampled distances, 0 and one step past the range included.
    pub fn potential_steps(&self) -> usize {
        (self.interaction_range() / self.sampling_step) as usize + 2
    }

    pub fn energy(&self, pair: SitePair) -> f64 {
        match pair {
            SitePair::CoreCore => self.e_core_core,
            SitePair::CorePatch1 => self.e_core_patch1,
            SitePair::CorePatch2 => self.e_core_patch2,
            SitePair::Patch1Patch2 => self.e_patch1_patch2,
            SitePair::Patch1Patch1 => self.e_patch1_patch1,
            SitePair::Patch2Patch2 => self.e_patch2_patch2,
        }
    }

    pub fn site_radius(&self, site: Site) -> f64 {
        match site {
            Site::Core => self.ipc_radius(),
            Site::Patch1 => self.first_patch.radius,
            Site::Patch2 => self.second_patch.radius,
        }
    }

    pub fn site_eccentricity(&self, site: Site) -> f64 {
        match site {
            Site::Core => 0.0,
            Site::Patch1 => self.first_patch.eccentricity,
            Site::Patch2 => self.second_patch.eccentricity,
        }
    }
}

fn invalid(name: &'static str, value: f64, reason: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        name,
        value,
        reason,
    }
}
