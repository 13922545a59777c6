use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::GEOMETRY_TOLERANCE;
use crate::params::ModelParameters;

/// The interaction sites of one particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    Core,
    Patch1,
    Patch2,
}

/// Unordered pair of site kinds. Each kind owns one tabulated potential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SitePair {
    CoreCore,
    CorePatch1,
    CorePatch2,
    Patch1Patch2,
    Patch1Patch1,
    Patch2Patch2,
}

impl SitePair {
    pub const COUNT: usize = 6;

    /// Export order of the tables.
    pub const ALL: [SitePair; SitePair::COUNT] = [
        SitePair::CoreCore,
        SitePair::CorePatch1,
        SitePair::CorePatch2,
        SitePair::Patch1Patch2,
        SitePair::Patch1Patch1,
        SitePair::Patch2Patch2,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Name used for the table keyword and file name.
    pub fn name(self) -> &'static str {
        match self {
            SitePair::CoreCore => "BB",
            SitePair::CorePatch1 => "Bs1",
            SitePair::CorePatch2 => "Bs2",
            SitePair::Patch1Patch2 => "s1s2",
            SitePair::Patch1Patch1 => "s1s1",
            SitePair::Patch2Patch2 => "s2s2",
        }
    }

    pub fn table_file_name(self) -> String {
        format!("{}.table", self.name())
    }

    pub fn sites(self) -> (Site, Site) {
        match self {
            SitePair::CoreCore => (Site::Core, Site::Core),
            SitePair::CorePatch1 => (Site::Core, Site::Patch1),
            SitePair::CorePatch2 => (Site::Core, Site::Patch2),
            SitePair::Patch1Patch2 => (Site::Patch1, Site::Patch2),
            SitePair::Patch1Patch1 => (Site::Patch1, Site::Patch1),
            SitePair::Patch2Patch2 => (Site::Patch2, Site::Patch2),
        }
    }

    pub fn between(a: Site, b: Site) -> Self {
        match (a, b) {
            (Site::Core, Site::Core) => SitePair::CoreCore,
            (Site::Core, Site::Patch1) | (Site::Patch1, Site::Core) => SitePair::CorePatch1,
            (Site::Core, Site::Patch2) | (Site::Patch2, Site::Core) => SitePair::CorePatch2,
            (Site::Patch1, Site::Patch2) | (Site::Patch2, Site::Patch1) => SitePair::Patch1Patch2,
            (Site::Patch1, Site::Patch1) => SitePair::Patch1Patch1,
            (Site::Patch2, Site::Patch2) => SitePair::Patch2Patch2,
        }
    }
}

impl fmt::Display for SitePair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Selects which orientations are worth plotting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleSymmetry {
    Janus,
    // both patches are interchangeable
    Symmetric,
    Asymmetric,
}

impl ParticleSymmetry {
    pub fn detect(params: &ModelParameters, janus: bool) -> Self {
        if janus {
            return ParticleSymmetry::Janus;
        }
        let close = |a: f64, b: f64| (a - b).abs() < GEOMETRY_TOLERANCE;
        let p1 = params.first_patch();
        let p2 = params.second_patch();
        let same_geometry =
            close(p1.eccentricity(), p2.eccentricity()) && close(p1.radius(), p2.radius());
        let same_energies = close(
            params.energy(SitePair::CorePatch1),
            params.energy(SitePair::CorePatch2),
        ) && close(
            params.energy(SitePair::Patch1Patch1),
            params.energy(SitePair::Patch2Patch2),
        ) && close(
            params.energy(SitePair::Patch1Patch1),
            params.energy(SitePair::Patch1Patch2),
        );
        if same_geometry && same_energies {
            ParticleSymmetry::Symmetric
        } else {
            ParticleSymmetry::Asymmetric
        }
    }
}

impl fmt::Display for ParticleSymmetry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            ParticleSymmetry::Janus => "janus",
            ParticleSymmetry::Symmetric => "symmetric",
            ParticleSymmetry::Asymmetric => "asymmetric",
        };
        f.write_str(s)
    }
}
