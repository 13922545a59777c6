use crate::consts::FAKE_HS_DIAMETER;
use crate::params::ModelParameters;
use crate::potentials::SiteSitePotentials;
use crate::sites::{ParticleSymmetry, Site, SitePair};

use super::{Abscissa, Curve};

/// One site-site contribution along the line of centers: the pair table read
/// at `r - offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialTerm {
    pair: SitePair,
    offset: f64,
}

impl RadialTerm {
    pub fn new(pair: SitePair, offset: f64) -> Self {
        Self { pair, offset }
    }

    pub fn pair(&self) -> SitePair {
        self.pair
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Table index at center distance `r`, `None` if negative or past the end.
    pub fn index(&self, potentials: &SiteSitePotentials, r: f64) -> Option<usize> {
        potentials.distance_index(r - self.offset)
    }

    pub fn contribution(&self, potentials: &SiteSitePotentials, r: f64) -> f64 {
        potentials.potential_at(self.pair, r - self.offset)
    }
}

/// A head-on configuration of two particles.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialOrientation {
    name: &'static str,
    terms: Vec<RadialTerm>,
}

impl RadialOrientation {
    pub fn new(name: &'static str, terms: Vec<RadialTerm>) -> Self {
        Self { name, terms }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn terms(&self) -> &[RadialTerm] {
        &self.terms
    }

    pub fn total(&self, potentials: &SiteSitePotentials, r: f64) -> f64 {
        self.terms
            .iter()
            .map(|term| term.contribution(potentials, r))
            .sum()
    }

    // equator against equator: the patches never come close
    fn equators(name: &'static str) -> Self {
        Self::new(name, vec![RadialTerm::new(SitePair::CoreCore, 0.0)])
    }

    // equator of the first particle against a patch of the second
    fn equator_patch(name: &'static str, pair: SitePair, ecc: f64) -> Self {
        Self::new(
            name,
            vec![
                RadialTerm::new(SitePair::CoreCore, 0.0),
                RadialTerm::new(pair, ecc),
            ],
        )
    }

    // a patch of each particle pointing at the other particle
    fn patch_patch(
        name: &'static str,
        (core_a, ecc_a): (SitePair, f64),
        (core_b, ecc_b): (SitePair, f64),
        pair: SitePair,
    ) -> Self {
        Self::new(
            name,
            vec![
                RadialTerm::new(SitePair::CoreCore, 0.0),
                RadialTerm::new(core_a, ecc_a),
                RadialTerm::new(core_b, ecc_b),
                RadialTerm::new(pair, ecc_a + ecc_b),
            ],
        )
    }
}

/// The head-on orientations that give independent curves for `symmetry`.
pub fn radial_orientations(
    params: &ModelParameters,
    symmetry: ParticleSymmetry,
) -> Vec<RadialOrientation> {
    let e1 = params.site_eccentricity(Site::Patch1);
    let e2 = params.site_eccentricity(Site::Patch2);
    let p1 = (SitePair::CorePatch1, e1);
    let p2 = (SitePair::CorePatch2, e2);

    match symmetry {
        ParticleSymmetry::Asymmetric => vec![
            RadialOrientation::equators("EE"),
            RadialOrientation::equator_patch("Ep1", SitePair::CorePatch1, e1),
            RadialOrientation::equator_patch("Ep2", SitePair::CorePatch2, e2),
            RadialOrientation::patch_patch("p1p2", p1, p2, SitePair::Patch1Patch2),
            RadialOrientation::patch_patch("p1p1", p1, p1, SitePair::Patch1Patch1),
            RadialOrientation::patch_patch("p2p2", p2, p2, SitePair::Patch2Patch2),
        ],
        ParticleSymmetry::Symmetric => vec![
            RadialOrientation::equators("EE"),
            RadialOrientation::equator_patch("EP", SitePair::CorePatch1, e1),
            RadialOrientation::patch_patch("PP", p1, p1, SitePair::Patch1Patch1),
        ],
        ParticleSymmetry::Janus => vec![
            RadialOrientation::equators("JANUS_EE"),
            RadialOrientation::equator_patch("JANUS_EP", SitePair::CorePatch1, e1),
            RadialOrientation::patch_patch("JANUS_PP", p1, p1, SitePair::Patch1Patch1),
        ],
    }
}

/// Total potential from contact (`r = 1`) up to the interaction range.
pub fn project_radial(
    potentials: &SiteSitePotentials,
    interaction_range: f64,
    orientations: &[RadialOrientation],
) -> Vec<Curve> {
    let step = potentials.sampling_step();
    let mut distances = Vec::new();
    for k in 0usize.. {
        let r = FAKE_HS_DIAMETER + k as f64 * step;
        if r >= interaction_range {
            break;
        }
        distances.push(r);
    }

    orientations
        .iter()
        .map(|orientation| {
            log::debug!(
                "Projecting radial orientation {} over {} distances",
                orientation.name(),
                distances.len()
            );
            let points = distances
                .iter()
                .map(|&r| (r, orientation.total(potentials, r)))
                .collect();
            Curve::new(orientation.name(), Abscissa::Distance, points)
        })
        .collect()
}
