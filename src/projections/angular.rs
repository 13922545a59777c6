use crate::consts::{ANGULAR_STEP_DEGREES, CONTACT_DISTANCE, FULL_TURN_DEGREES};
use crate::params::ModelParameters;
use crate::position::{deg_to_rad, DimVec, Orientation, Position};
use crate::potentials::SiteSitePotentials;
use crate::sites::{ParticleSymmetry, Site, SitePair};

use super::{Abscissa, Curve};

const SITES: [Site; 3] = [Site::Core, Site::Patch1, Site::Patch2];

/// Starting patch angles (degrees) of the two particles. The second one is
/// swept through a full turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularOrientation {
    name: &'static str,
    theta_1: f64,
    theta_2: f64,
}

impl AngularOrientation {
    pub fn new(name: &'static str, theta_1: f64, theta_2: f64) -> Self {
        Self {
            name,
            theta_1,
            theta_2,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn theta_1(&self) -> f64 {
        self.theta_1
    }

    pub fn theta_2(&self) -> f64 {
        self.theta_2
    }
}

pub fn angular_orientations(symmetry: ParticleSymmetry) -> Vec<AngularOrientation> {
    match symmetry {
        ParticleSymmetry::Janus => vec![
            AngularOrientation::new("EE", 0.0, 180.0),
            AngularOrientation::new("PP", 180.0, 0.0),
            AngularOrientation::new("EP", 0.0, 0.0),
        ],
        ParticleSymmetry::Asymmetric => vec![
            AngularOrientation::new("E", 90.0, 90.0),
            AngularOrientation::new("P1", 180.0, 0.0),
            AngularOrientation::new("P2", 0.0, 180.0),
        ],
        ParticleSymmetry::Symmetric => vec![
            AngularOrientation::new("E", 90.0, 90.0),
            AngularOrientation::new("P", 180.0, 0.0),
        ],
    }
}

// site positions of one particle
struct SiteLayout {
    core: Position,
    patch1: Position,
    patch2: Position,
}

impl SiteLayout {
    // patch 2 sits opposite patch 1
    fn new(params: &ModelParameters, core: Position, or: Orientation) -> Self {
        let e1 = params.site_eccentricity(Site::Patch1);
        let e2 = params.site_eccentricity(Site::Patch2);
        Self {
            core,
            patch1: core + DimVec::new([or.x() * e1, or.y() * e1]),
            patch2: core - DimVec::new([or.x() * e2, or.y() * e2]),
        }
    }

    fn site(&self, site: Site) -> Position {
        match site {
            Site::Core => self.core,
            Site::Patch1 => self.patch1,
            Site::Patch2 => self.patch2,
        }
    }
}

/// Total potential of two particles at contact.
///
/// The first particle sits at the origin with patch 1 along
/// `(-cos theta_1, -sin theta_1)`; the second sits at `(1, 0)` with patch 1
/// along `(-cos theta_2, -sin theta_2)`. Both particles turn the same way
/// and both angles at 0 put the second particle's patch 1 towards the first
/// one. Angles in radians.
pub fn contact_potential(
    potentials: &SiteSitePotentials,
    params: &ModelParameters,
    theta_1: f64,
    theta_2: f64,
) -> f64 {
    let first = SiteLayout::new(
        params,
        DimVec::new([0.0, 0.0]),
        DimVec::new([-theta_1.cos(), -theta_1.sin()]),
    );
    let second = SiteLayout::new(
        params,
        DimVec::new([CONTACT_DISTANCE, 0.0]),
        DimVec::new([-theta_2.cos(), -theta_2.sin()]),
    );

    let mut potential = 0.0;
    for a in SITES {
        for b in SITES {
            let dist = (second.site(b) - first.site(a)).l2_norm();
            potential += potentials.potential_at(SitePair::between(a, b), dist);
        }
    }
    potential
}

/// Sweeps the second particle through a full turn in fixed steps for every
/// orientation. Abscissa values are the sweep angle in degrees.
pub fn project_angular(
    potentials: &SiteSitePotentials,
    params: &ModelParameters,
    orientations: &[AngularOrientation],
) -> Vec<Curve> {
    orientations
        .iter()
        .map(|orientation| {
            log::debug!(
                "Projecting angular orientation {} (theta_1 = {}, theta_2 = {})",
                orientation.name(),
                orientation.theta_1(),
                orientation.theta_2()
            );
            let theta_1 = deg_to_rad(orientation.theta_1());
            let points = (0..FULL_TURN_DEGREES)
                .step_by(ANGULAR_STEP_DEGREES)
                .map(|angle| {
                    let theta_2 = deg_to_rad(orientation.theta_2() + angle as f64);
                    let potential = contact_potential(potentials, params, theta_1, theta_2);
                    (angle as f64, potential)
                })
                .collect();
            Curve::new(orientation.name(), Abscissa::Degrees, points)
        })
        .collect()
}
