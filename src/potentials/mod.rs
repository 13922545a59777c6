use crate::params::ModelParameters;
use crate::sites::SitePair;

pub mod hard_sphere;
pub mod overlap;

use hard_sphere::FakeHardSphere;
use overlap::{omega, omega_radial_derivative};

/// A radial pair potential that can be tabulated.
pub trait Potential {
    fn potential(&self, r: f64) -> f64;

    /// Raw radial derivative. The exporter negates it.
    fn force(&self, r: f64) -> f64;
}

/// Overlap volume of two site spheres scaled by the normalized pair energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapPotential {
    ra: f64,
    rb: f64,
    strength: f64,
}

impl OverlapPotential {
    pub fn new(ra: f64, rb: f64, strength: f64) -> Self {
        Self { ra, rb, strength }
    }

    pub fn for_pair(params: &ModelParameters, pair: SitePair) -> Self {
        let (a, b) = pair.sites();
        Self::new(
            params.site_radius(a),
            params.site_radius(b),
            params.energy(pair) / params.e_min(),
        )
    }
}

impl Potential for OverlapPotential {
    fn potential(&self, r: f64) -> f64 {
        self.strength * omega(self.ra, self.rb, r)
    }

    fn force(&self, r: f64) -> f64 {
        self.strength * omega_radial_derivative(self.ra, self.rb, r)
    }
}

/// Potential and force sampled at `r = i * sampling_step`.
#[derive(Debug, Clone, PartialEq)]
pub struct PotentialTable {
    potential: Vec<f64>,
    force: Vec<f64>,
}

impl PotentialTable {
    pub fn tabulate<P: Potential>(p: &P, steps: usize, sampling_step: f64) -> Self {
        let mut potential = Vec::with_capacity(steps);
        let mut force = Vec::with_capacity(steps);
        for i in 0..steps {
            let r = i as f64 * sampling_step;
            potential.push(p.potential(r));
            force.push(p.force(r));
        }
        Self { potential, force }
    }

    pub fn len(&self) -> usize {
        self.potential.len()
    }

    pub fn is_empty(&self) -> bool {
        self.potential.is_empty()
    }

    /// `None` outside the table, which callers count as no contribution.
    pub fn potential(&self, idx: usize) -> Option<f64> {
        self.potential.get(idx).copied()
    }

    pub fn force(&self, idx: usize) -> Option<f64> {
        self.force.get(idx).copied()
    }

    pub fn potentials(&self) -> &[f64] {
        &self.potential
    }

    pub fn forces(&self) -> &[f64] {
        &self.force
    }
}

/// The six site-site tables plus the fake hard sphere correction that only
/// applies to the core-core pair.
///
/// Index 0 (r = 0) of the hard sphere table is not finite and must never be
/// read as a physical value.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSitePotentials {
    sampling_step: f64,
    hard_sphere: PotentialTable,
    tables: [PotentialTable; SitePair::COUNT],
}

impl SiteSitePotentials {
    pub fn new(params: &ModelParameters) -> Self {
        let steps = params.potential_steps();
        let sampling_step = params.sampling_step();
        log::debug!(
            "Tabulating {} samples of width {} up to r = {}",
            steps,
            sampling_step,
            params.interaction_range()
        );

        let tables = SitePair::ALL.map(|pair| {
            let p = OverlapPotential::for_pair(params, pair);
            log::debug!("Building {} table from {:?}", pair, p);
            PotentialTable::tabulate(&p, steps, sampling_step)
        });

        let hs = FakeHardSphere::new(params.fake_hs_coefficient(), params.fake_hs_exponent());
        let hard_sphere = PotentialTable::tabulate(&hs, steps, sampling_step);

        Self {
            sampling_step,
            hard_sphere,
            tables,
        }
    }

    pub fn table(&self, pair: SitePair) -> &PotentialTable {
        &self.tables[pair.index()]
    }

    pub fn hard_sphere(&self) -> &PotentialTable {
        &self.hard_sphere
    }

    pub fn sampling_step(&self) -> f64 {
        self.sampling_step
    }

    pub fn len(&self) -> usize {
        self.hard_sphere.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hard_sphere.is_empty()
    }

    /// `floor(r / sampling_step)`, or `None` when that falls outside the tables.
    pub fn distance_index(&self, r: f64) -> Option<usize> {
        let x = (r / self.sampling_step).floor();
        if x >= 0.0 && x < self.len() as f64 {
            Some(x as usize)
        } else {
            None
        }
    }

    /// Tabulated potential of `pair` at distance `r`, zero outside the tables.
    pub fn potential_at(&self, pair: SitePair, r: f64) -> f64 {
        self.distance_index(r)
            .and_then(|idx| self.table(pair).potential(idx))
            .unwrap_or(0.0)
    }
}

pub fn build_tables(params: &ModelParameters) -> SiteSitePotentials {
    SiteSitePotentials::new(params)
}
