//! One dimensional slices through the total two-particle potential, used to
//! eyeball the tables before handing them to the simulator.

pub mod angular;
pub mod radial;

pub use angular::{angular_orientations, project_angular, AngularOrientation};
pub use radial::{project_radial, radial_orientations, RadialOrientation, RadialTerm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Abscissa {
    Distance,
    Degrees,
}

/// Total potential against distance or angle for one named orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    name: String,
    abscissa: Abscissa,
    points: Vec<(f64, f64)>,
}

impl Curve {
    pub fn new(name: &str, abscissa: Abscissa, points: Vec<(f64, f64)>) -> Self {
        Self {
            name: name.to_string(),
            abscissa,
            points,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abscissa(&self) -> Abscissa {
        self.abscissa
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    // (min, max) of the finite potential values, None for an empty curve
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .map(|&(_, v)| v)
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
