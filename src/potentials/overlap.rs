// Overlap volume of two spheres (BKL paper, formula 18), up to the constant
// factor pi/6 which is absorbed into the energies.

/// Overlap of spheres with radii `ra`, `rb` at center distance `rab`.
///
/// Touching spheres (`rab == ra + rb`) evaluate the lens branch, which is 0
/// there, so the result is continuous at contact.
pub fn omega(ra: f64, rb: f64, rab: f64) -> f64 {
    if rab > ra + rb {
        0.0
    } else if rab <= (ra - rb).abs() {
        8.0 * ra.min(rb).powi(3)
    } else {
        let t = (ra * ra - rb * rb) / (2.0 * rab);
        2.0 * ((2.0 * ra + t + rab / 2.0) * (ra - t - rab / 2.0).powi(2)
            + (2.0 * rb - t + rab / 2.0) * (rb + t - rab / 2.0).powi(2))
    }
}

/// d(omega)/d(rab). Zero from contact (`rab >= ra + rb`) on and inside the
/// fully contained regime.
pub fn omega_radial_derivative(ra: f64, rb: f64, rab: f64) -> f64 {
    if rab >= ra + rb || rab <= (ra - rb).abs() {
        return 0.0;
    }
    let t = (ra * ra - rb * rb) / (2.0 * rab);
    let t_minus = t - rab / 2.0;
    let t_plus = t + rab / 2.0;
    (6.0 / rab)
        * (t_minus * (ra - t_plus) * (ra + t_plus) - t_plus * (rb - t_minus) * (rb + t_minus))
}
