use crate::consts::FAKE_HS_DIAMETER;

use super::Potential;

/// Smooth stand-in for a hard core of diameter `FAKE_HS_DIAMETER`.
///
/// `u(r) = c((r^-n - 2) r^-n + 1)` for `r <= 1`, zero beyond. The minimum
/// sits at `r = 1` where both the value and the slope vanish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FakeHardSphere {
    coefficient: f64,
    exponent: f64,
}

impl FakeHardSphere {
    pub fn new(coefficient: f64, exponent: f64) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }
}

impl Potential for FakeHardSphere {
    // r = 0 diverges, the caller never exports that sample
    fn potential(&self, r: f64) -> f64 {
        if r > FAKE_HS_DIAMETER {
            return 0.0;
        }
        let rm = r.powf(-self.exponent);
        self.coefficient * ((rm - 2.0) * rm + 1.0)
    }

    /// Tabulated force term `-2nc(r^-n - 1) r^-n`, which is `r du/dr`.
    /// Stored with the same sign convention as the overlap derivatives.
    fn force(&self, r: f64) -> f64 {
        if r > FAKE_HS_DIAMETER {
            return 0.0;
        }
        let rm = r.powf(-self.exponent);
        -2.0 * self.exponent * self.coefficient * (rm - 1.0) * rm
    }
}
