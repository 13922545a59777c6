/// Changing consts in this file will change the exported tables
/// please don't do that unless the simulator input changes too
pub const FAKE_HS_DIAMETER: f64 = 1.0;
// tolerance on ecc + radius agreement between the two patches
pub const GEOMETRY_TOLERANCE: f64 = 1e-10;
// center-to-center distance used by the angular slices
pub const CONTACT_DISTANCE: f64 = 1.0;
pub const ANGULAR_STEP_DEGREES: usize = 5;
pub const FULL_TURN_DEGREES: usize = 360;
