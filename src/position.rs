use xyzvec::XYVec;

pub type DimVec = XYVec<f64>;
pub type Orientation = DimVec;
pub type Position = DimVec;

pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}
