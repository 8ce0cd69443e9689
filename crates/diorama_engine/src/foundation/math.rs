//! Math utilities and types
//!
//! Provides the vector types used for scene transforms.

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Convert an angle in degrees to radians
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees.to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_deg_to_rad() {
        assert_relative_eq!(deg_to_rad(180.0), std::f32::consts::PI, epsilon = 1e-6);
        assert_relative_eq!(deg_to_rad(30.0), std::f32::consts::PI / 6.0, epsilon = 1e-6);
        assert_relative_eq!(deg_to_rad(0.0), 0.0);
    }
}
