// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Scale a vector to unit length.
///
/// The caller guarantees `v` is not zero-length.
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    v / v.length()
}
