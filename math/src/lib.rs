/// Defines useful functions for common math operations and tools:
/// - Distance and guarded-division helpers on `f64`,
/// - Midpoint grids over an interval (`linspace`),
/// - Macros to check if two math quantities are less than / greater than (or
///   equal to) each other.
pub mod float;

/// Coordinate maths module.
/// - Types: 3D points and vectors.
/// - Function `make_coord_system()` to build an orthonormal base from a `Vec3`.
/// - Function `reflect()` to compute the mirror direction about a normal.
pub mod hcm;

/// Provides `Prob` struct representing a probability mass or probability density.
pub mod prob;
