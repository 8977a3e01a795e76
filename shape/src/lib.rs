mod sphere;

pub use sphere::{Sphere, HIT_EPSILON};
