/// Small helpers on `f64` used across the crates and their tests.
pub trait Float: Sized {
    /// Absolute distance between `self` and `other`.
    fn dist_to(self, other: Self) -> Self;
    /// Computes `self / divisor` if the divisor is nonzero; returns `None` otherwise.
    fn try_divide(self, divisor: Self) -> Option<Self>;
}

impl Float for f64 {
    /// ```
    /// use math::float::Float;
    /// assert_eq!(1.0f64.dist_to(0.25), 0.75);
    /// assert_eq!(0.25f64.dist_to(1.0), 0.75);
    /// ```
    fn dist_to(self, other: f64) -> f64 {
        (self - other).abs()
    }

    /// ```
    /// use math::float::Float;
    /// assert_eq!(1.0f64.try_divide(0.0), None);
    /// assert_eq!(1.0f64.try_divide(2.5), Some(0.4));
    /// assert_eq!(0.0f64.try_divide(2.5), Some(0.0));
    /// ```
    fn try_divide(self, divisor: Self) -> Option<Self> {
        if divisor == 0.0 {
            None
        } else {
            Some(self / divisor)
        }
    }
}

/// Divides the given `interval` evenly into `count` pieces and returns the midpoint of each piece
/// together with the spacing between adjacent midpoints.
pub fn linspace(interval: (f64, f64), count: i32) -> (Vec<f64>, f64) {
    let (a, b) = interval;
    (
        (0..count)
            .map(|i| (i as f64 + 0.5) / count as f64 * (b - a) + a)
            .collect::<Vec<_>>(),
        (b - a) / count as f64,
    )
}

pub fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[macro_export]
macro_rules! assert_le {
    ($left:expr, $right:expr) => {
        if $left > $right {
            panic!(
                "Assertion failed: {} <= {} (values: {} vs. {})",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}

#[macro_export]
macro_rules! assert_ge {
    ($left:expr, $right:expr) => {
        if $left < $right {
            panic!(
                "Assertion failed: {} >= {} (values: {} vs. {})",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}
