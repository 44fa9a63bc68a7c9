//! Step-count distances with an explicit "unreached" sentinel.

use std::fmt;

/// Shortest walking distance in grid steps.
///
/// [`Distance::INFINITY`] marks a cell no traversal has reached. It
/// orders above every finite distance, so `min`/`<` comparisons behave
/// the same way they would on `f64::INFINITY`.
///
/// ```
/// use nook_core::Distance;
///
/// let d = Distance::ZERO.step();
/// assert_eq!(d, Distance::new(1));
/// assert!(d < Distance::INFINITY);
/// assert_eq!(Distance::INFINITY.step(), Distance::INFINITY);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Distance(u32);

impl Distance {
    /// Distance of a source from itself.
    pub const ZERO: Self = Self(0);

    /// Sentinel for an unreached cell.
    pub const INFINITY: Self = Self(u32::MAX);

    /// Largest representable finite distance.
    pub const MAX_FINITE: u32 = u32::MAX - 1;

    /// Create a finite distance. Values above [`MAX_FINITE`](Self::MAX_FINITE)
    /// saturate to it.
    pub const fn new(steps: u32) -> Self {
        if steps > Self::MAX_FINITE {
            Self(Self::MAX_FINITE)
        } else {
            Self(steps)
        }
    }

    /// Whether a traversal has reached this cell.
    pub const fn is_finite(self) -> bool {
        self.0 != u32::MAX
    }

    /// Step count, or `None` for [`INFINITY`](Self::INFINITY).
    pub const fn get(self) -> Option<u32> {
        if self.is_finite() {
            Some(self.0)
        } else {
            None
        }
    }

    /// One unit-cost step further. Infinity stays infinite and finite
    /// values saturate at [`MAX_FINITE`](Self::MAX_FINITE).
    pub const fn step(self) -> Self {
        if self.is_finite() {
            Self::new(self.0.saturating_add(1))
        } else {
            self
        }
    }

    /// `self / max` as a fraction, for gradient normalisation.
    ///
    /// Returns `0.0` when `max` is zero or either side is infinite.
    pub fn fraction_of(self, max: Self) -> f64 {
        match (self.get(), max.get()) {
            (Some(d), Some(m)) if m > 0 => d as f64 / m as f64,
            _ => 0.0,
        }
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::INFINITY
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(d) => write!(f, "{d}"),
            None => write!(f, "inf"),
        }
    }
}

impl From<u32> for Distance {
    fn from(steps: u32) -> Self {
        Self::new(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unreached() {
        assert_eq!(Distance::default(), Distance::INFINITY);
        assert!(!Distance::default().is_finite());
        assert_eq!(Distance::INFINITY.get(), None);
    }

    #[test]
    fn infinity_orders_above_finite() {
        assert!(Distance::new(Distance::MAX_FINITE) < Distance::INFINITY);
        assert!(Distance::ZERO < Distance::new(1));
    }

    #[test]
    fn new_saturates_below_sentinel() {
        assert_eq!(Distance::new(u32::MAX), Distance::new(Distance::MAX_FINITE));
        assert!(Distance::new(u32::MAX).is_finite());
        assert!(Distance::new(Distance::MAX_FINITE).step().is_finite());
    }

    #[test]
    fn fraction_handles_zero_max() {
        assert_eq!(Distance::new(3).fraction_of(Distance::ZERO), 0.0);
        assert_eq!(Distance::new(3).fraction_of(Distance::new(6)), 0.5);
        assert_eq!(Distance::INFINITY.fraction_of(Distance::new(6)), 0.0);
    }

    #[test]
    fn display() {
        assert_eq!(Distance::new(12).to_string(), "12");
        assert_eq!(Distance::INFINITY.to_string(), "inf");
    }
}
