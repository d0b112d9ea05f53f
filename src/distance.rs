use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Integer path cost from the source.
///
/// `Distance::INFINITY` marks a vertex no path has reached yet. It compares
/// greater than every finite distance and absorbs any weight added to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Distance(i64);

impl Distance {
    /// Unreached.
    pub const INFINITY: Distance = Distance(i64::MAX);

    /// Distance of the source to itself.
    pub const ZERO: Distance = Distance(0);

    /// Wrap a finite cost. `i64::MAX` is reserved for the sentinel and is
    /// clamped one below it.
    pub const fn new(cost: i64) -> Self {
        if cost == i64::MAX {
            Distance(i64::MAX - 1)
        } else {
            Distance(cost)
        }
    }

    pub const fn is_finite(&self) -> bool {
        self.0 != i64::MAX
    }

    /// The finite cost, or `None` for infinity.
    pub const fn get(&self) -> Option<i64> {
        if self.is_finite() { Some(self.0) } else { None }
    }

    /// Extend this distance by one edge weight.
    ///
    /// Infinity stays infinity. Finite sums saturate just below the sentinel
    /// so they never wrap or turn into infinity by accident.
    pub const fn add_weight(&self, weight: i64) -> Self {
        if !self.is_finite() {
            return Distance::INFINITY;
        }
        match self.0.checked_add(weight) {
            Some(sum) => Distance::new(sum),
            None if weight > 0 => Distance(i64::MAX - 1),
            None => Distance(i64::MIN),
        }
    }
}

impl Default for Distance {
    fn default() -> Self {
        Distance::INFINITY
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl From<i64> for Distance {
    fn from(cost: i64) -> Self {
        Distance::new(cost)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(cost) => write!(f, "{cost}"),
            None => f.write_str("∞"),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Distance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<i64>::deserialize(deserializer)?
            .map(Distance::new)
            .unwrap_or(Distance::INFINITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinity_is_larger_than_any_finite_distance() {
        assert!(Distance::INFINITY > Distance::new(i64::MAX - 1));
        assert!(Distance::INFINITY > Distance::ZERO);
        assert!(Distance::new(-5) < Distance::ZERO);
    }

    #[test]
    fn infinity_absorbs_weights() {
        assert_eq!(Distance::INFINITY.add_weight(10), Distance::INFINITY);
        assert_eq!(Distance::INFINITY.add_weight(-10), Distance::INFINITY);
    }

    #[test]
    fn finite_sums_saturate_below_infinity() {
        let near_max = Distance::new(i64::MAX - 3);
        let sum = near_max.add_weight(100);
        assert!(sum.is_finite());
        assert!(sum < Distance::INFINITY);
        assert_eq!(Distance::new(4).add_weight(1), Distance::new(5));
    }

    #[test]
    fn display_uses_infinity_symbol() {
        assert_eq!(Distance::new(42).to_string(), "42");
        assert_eq!(Distance::INFINITY.to_string(), "∞");
        assert_eq!(Distance::default(), Distance::INFINITY);
    }
}
