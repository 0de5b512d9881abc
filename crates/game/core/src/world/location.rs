use std::fmt;

/// Unique identifier of a world location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocationId(pub u32);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "location#{}", self.0)
    }
}

/// Grid coordinate of a location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when `other` is exactly one step away along a single axis.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        let dx = (i64::from(self.x) - i64::from(other.x)).abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).abs();
        (dx == 1 && dy == 0) || (dx == 0 && dy == 1)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A vertex of the world graph.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationNode {
    pub id: LocationId,
    pub name: String,
    pub position: Coordinate,
    /// Minimum character level allowed to travel here.
    #[cfg_attr(feature = "serde", serde(default = "LocationNode::default_level_required"))]
    pub level_required: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub region: Option<String>,
}

impl LocationNode {
    pub fn new(id: LocationId, name: impl Into<String>, position: Coordinate) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            level_required: 1,
            region: None,
        }
    }

    #[must_use]
    pub fn with_level_required(mut self, level: u32) -> Self {
        self.level_required = level;
        self
    }

    #[cfg(feature = "serde")]
    fn default_level_required() -> u32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_requires_single_axis_step() {
        let origin = Coordinate::ORIGIN;
        assert!(origin.is_adjacent(&Coordinate::new(1, 0)));
        assert!(origin.is_adjacent(&Coordinate::new(0, -1)));
        assert!(!origin.is_adjacent(&Coordinate::new(1, 1)));
        assert!(!origin.is_adjacent(&Coordinate::new(2, 0)));
        assert!(!origin.is_adjacent(&origin));
    }

    #[test]
    fn adjacency_does_not_overflow_at_bounds() {
        let low = Coordinate::new(i32::MIN, 0);
        let high = Coordinate::new(i32::MAX, 0);
        assert!(!low.is_adjacent(&high));
    }
}
