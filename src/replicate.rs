// 📋 Replicate capability - independent, value-equal copies
//
// Composite shapes copy their owned corners instead of sharing them.

/// Produce an independent copy of `self`
pub trait Replicate {
    fn replicate(&self) -> Self;
}

/// Copy any replicable value through its capability
pub fn clone_object<T: Replicate>(original: &T) -> T {
    original.replicate()
}

// ============================================================================
// DOT
// ============================================================================

#[derive(Debug, PartialEq, Eq)]
pub struct Dot {
    pub x: i32,
    pub y: i32,
}

impl Dot {
    pub fn new(x: i32, y: i32) -> Self {
        Dot { x, y }
    }

    /// Copy constructor
    pub fn from_dot(other: &Dot) -> Self {
        Dot::new(other.x, other.y)
    }
}

impl Replicate for Dot {
    fn replicate(&self) -> Self {
        Dot::from_dot(self)
    }
}

// ============================================================================
// QUADRILATERAL
// ============================================================================

/// Axis-aligned shape described by two opposite corners
#[derive(Debug, PartialEq, Eq)]
pub struct Quadrilateral {
    pub upper_left: Dot,
    pub lower_right: Dot,
}

impl Quadrilateral {
    pub fn new(upper_left: Dot, lower_right: Dot) -> Self {
        Quadrilateral {
            upper_left,
            lower_right,
        }
    }

    /// Deep copy: both corners are rebuilt
    pub fn from_quadrilateral(other: &Quadrilateral) -> Self {
        Quadrilateral::new(
            Dot::from_dot(&other.upper_left),
            Dot::from_dot(&other.lower_right),
        )
    }
}

impl Replicate for Quadrilateral {
    fn replicate(&self) -> Self {
        Quadrilateral::from_quadrilateral(self)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_replicate_is_independent() {
        let mut original = Dot::new(1, 2);
        let copy = clone_object(&original);

        assert_eq!(copy, Dot::new(1, 2));

        original.x = 10;
        original.y = 20;

        // Copy keeps its own values
        assert_eq!(copy.x, 1);
        assert_eq!(copy.y, 2);
    }

    #[test]
    fn test_quadrilateral_deep_copy() {
        let mut original = Quadrilateral::new(Dot::new(1, 2), Dot::new(3, 4));
        let copy = clone_object(&original);

        assert_eq!(copy, original);

        original.upper_left.x = 100;
        original.lower_right = Dot::new(-1, -1);

        assert_eq!(copy.upper_left, Dot::new(1, 2));
        assert_eq!(copy.lower_right, Dot::new(3, 4));
    }

    #[test]
    fn test_replicate_via_trait_method() {
        let dot = Dot::new(-5, 7);
        assert_eq!(dot.replicate(), Dot::from_dot(&dot));
    }
}
