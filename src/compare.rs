// ⚖️ Comparison capability - three-way ordering between two values

use crate::error::{RecordError, Result};
use std::cmp::Ordering;

/// Three-way comparison between two values of the same type
pub trait Assess {
    fn assess(x: &Self, y: &Self) -> Ordering;
}

/// Signed comparison result: -1, 0 or 1
pub fn compare_values<T: Assess>(x: &T, y: &T) -> i32 {
    match T::assess(x, y) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

// ============================================================================
// COMPLEX NUMBER (compared by modulus)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexNumber {
    pub real: f64,
    pub imaginary: f64,
}

impl ComplexNumber {
    pub fn new(real: f64, imaginary: f64) -> Self {
        ComplexNumber { real, imaginary }
    }

    pub fn modulus(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }
}

impl Assess for ComplexNumber {
    fn assess(x: &Self, y: &Self) -> Ordering {
        x.modulus().total_cmp(&y.modulus())
    }
}

// ============================================================================
// RATIO (compared by value)
// ============================================================================

/// Fraction with a non-zero denominator
///
/// The sign lives on the numerator: `Ratio::new(3, -5)` stores `-3/5`.
/// The denominator stays negative when either part is `i32::MIN`.
///
/// `==` compares values, so `1/2 == 2/4`.
#[derive(Debug, Clone, Copy)]
pub struct Ratio {
    numerator: i32,
    denominator: i32,
}

impl Ratio {
    pub fn new(numerator: i32, denominator: i32) -> Result<Self> {
        if denominator == 0 {
            return Err(RecordError::ZeroDenominator { numerator });
        }

        // i32::MIN can't be negated, keep the original sign in that case
        let (numerator, denominator) = if denominator < 0 {
            match (numerator.checked_neg(), denominator.checked_neg()) {
                (Some(n), Some(d)) => (n, d),
                _ => (numerator, denominator),
            }
        } else {
            (numerator, denominator)
        };

        Ok(Ratio {
            numerator,
            denominator,
        })
    }

    pub fn numerator(&self) -> i32 {
        self.numerator
    }

    pub fn denominator(&self) -> i32 {
        self.denominator
    }

    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        Ratio::assess(self, other) == Ordering::Equal
    }
}

impl Eq for Ratio {}

impl Assess for Ratio {
    fn assess(x: &Self, y: &Self) -> Ordering {
        // a/b vs c/d  <=>  a*d vs c*b, widened so the products can't overflow
        let lhs = x.numerator as i64 * y.denominator as i64;
        let rhs = y.numerator as i64 * x.denominator as i64;

        // Multiplying by a negative denominator flips the inequality
        let flip = (x.denominator < 0) != (y.denominator < 0);
        let ordering = lhs.cmp(&rhs);
        if flip {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
