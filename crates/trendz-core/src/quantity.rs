//! Quantity selector state.

use serde::{Deserialize, Serialize};

/// Quantity shown next to the add-to-cart button.
///
/// Starts at 1 and has no bounds: decrementing past zero is allowed.
/// Arithmetic saturates at the `i64` limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    /// Initial quantity.
    pub const INITIAL: i64 = 1;

    /// Create a counter at the initial value.
    pub fn new() -> Self {
        Self(Self::INITIAL)
    }

    /// Add one.
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Subtract one.
    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    /// Return to the initial value.
    pub fn reset(&mut self) {
        self.0 = Self::INITIAL;
    }

    /// Current value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one() {
        assert_eq!(Quantity::new().value(), 1);
        assert_eq!(Quantity::default().value(), 1);
    }

    #[test]
    fn test_increments_then_decrements() {
        let mut qty = Quantity::new();
        for _ in 0..5 {
            qty.increment();
        }
        for _ in 0..2 {
            qty.decrement();
        }
        assert_eq!(qty.value(), 1 + 5 - 2);
    }

    #[test]
    fn test_goes_negative_without_clamping() {
        let mut qty = Quantity::new();
        qty.decrement();
        qty.decrement();
        qty.decrement();
        assert_eq!(qty.value(), -2);
    }

    #[test]
    fn test_reset() {
        let mut qty = Quantity::new();
        qty.increment();
        qty.reset();
        assert_eq!(qty.value(), 1);
    }
}
