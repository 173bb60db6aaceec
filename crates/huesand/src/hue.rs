//! Frame-driven hue counter stamped onto newly placed particles.

/// Number of distinct hues on the color wheel.
pub const HUE_RANGE: u16 = 360;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HueCycle {
    current: u16,
}

impl HueCycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once per frame, whether or not anything was placed.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % HUE_RANGE;
    }

    #[must_use]
    pub fn value(&self) -> u16 {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(HueCycle::new().value(), 0);
    }

    #[test]
    fn wraps_after_359() {
        let mut hue = HueCycle::new();
        for _ in 0..359 {
            hue.advance();
        }
        assert_eq!(hue.value(), 359);
        hue.advance();
        assert_eq!(hue.value(), 0);
    }

    proptest! {
        #[test]
        fn prop_advance_is_mod_360(n in 0u32..5000) {
            let mut hue = HueCycle::new();
            for _ in 0..n {
                hue.advance();
            }
            prop_assert_eq!(u32::from(hue.value()), n % 360);
        }
    }
}
