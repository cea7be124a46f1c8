//! GPIO pin abstractions
//!
//! The panel needs two discrete outputs: the controller reset line and the
//! backlight enable. Both are driven through [`OutputPin`].

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        level: bool,
        writes: u32,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.level = true;
            self.writes += 1;
        }

        fn set_low(&mut self) {
            self.level = false;
            self.writes += 1;
        }

        fn is_set_high(&self) -> bool {
            self.level
        }
    }

    #[test]
    fn test_set_state_drives_level() {
        let mut pin = MockPin {
            level: false,
            writes: 0,
        };

        pin.set_state(true);
        assert!(pin.is_set_high());
        pin.set_state(false);
        assert!(pin.is_set_low());
        assert_eq!(pin.writes, 2);
    }
}
