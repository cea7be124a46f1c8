//! Blocking delays
//!
//! The controller power-up sequence has fixed settle times (reset pulse,
//! sleep-out, display-on). The driver only ever blocks in whole milliseconds.

/// Millisecond delay provider
pub trait DelayMs {
    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<T: DelayMs + ?Sized> DelayMs for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        T::delay_ms(self, ms)
    }
}
