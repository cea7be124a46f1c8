//! Addressing state machine
//!
//! Pixel data is only meaningful after a window has been programmed and the
//! memory-write command issued. Anything that may have left the controller
//! in an unknown place (a failed transfer, a NOP) drops back to `Idle`.

use super::events::WindowEvent;
use crate::geometry::Window;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WindowState {
    /// No known window
    #[default]
    Idle,
    /// Ranges written, memory write not yet issued
    Programmed(Window),
    /// Pixel data goes into this window
    Streaming(Window),
}

impl WindowState {
    pub fn transition(self, event: WindowEvent) -> Self {
        use WindowEvent::*;
        use WindowState::*;

        match (self, event) {
            (_, WindowSet(window)) => Programmed(window),

            // Re-arming restarts at the window origin
            (Programmed(window), RamWriteArmed) => Streaming(window),
            (Streaming(window), RamWriteArmed) => Streaming(window),

            (Streaming(window), PixelWritten) => Streaming(window),
            (Streaming(window), CommandIssued) => Programmed(window),

            (_, Padded) => Idle,
            (_, TransportFailed) => Idle,

            // Default: stay in current state
            _ => self,
        }
    }

    /// True when pixel writes are accepted
    pub fn is_streaming(&self) -> bool {
        matches!(self, WindowState::Streaming(_))
    }
}
