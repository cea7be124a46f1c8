//! Events that move the addressing state machine

use crate::geometry::Window;

/// Bus activity that changes what the controller is addressing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WindowEvent {
    /// Column and row ranges were written
    WindowSet(Window),
    /// Memory-write command was issued
    RamWriteArmed,
    /// Any other command; ends a memory write
    CommandIssued,
    /// One pixel was written
    PixelWritten,
    /// A NOP ended the memory write
    Padded,
    /// The transport failed; the controller state is unknown
    TransportFailed,
}
