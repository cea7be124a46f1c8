//! Controller state
//!
//! [`DeviceState`] holds the per-orientation panel constants, fixed at init.
//! [`WindowState`] tracks the addressing state machine that every GRAM
//! write goes through:
//!
//! ```text
//!   Idle ──WindowSet──▶ Programmed ──RamWriteArmed──▶ Streaming ◀─┐
//!    ▲                      ▲                          │  │        │
//!    │                      └─WindowSet/CommandIssued──┘  └─Pixel──┘
//!    └──────────── Padded / TransportFailed (any state)
//! ```

pub mod device;
pub mod events;
pub mod window;

pub use device::{
    DeviceState, Orientation, COLUMN_ADDRESS_SET, MEMORY_WRITE, PAGE_ADDRESS_SET,
};
pub use events::WindowEvent;
pub use window::WindowState;
