//! Infrastructure layer - hardware bindings
//!
//! Wires the board's GPIOs to the hardware-agnostic matrix composer and
//! runs its render loop as an embassy task.

pub(crate) mod config;
pub(crate) mod drivers;
pub(crate) mod tasks;
pub(crate) mod types;
