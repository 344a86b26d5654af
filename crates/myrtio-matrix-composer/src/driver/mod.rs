//! Matrix output abstraction layer
//!
//! Provides a trait-based abstraction for the shift-register bus of a
//! MAX7219 chain, allowing the engine to be hardware-agnostic.

mod bitbang;
mod max7219;

pub use bitbang::BitBangBus;
pub use max7219::Max7219Chain;

/// Order in which the bits of a byte are shifted out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

/// Abstract chain bus
///
/// Implement this trait to support different hardware platforms.
/// A transaction is `select`, any number of `shift_out`, then `deselect`,
/// which latches everything shifted into the chain.
pub trait MatrixBus {
    type Error: core::fmt::Debug;

    /// Open a transaction (chain-select low)
    fn select(&mut self) -> Result<(), Self::Error>;

    /// Close a transaction (chain-select high)
    fn deselect(&mut self) -> Result<(), Self::Error>;

    /// Shift one byte into the chain
    fn shift_out(&mut self, byte: u8, order: BitOrder) -> Result<(), Self::Error>;
}

/// MAX7219 register addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    NoOp = 0x00,
    Digit0 = 0x01,
    Digit1 = 0x02,
    Digit2 = 0x03,
    Digit3 = 0x04,
    Digit4 = 0x05,
    Digit5 = 0x06,
    Digit6 = 0x07,
    Digit7 = 0x08,
    DecodeMode = 0x09,
    Intensity = 0x0A,
    ScanLimit = 0x0B,
    Shutdown = 0x0C,
    DisplayTest = 0x0F,
}

impl Register {
    /// Highest intensity level the controller accepts
    pub const MAX_INTENSITY: u8 = 0x0F;

    pub const fn addr(self) -> u8 {
        self as u8
    }
}
