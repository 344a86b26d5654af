use crate::error::MatrixError;
use crate::framebuffer::Framebuffer;
use crate::layout::{PANEL_SIZE, chain_order};

use super::{BitOrder, MatrixBus, Register};

/// Start-up register writes, in order
const INIT_SEQUENCE: [(Register, u8); 5] = [
    (Register::DisplayTest, 0x00),
    (Register::ScanLimit, 0x07),
    (Register::Shutdown, 0x01),
    (Register::Intensity, Register::MAX_INTENSITY),
    (Register::DecodeMode, 0x00),
];

/// Serpentine chain of `X` by `Y` MAX7219 panels
///
/// Every controller in the chain receives one (address, data) pair per
/// transaction; the chain-select rising edge commits them all at once.
pub struct Max7219Chain<B: MatrixBus, const X: usize, const Y: usize> {
    bus: B,
}

impl<B: MatrixBus, const X: usize, const Y: usize> Max7219Chain<B, X, Y> {
    /// Number of controllers in the chain
    pub const PANELS: usize = X * Y;

    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Run one select/deselect transaction.
    ///
    /// Chain-select is released even when shifting fails.
    fn transaction(
        &mut self,
        body: impl FnOnce(&mut B) -> Result<(), B::Error>,
    ) -> Result<(), MatrixError<B::Error>> {
        self.bus.select()?;
        let shifted = body(&mut self.bus);
        self.bus.deselect()?;
        shifted.map_err(MatrixError::Bus)
    }

    /// Write the same register value to every controller
    pub fn broadcast(
        &mut self,
        register: Register,
        value: u8,
    ) -> Result<(), MatrixError<B::Error>> {
        self.transaction(|bus| {
            for _ in 0..Self::PANELS {
                bus.shift_out(register.addr(), BitOrder::MsbFirst)?;
                bus.shift_out(value, BitOrder::MsbFirst)?;
            }
            Ok(())
        })
    }

    /// Configure every controller for raw 8x8 matrix output
    pub fn init(&mut self, intensity: u8) -> Result<(), MatrixError<B::Error>> {
        for (register, value) in INIT_SEQUENCE {
            let value = match register {
                Register::Intensity => intensity.min(Register::MAX_INTENSITY),
                _ => value,
            };
            log::debug!("max7219: {:?} <- {:#04x}", register, value);
            self.broadcast(register, value)?;
        }
        log::info!("max7219: initialized {} panels ({}x{})", Self::PANELS, X, Y);
        Ok(())
    }

    /// Set LED intensity (0..=15, clamped)
    pub fn set_intensity(&mut self, level: u8) -> Result<(), MatrixError<B::Error>> {
        self.broadcast(Register::Intensity, level.min(Register::MAX_INTENSITY))
    }

    /// Enter or leave shutdown mode. Display data is retained.
    pub fn shutdown(&mut self, off: bool) -> Result<(), MatrixError<B::Error>> {
        self.broadcast(Register::Shutdown, u8::from(!off))
    }

    /// Push the whole framebuffer, one pixel row of every panel per
    /// transaction.
    pub fn show(&mut self, frame: &Framebuffer<X, Y>) -> Result<(), MatrixError<B::Error>> {
        for row in 0..PANEL_SIZE {
            self.transaction(|bus| {
                for panel in chain_order(X, Y) {
                    let wiring = panel.wiring(row, X);
                    bus.shift_out(wiring.address, BitOrder::MsbFirst)?;
                    bus.shift_out(frame.row_byte(wiring.column, panel.band, row), wiring.order)?;
                }
                Ok(())
            })?;
        }
        Ok(())
    }
}
