//! Bit-packed monochrome framebuffer
//!
//! One byte holds 8 horizontally adjacent pixels, leftmost pixel in the
//! most significant bit. Bytes are in pixel raster order, so pixel row `y`
//! is the `X` bytes starting at `y * X`, and a panel's 8 pixel rows are
//! `X` bytes apart.

use crate::layout::PANEL_SIZE;

/// Pixel write mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PixelMode {
    /// Turn the pixel off
    Clear = 0,
    /// Turn the pixel on
    Plot = 1,
    /// Toggle the pixel
    Xor = 2,
}

/// Framebuffer for a grid of `X` by `Y` panels
///
/// Stored as bands of panel rows: `bands[band][row][column]`, which flattens
/// to exactly the raster byte order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer<const X: usize, const Y: usize> {
    bands: [[[u8; X]; PANEL_SIZE]; Y],
}

impl<const X: usize, const Y: usize> Default for Framebuffer<X, Y> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const X: usize, const Y: usize> Framebuffer<X, Y> {
    /// Grid width in pixels
    pub const WIDTH: usize = X * PANEL_SIZE;
    /// Grid height in pixels
    pub const HEIGHT: usize = Y * PANEL_SIZE;
    /// Buffer length in bytes
    pub const LEN: usize = X * Y * PANEL_SIZE;

    /// Create a blank framebuffer
    pub const fn new() -> Self {
        Self {
            bands: [[[0; X]; PANEL_SIZE]; Y],
        }
    }

    /// Write a pixel without bounds checking against the grid.
    ///
    /// # Panics
    /// Panics if `x >= WIDTH` or `y >= HEIGHT`.
    pub fn set_pixel(&mut self, x: usize, y: usize, mode: PixelMode) {
        let byte = &mut self.bands[y / PANEL_SIZE][y % PANEL_SIZE][x / 8];
        let mask = 0x80 >> (x % 8);
        match mode {
            PixelMode::Clear => *byte &= !mask,
            PixelMode::Plot => *byte |= mask,
            PixelMode::Xor => *byte ^= mask,
        }
    }

    /// Write a pixel, ignoring coordinates outside the grid
    pub fn safe_pixel(&mut self, x: usize, y: usize, mode: PixelMode) {
        if x >= Self::WIDTH || y >= Self::HEIGHT {
            return;
        }
        self.set_pixel(x, y, mode);
    }

    /// Read a pixel, `None` outside the grid
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x >= Self::WIDTH || y >= Self::HEIGHT {
            return None;
        }
        let byte = self.bands[y / PANEL_SIZE][y % PANEL_SIZE][x / 8];
        Some(byte & (0x80 >> (x % 8)) != 0)
    }

    /// Turn off every pixel
    pub fn clear(&mut self) {
        self.as_bytes_mut().fill(0);
    }

    /// Byte holding pixel row `row` of the panel at (`column`, `band`)
    pub fn row_byte(&self, column: usize, band: usize, row: usize) -> u8 {
        self.bands[band][row][column]
    }

    /// Raw bytes in raster order
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.bands.as_slice())
    }

    /// Mutable raw bytes in raster order
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(self.bands.as_mut_slice())
    }

    /// Cursor that packs pixels into the buffer from the top-left corner
    pub fn writer(&mut self) -> FrameWriter<'_> {
        FrameWriter::new(self.as_bytes_mut())
    }
}

/// Write cursor packing successive pixels MSB first into bytes
pub struct FrameWriter<'a> {
    bytes: &'a mut [u8],
    cursor: usize,
    pending: u8,
    bits: u8,
}

impl<'a> FrameWriter<'a> {
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self {
            bytes,
            cursor: 0,
            pending: 0,
            bits: 0,
        }
    }

    /// Append one pixel. A byte is stored once 8 pixels are collected.
    ///
    /// Pixels past the end of the buffer are dropped.
    #[inline]
    pub fn push(&mut self, on: bool) {
        self.pending = (self.pending << 1) | u8::from(on);
        self.bits += 1;
        if self.bits == 8 {
            if let Some(byte) = self.bytes.get_mut(self.cursor) {
                *byte = self.pending;
            }
            self.cursor += 1;
            self.pending = 0;
            self.bits = 0;
        }
    }

    /// Number of complete bytes written so far
    pub fn position(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Fb = Framebuffer<4, 4>;

    #[test]
    fn dimensions_follow_panel_grid() {
        assert_eq!(Fb::WIDTH, 32);
        assert_eq!(Fb::HEIGHT, 32);
        assert_eq!(Fb::LEN, 128);
        assert_eq!(Fb::new().as_bytes().len(), Fb::LEN);
        assert_eq!(Framebuffer::<3, 2>::new().as_bytes().len(), 48);
    }

    #[test]
    fn set_pixel_uses_raster_byte_index() {
        let mut fb = Fb::new();
        fb.set_pixel(9, 3, PixelMode::Plot);
        // x / 8 + y * X
        assert_eq!(fb.as_bytes()[1 + 3 * 4], 0b0100_0000);
        fb.set_pixel(31, 31, PixelMode::Plot);
        assert_eq!(fb.as_bytes()[127], 0b0000_0001);
        assert_eq!(fb.row_byte(3, 3, 7), 0b0000_0001);
    }

    #[test]
    fn clear_zeroes_everything() {
        let mut fb = Fb::new();
        fb.as_bytes_mut().fill(0xA5);
        fb.clear();
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
        fb.clear();
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn plotted_pixels_are_the_only_ones_set() {
        let mut fb = Fb::new();
        fb.clear();
        let plotted = [(0, 0), (7, 0), (8, 1), (17, 12), (31, 31), (5, 30)];
        for &(x, y) in &plotted {
            fb.set_pixel(x, y, PixelMode::Plot);
        }
        for y in 0..Fb::HEIGHT {
            for x in 0..Fb::WIDTH {
                assert_eq!(fb.pixel(x, y), Some(plotted.contains(&(x, y))), "({x}, {y})");
            }
        }
    }

    #[test]
    fn xor_round_trips() {
        let mut fb = Fb::new();
        fb.set_pixel(12, 20, PixelMode::Plot);
        fb.set_pixel(12, 20, PixelMode::Xor);
        assert_eq!(fb.pixel(12, 20), Some(false));

        fb.clear();
        fb.set_pixel(12, 20, PixelMode::Xor);
        assert_eq!(fb.pixel(12, 20), Some(true));

        fb.set_pixel(12, 20, PixelMode::Clear);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn safe_pixel_ignores_out_of_range() {
        let mut fb = Fb::new();
        fb.set_pixel(3, 3, PixelMode::Plot);
        let before = fb.clone();
        for mode in [PixelMode::Clear, PixelMode::Plot, PixelMode::Xor] {
            fb.safe_pixel(32, 0, mode);
            fb.safe_pixel(0, 32, mode);
            fb.safe_pixel(usize::MAX, 5, mode);
            fb.safe_pixel(100, 100, mode);
        }
        assert_eq!(fb, before);
        assert_eq!(fb.pixel(32, 0), None);

        fb.safe_pixel(31, 31, PixelMode::Plot);
        assert_eq!(fb.pixel(31, 31), Some(true));
    }

    #[test]
    #[should_panic]
    fn set_pixel_out_of_range_panics() {
        let mut fb = Fb::new();
        fb.set_pixel(0, 32, PixelMode::Plot);
    }

    #[test]
    fn writer_packs_msb_first() {
        let mut fb = Framebuffer::<1, 1>::new();
        let mut writer = fb.writer();
        for bit in [true, false, true, true, false, false, false, true] {
            writer.push(bit);
        }
        writer.push(true);
        assert_eq!(writer.position(), 1);
        assert_eq!(fb.as_bytes()[0], 0b1011_0001);
        assert_eq!(fb.as_bytes()[1], 0);
    }

    #[test]
    fn writer_drops_overflow() {
        let mut bytes = [0u8; 1];
        let mut writer = FrameWriter::new(&mut bytes);
        for _ in 0..16 {
            writer.push(true);
        }
        assert_eq!(writer.position(), 2);
        assert_eq!(bytes, [0xFF]);
    }
}
