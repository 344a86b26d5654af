//! Panel addressing for the serpentine chain
//!
//! Panels are numbered in raster order (`column + band * X`). Consecutive
//! bands are wired in alternating direction, so every panel needs its own
//! row address, framebuffer column and bit order when a row is shifted out.

use crate::driver::BitOrder;

/// Width and height of a single panel in pixels
pub const PANEL_SIZE: usize = 8;

/// Position of a panel in the logical grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelPosition {
    /// Index in raster order
    pub segment: usize,
    /// Panel column (`segment % X`)
    pub column: usize,
    /// Panel row, i.e. horizontal band of panels (`segment / X`)
    pub band: usize,
}

/// What gets shifted to one panel for one of its pixel rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowWiring {
    /// MAX7219 digit register (1..=8)
    pub address: u8,
    /// Panel column to read the row byte from
    pub column: usize,
    /// Bit order of the data byte
    pub order: BitOrder,
}

impl PanelPosition {
    /// Derive the position of a panel from its chain index
    pub const fn from_segment(segment: usize, x_panels: usize) -> Self {
        Self {
            segment,
            column: segment % x_panels,
            band: segment / x_panels,
        }
    }

    /// Odd bands run the same direction as the framebuffer
    pub const fn is_odd_band(&self) -> bool {
        self.band % 2 == 1
    }

    /// Resolve the wiring of pixel row `row` (0..8) of this panel.
    ///
    /// Even bands are mounted rotated: their rows are addressed bottom-up
    /// from the controller's point of view and their columns are mirrored,
    /// so the byte is read from `X - 1 - column` and sent MSB first. Odd
    /// bands count rows down from 8 and send the byte LSB first.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn wiring(&self, row: usize, x_panels: usize) -> RowWiring {
        if self.is_odd_band() {
            RowWiring {
                address: (PANEL_SIZE - row) as u8,
                column: self.column,
                order: BitOrder::LsbFirst,
            }
        } else {
            RowWiring {
                address: (1 + row) as u8,
                column: x_panels - 1 - self.column,
                order: BitOrder::MsbFirst,
            }
        }
    }
}

/// Panels in the order they are shifted out: last panel first.
///
/// The first byte shifted into the chain ends up in the farthest controller.
pub fn chain_order(x_panels: usize, y_panels: usize) -> impl Iterator<Item = PanelPosition> {
    (0..x_panels * y_panels)
        .rev()
        .map(move |segment| PanelPosition::from_segment(segment, x_panels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_derived_from_segment() {
        let panel = PanelPosition::from_segment(6, 4);
        assert_eq!(panel.column, 2);
        assert_eq!(panel.band, 1);
        assert!(panel.is_odd_band());
    }

    #[test]
    fn even_band_is_mirrored() {
        let panel = PanelPosition::from_segment(3, 4);
        let wiring = panel.wiring(0, 4);
        assert_eq!(wiring.address, 1);
        assert_eq!(wiring.column, 0);
        assert_eq!(wiring.order, BitOrder::MsbFirst);
        assert_eq!(panel.wiring(7, 4).address, 8);
    }

    #[test]
    fn odd_band_counts_rows_down() {
        let panel = PanelPosition::from_segment(4, 4);
        let wiring = panel.wiring(0, 4);
        assert_eq!(wiring.address, 8);
        assert_eq!(wiring.column, 0);
        assert_eq!(wiring.order, BitOrder::LsbFirst);
        assert_eq!(panel.wiring(7, 4).address, 1);
    }

    #[test]
    fn chain_order_starts_with_last_panel() {
        let segments: Vec<usize> = chain_order(3, 2).map(|panel| panel.segment).collect();
        assert_eq!(segments, [5, 4, 3, 2, 1, 0]);
        assert_eq!(chain_order(4, 4).count(), 16);
    }
}
