//! Ripple effect
//!
//! Paints concentric rings around a slowly orbiting centre. The ring a
//! pixel belongs to is its integer distance from the centre, tracked
//! incrementally across the scan so no pixel needs a square root.
//!
//! Scan order per frame:
//! - rows above the centre (quadrants II and I), row tracker closing
//! - remaining rows (quadrants III and IV), row tracker receding
//!
//! and within every row the columns left of the centre first, then the
//! rest. Each row's column scan starts from a copy of the row tracker.

use crate::framebuffer::{FrameWriter, Framebuffer};
use crate::radius::{Approach, RadiusTracker};

use super::phase::AnimationPhase;

/// Ring value for an integer radius: 8 lit units, then 8 dark ones
#[inline]
pub fn band_bit(root: i32, travel: u8) -> bool {
    (root + i32::from(travel)) & 8 != 0
}

/// Ripple animation, owning its phase state
#[derive(Debug, Clone, Default)]
pub struct RippleEffect {
    phase: AnimationPhase,
}

impl RippleEffect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a specific phase
    pub fn with_phase(phase: AnimationPhase) -> Self {
        Self { phase }
    }

    pub fn phase(&self) -> &AnimationPhase {
        &self.phase
    }

    /// Advance one frame and overwrite `frame` with it
    pub fn render<const X: usize, const Y: usize>(&mut self, frame: &mut Framebuffer<X, Y>) {
        self.phase.advance();
        let (x_offset, y_offset) = self.phase.centre_offset::<X, Y>();
        render_frame(frame, x_offset, y_offset, self.phase.travel);
    }
}

/// Paint one frame with the top-left pixel at (`x_offset`, `y_offset`)
/// from the ripple centre.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn render_frame<const X: usize, const Y: usize>(
    frame: &mut Framebuffer<X, Y>,
    x_offset: i32,
    y_offset: i32,
    travel: u8,
) {
    let width = Framebuffer::<X, Y>::WIDTH as i32;
    let height = Framebuffer::<X, Y>::HEIGHT as i32;
    let above = (-y_offset).clamp(0, height);

    let mut writer = frame.writer();
    let mut row = RadiusTracker::seed(x_offset, y_offset);
    let mut scan =
        |tracker: &RadiusTracker| scan_row(&mut writer, *tracker, x_offset, width, travel);

    row.sweep(Approach::Closing, y_offset, above, &mut scan);
    row.sweep(Approach::Receding, y_offset + above, height - above, &mut scan);
}

/// Emit one row starting from the row's tracker at column 0
fn scan_row(
    writer: &mut FrameWriter<'_>,
    mut column: RadiusTracker,
    x_offset: i32,
    width: i32,
    travel: u8,
) {
    let left = (-x_offset).clamp(0, width);
    let mut emit = |tracker: &RadiusTracker| writer.push(band_bit(tracker.root(), travel));

    column.sweep(Approach::Closing, x_offset, left, &mut emit);
    column.sweep(Approach::Receding, x_offset + left, width - left, &mut emit);
}
