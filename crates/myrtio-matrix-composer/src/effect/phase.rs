//! Animation phase state
//!
//! Two integer oscillators orbit the origin using a rotation-like
//! recurrence in 8.8 fixed point; their whole parts position the ripple
//! centre. The travel counter moves the rings outward.

use crate::layout::PANEL_SIZE;

/// Shift of the slow oscillator (one orbit every ~400 frames)
pub const SLOW_SHIFT: u8 = 6;
/// Shift of the fast oscillator, orbiting about twice as fast
pub const FAST_SHIFT: u8 = 5;
/// Starting x of both oscillators, 15.0 in 8.8 fixed point
pub const INITIAL_AMPLITUDE: i16 = 15 << 8;

/// 8.8 fixed-point oscillator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Oscillator {
    x: i16,
    y: i16,
    shift: u8,
}

impl Oscillator {
    pub const fn new(x: i16, y: i16, shift: u8) -> Self {
        Self { x, y, shift }
    }

    /// Advance one step: `x -= y >> shift; y += x >> shift`
    #[inline]
    pub fn step(&mut self) {
        self.x = self.x.wrapping_sub(self.y >> self.shift);
        self.y = self.y.wrapping_add(self.x >> self.shift);
    }

    pub const fn x(&self) -> i16 {
        self.x
    }

    pub const fn y(&self) -> i16 {
        self.y
    }

    /// Integer part of `x`
    pub const fn whole_x(&self) -> i16 {
        self.x >> 8
    }
}

/// State that evolves from frame to frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationPhase {
    /// Drives the horizontal centre offset
    pub slow: Oscillator,
    /// Drives the vertical centre offset
    pub fast: Oscillator,
    /// Ring phase, decremented every frame
    pub travel: u8,
}

impl Default for AnimationPhase {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPhase {
    pub const fn new() -> Self {
        Self {
            slow: Oscillator::new(INITIAL_AMPLITUDE, 0, SLOW_SHIFT),
            fast: Oscillator::new(INITIAL_AMPLITUDE, 0, FAST_SHIFT),
            travel: 0,
        }
    }

    /// Evolve by one frame
    pub fn advance(&mut self) {
        self.slow.step();
        self.fast.step();
        self.travel = self.travel.wrapping_sub(1);
    }

    /// Offset of the top-left pixel from the ripple centre.
    ///
    /// Each oscillator's whole part is recentred by half the grid extent so
    /// the full excursion stays within a `X` by `Y` panel grid.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn centre_offset<const X: usize, const Y: usize>(&self) -> (i32, i32) {
        let half_width = (X * PANEL_SIZE / 2) as i32;
        let half_height = (Y * PANEL_SIZE / 2) as i32;
        (
            i32::from(self.slow.whole_x()) - half_width,
            i32::from(self.fast.whole_x()) - half_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_steps_follow_recurrence() {
        let mut slow = Oscillator::new(INITIAL_AMPLITUDE, 0, SLOW_SHIFT);
        slow.step();
        assert_eq!((slow.x(), slow.y()), (3840, 60));
        slow.step();
        assert_eq!((slow.x(), slow.y()), (3840, 120));
        slow.step();
        assert_eq!((slow.x(), slow.y()), (3839, 179));

        let mut fast = Oscillator::new(INITIAL_AMPLITUDE, 0, FAST_SHIFT);
        fast.step();
        assert_eq!((fast.x(), fast.y()), (3840, 120));
    }

    #[test]
    fn advance_wraps_travel() {
        let mut phase = AnimationPhase::new();
        phase.advance();
        assert_eq!(phase.travel, 255);
        assert_eq!(phase.centre_offset::<4, 4>(), (-1, -1));
        for _ in 0..255 {
            phase.advance();
        }
        assert_eq!(phase.travel, 0);
    }

    #[test]
    fn orbit_stays_bounded() {
        let mut phase = AnimationPhase::new();
        for _ in 0..20_000 {
            phase.advance();
            assert!((-15..=15).contains(&phase.slow.whole_x()));
            assert!((-15..=15).contains(&phase.fast.whole_x()));
            let (dx, dy) = phase.centre_offset::<4, 4>();
            assert!((-31..=-1).contains(&dx));
            assert!((-31..=-1).contains(&dy));
        }
    }

    #[test]
    fn fast_oscillator_turns_faster() {
        let mut phase = AnimationPhase::new();
        let mut slow_flips = 0;
        let mut fast_flips = 0;
        let (mut slow_sign, mut fast_sign) = (true, true);
        for _ in 0..2_000 {
            phase.advance();
            if (phase.slow.x() >= 0) != slow_sign {
                slow_sign = !slow_sign;
                slow_flips += 1;
            }
            if (phase.fast.x() >= 0) != fast_sign {
                fast_sign = !fast_sign;
                fast_flips += 1;
            }
        }
        assert!(fast_flips > slow_flips);
    }
}
