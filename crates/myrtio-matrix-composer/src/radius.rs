//! Incremental integer distance tracking
//!
//! Keeps `floor(sqrt(sum))` up to date while a running sum of squares moves
//! one coordinate step at a time, using `(n + 1)^2 = n^2 + 2n + 1`. Only the
//! seed takes an integer square root; every step afterwards is O(1).

/// Whether the scanned coordinate is moving towards or away from zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approach {
    /// Coordinate is negative, each step shrinks the distance
    Closing,
    /// Coordinate is zero or positive, each step grows the distance
    Receding,
}

/// Running sum of squares with its integer square root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadiusTracker {
    /// Squared distance at the current position
    sum: i32,
    /// `floor(sqrt(sum))`
    root: i32,
    /// Square at which `root` changes next
    boundary: i32,
    approach: Approach,
}

impl RadiusTracker {
    /// Seed the tracker at offset (`dx`, `dy`) from the centre
    pub fn seed(dx: i32, dy: i32) -> Self {
        let sum = dx * dx + dy * dy;
        let root = sum.isqrt();
        Self {
            sum,
            root,
            boundary: root * root,
            approach: Approach::Closing,
        }
    }

    pub fn sum(&self) -> i32 {
        self.sum
    }

    pub fn root(&self) -> i32 {
        self.root
    }

    /// Switch direction. Only the boundary square is re-derived.
    pub fn set_approach(&mut self, approach: Approach) {
        self.approach = approach;
        self.boundary = match approach {
            Approach::Closing => self.root * self.root,
            Approach::Receding => (self.root + 1) * (self.root + 1),
        };
    }

    /// Move the scanned coordinate from `coord` to `coord + 1`
    #[inline]
    pub fn step(&mut self, coord: i32) {
        self.sum += 2 * coord + 1;
        match self.approach {
            Approach::Closing => {
                if self.sum < self.boundary {
                    self.boundary -= 2 * self.root - 1;
                    self.root -= 1;
                }
            }
            Approach::Receding => {
                if self.sum >= self.boundary {
                    self.root += 1;
                    self.boundary += 2 * self.root + 1;
                }
            }
        }
    }

    /// Walk `count` coordinates starting at `from` in the given direction.
    ///
    /// `visit` sees the tracker at each coordinate before it is stepped past.
    #[inline]
    pub fn sweep(
        &mut self,
        approach: Approach,
        from: i32,
        count: i32,
        mut visit: impl FnMut(&Self),
    ) {
        self.set_approach(approach);
        for coord in from..from + count {
            visit(self);
            self.step(coord);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_sqrt(sum: i32) -> i32 {
        f64::from(sum).sqrt().floor() as i32
    }

    #[test]
    fn seed_takes_integer_root() {
        let tracker = RadiusTracker::seed(-3, 4);
        assert_eq!(tracker.sum(), 25);
        assert_eq!(tracker.root(), 5);

        let tracker = RadiusTracker::seed(7, -7);
        assert_eq!(tracker.sum(), 98);
        assert_eq!(tracker.root(), 9);
    }

    #[test]
    fn closing_then_receding_matches_sqrt() {
        for dy in -20..=20 {
            let mut tracker = RadiusTracker::seed(-40, dy);
            tracker.sweep(Approach::Closing, -40, 40, |t| {
                assert_eq!(t.root(), floor_sqrt(t.sum()));
            });
            assert_eq!(tracker.sum(), dy * dy);
            tracker.sweep(Approach::Receding, 0, 40, |t| {
                assert_eq!(t.root(), floor_sqrt(t.sum()));
            });
            assert_eq!(tracker.sum(), 40 * 40 + dy * dy);
            assert_eq!(tracker.root(), floor_sqrt(tracker.sum()));
        }
    }

    #[test]
    fn sweep_visits_before_stepping() {
        let mut tracker = RadiusTracker::seed(2, 0);
        let mut seen = Vec::new();
        tracker.sweep(Approach::Receding, 2, 3, |t| seen.push(t.sum()));
        assert_eq!(seen, [4, 9, 16]);
        assert_eq!(tracker.sum(), 25);
        assert_eq!(tracker.root(), 5);
    }

    #[test]
    fn empty_sweep_only_resets_boundary() {
        let mut tracker = RadiusTracker::seed(-5, 0);
        let before = tracker;
        tracker.sweep(Approach::Closing, -5, 0, |_| unreachable!());
        assert_eq!(tracker.sum(), before.sum());
        assert_eq!(tracker.root(), before.root());
    }
}
