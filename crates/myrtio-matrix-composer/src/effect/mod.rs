//! Ripple animation
//!
//! - `phase` - Oscillators and travel counter carried between frames
//! - `ripple` - Renderer painting concentric bands around the moving centre

mod phase;
mod ripple;

pub use phase::{AnimationPhase, FAST_SHIFT, INITIAL_AMPLITUDE, Oscillator, SLOW_SHIFT};
pub use ripple::{RippleEffect, band_bit, render_frame};
