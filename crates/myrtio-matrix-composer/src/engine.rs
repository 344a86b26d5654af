//! Matrix Engine - render/output loop
//!
//! The MatrixEngine owns everything that lives across frames:
//! - The framebuffer
//! - The ripple effect and its animation phase
//! - The panel chain and its bus
//!
//! Every tick renders one frame and pushes it out. No frame pacing is
//! applied; the animation runs as fast as the platform renders and shifts.

use crate::driver::{MatrixBus, Max7219Chain, Register};
use crate::effect::RippleEffect;
use crate::error::MatrixError;
use crate::framebuffer::Framebuffer;

/// Matrix Engine - the main loop
///
/// Generic over `B: MatrixBus` to support different hardware backends.
pub struct MatrixEngine<B: MatrixBus, const X: usize, const Y: usize> {
    /// Panel chain output
    chain: Max7219Chain<B, X, Y>,
    /// Frame being rendered and shown
    framebuffer: Framebuffer<X, Y>,
    /// Animation
    effect: RippleEffect,
    /// Intensity applied by `init`
    intensity: u8,
    /// Frames emitted (wrapping)
    frame: u32,
}

impl<B: MatrixBus, const X: usize, const Y: usize> MatrixEngine<B, X, Y> {
    /// Create a new engine on top of `bus`
    pub fn new(bus: B) -> Self {
        Self {
            chain: Max7219Chain::new(bus),
            framebuffer: Framebuffer::new(),
            effect: RippleEffect::new(),
            intensity: Register::MAX_INTENSITY,
            frame: 0,
        }
    }

    /// Set the intensity used at start-up
    #[must_use]
    pub fn with_intensity(mut self, intensity: u8) -> Self {
        self.intensity = intensity.min(Register::MAX_INTENSITY);
        self
    }

    /// Replace the effect (e.g. to start from a known phase)
    #[must_use]
    pub fn with_effect(mut self, effect: RippleEffect) -> Self {
        self.effect = effect;
        self
    }

    /// Configure the controllers. Call once before the first tick.
    pub fn init(&mut self) -> Result<(), MatrixError<B::Error>> {
        self.chain.init(self.intensity)
    }

    pub fn framebuffer(&self) -> &Framebuffer<X, Y> {
        &self.framebuffer
    }

    pub fn effect(&self) -> &RippleEffect {
        &self.effect
    }

    pub fn chain(&self) -> &Max7219Chain<B, X, Y> {
        &self.chain
    }

    pub fn chain_mut(&mut self) -> &mut Max7219Chain<B, X, Y> {
        &mut self.chain
    }

    /// Frames emitted so far
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Process one frame
    ///
    /// Renders into the framebuffer, then shows it. The frame counts as
    /// emitted even if showing fails; the next tick sends a full frame
    /// again.
    pub fn tick(&mut self) -> Result<(), MatrixError<B::Error>> {
        self.effect.render(&mut self.framebuffer);
        self.frame = self.frame.wrapping_add(1);
        log::trace!(
            "matrix: frame {} travel {}",
            self.frame,
            self.effect.phase().travel
        );
        self.chain.show(&self.framebuffer)
    }

    /// Run the engine loop indefinitely
    pub fn run(&mut self) -> ! {
        loop {
            if let Err(e) = self.tick() {
                log::warn!("matrix: frame {} dropped: {}", self.frame, e);
            }
        }
    }
}
