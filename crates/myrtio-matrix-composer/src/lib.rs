#![cfg_attr(not(test), no_std)]

//! Matrix Composer - serpentine MAX7219 panel chain
//!
//! Architecture layers:
//! - `layout` - Panel addressing for the serpentine chain
//! - `framebuffer` - Bit-packed monochrome frame in raster order
//! - `radius` - Incremental integer distance tracking
//! - `effect` - Ripple animation and its phase state
//! - `driver` - Bus abstraction (`[MatrixBus]` trait) and the MAX7219 chain
//! - `engine` - Render/output loop
//!
//! The engine is generic over `MatrixBus`, allowing different hardware backends.

pub mod driver;
pub mod effect;
pub mod engine;
pub mod error;
pub mod framebuffer;
pub mod layout;
pub mod radius;

// Driver exports
pub use driver::{BitBangBus, BitOrder, MatrixBus, Max7219Chain, Register};

// Effect exports
pub use effect::{AnimationPhase, Oscillator, RippleEffect};

// Engine exports
pub use engine::MatrixEngine;

pub use error::MatrixError;
pub use framebuffer::{FrameWriter, Framebuffer, PixelMode};
pub use layout::{PANEL_SIZE, PanelPosition, RowWiring};
pub use radius::{Approach, RadiusTracker};
