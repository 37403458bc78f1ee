//! Board-agnostic logic for the joystick cursor firmware
//!
//! Everything here runs unchanged on the target and on the host:
//!
//! - Peripheral traits (analog reader, PWM channel, indicator, screen)
//! - Cursor movement and clamping
//! - Deflection to brightness mapping
//! - Shared debouncer and mode flags
//! - One render-loop iteration
//! - Simulated peripherals for tests

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod brightness;
pub mod config;
pub mod debounce;
pub mod graphics;
pub mod motion;
pub mod render;
#[cfg(any(test, feature = "sim"))]
pub mod sim;
pub mod state;
pub mod toggle;
pub mod traits;

pub use brightness::Brightness;
pub use config::Config;
pub use motion::{Cursor, Sample};
pub use render::{Error, Frame, RenderLoop};
pub use state::ModeFlags;
pub use toggle::{Button, Toggle, ToggleHandler};
