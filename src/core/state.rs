//! # Application State
//!
//! Core business state for Drumboy. This module contains domain logic only -
//! no TUI-specific types. Presentation state (pad flash timing, cached hit
//! rects) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── sampler: Arc<dyn SamplePlayer>  // playback engine
//! ├── kit: Kit                        // the nine pad definitions
//! ├── power: bool                     // pads dead when false
//! ├── volume_level: u8                // gauge value, 1..=100
//! ├── volume_factor: f32              // derived gain, level / 100
//! └── display_text: String            // transient readout
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::audio::SamplePlayer;
use crate::core::kit::Kit;

/// How long the readout holds a message before a scheduled clear blanks it.
pub const DISPLAY_HOLD_MS: u64 = 2000;

/// Gauge value the machine starts at.
pub const DEFAULT_VOLUME: u8 = 50;

pub struct App {
    pub sampler: Arc<dyn SamplePlayer>,
    pub kit: Kit,
    /// When false, pad triggers are absorbed: no sound, no readout change.
    pub power: bool,
    /// User-facing gauge value, clamped to 1..=100.
    pub volume_level: u8,
    /// Playback gain derived from `volume_level`.
    pub volume_factor: f32,
    /// Transient readout text. Blanked by scheduled `ClearDisplay` actions.
    pub display_text: String,
}

impl App {
    pub fn new(sampler: Arc<dyn SamplePlayer>, kit: Kit, volume_level: u8) -> Self {
        let volume_level = volume_level.clamp(1, 100);
        Self {
            sampler,
            kit,
            power: true,
            volume_level,
            volume_factor: volume_level as f32 / 100.0,
            display_text: String::new(),
        }
    }
}
