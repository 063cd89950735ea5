//! Test utilities shared across the crate.

use std::sync::{Arc, Mutex};

use crate::audio::SamplePlayer;
use crate::core::kit::Kit;
use crate::core::state::{App, DEFAULT_VOLUME};

/// A sampler that records every trigger instead of playing audio.
pub struct RecordingSampler {
    /// `(pad index, gain)` per trigger, in order.
    pub triggers: Mutex<Vec<(usize, f32)>>,
}

impl RecordingSampler {
    pub fn new() -> Self {
        Self {
            triggers: Mutex::new(Vec::new()),
        }
    }
}

impl Default for RecordingSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl SamplePlayer for RecordingSampler {
    fn trigger(&self, index: usize, gain: f32) {
        self.triggers.lock().unwrap().push((index, gain));
    }
}

/// Creates a test App with the built-in kit and a RecordingSampler.
pub fn test_app() -> App {
    App::new(
        Arc::new(RecordingSampler::new()),
        Kit::default(),
        DEFAULT_VOLUME,
    )
}
