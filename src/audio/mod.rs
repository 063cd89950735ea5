//! # Audio Engine
//!
//! Sample playback behind a small trait seam so the core and the tests
//! never touch a real audio device.
//!
//! The rodio implementation keeps one persistent [`Sink`] per pad over a
//! shared output stream. Triggering a pad stops that pad's sink, sets the
//! gain, and appends the pad's buffered source again — playback always
//! restarts from the beginning, cutting off a still-playing instance of the
//! same pad. Different pads never interfere with each other.
//!
//! Samples are decoded once at startup and held in memory. A sample that
//! cannot be opened or decoded leaves its pad silent; the failure is logged
//! and never reaches the UI.

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{info, warn};
use rodio::source::Buffered;
use rodio::{Decoder, OutputStream, Sink, Source};

use crate::core::kit::Kit;

/// Playback seam. `trigger` must restart the pad's sample from position
/// zero at the given gain; it must never block.
pub trait SamplePlayer {
    fn trigger(&self, index: usize, gain: f32);
}

/// Sampler used with `--silent` or when no output device exists.
pub struct NullSampler;

impl SamplePlayer for NullSampler {
    fn trigger(&self, _index: usize, _gain: f32) {}
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum AudioError {
    /// No usable output device / stream.
    Stream(rodio::StreamError),
    /// A per-pad sink could not be created on the stream.
    Sink(rodio::PlayError),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::Stream(e) => write!(f, "audio output unavailable: {e}"),
            AudioError::Sink(e) => write!(f, "audio sink error: {e}"),
        }
    }
}

impl std::error::Error for AudioError {}

// ============================================================================
// Rodio Sampler
// ============================================================================

type PadSource = Buffered<Decoder<BufReader<File>>>;

pub struct RodioSampler {
    // Playback dies when the stream is dropped; keep it alive as long as
    // the sampler exists.
    _stream: OutputStream,
    sinks: Vec<Sink>,
    sources: Vec<Option<PadSource>>,
}

impl RodioSampler {
    /// Open the default output device and preload every pad's sample.
    pub fn new(kit: &Kit, sample_dir: &Path) -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default().map_err(AudioError::Stream)?;

        let mut sinks = Vec::with_capacity(kit.pads().len());
        let mut sources = Vec::with_capacity(kit.pads().len());
        for pad in kit.pads() {
            sinks.push(Sink::try_new(&handle).map_err(AudioError::Sink)?);
            sources.push(load_source(&sample_dir.join(&pad.sample), &pad.name));
        }

        let loaded = sources.iter().filter(|s| s.is_some()).count();
        info!(
            "Sampler ready: {loaded}/{} samples loaded from {}",
            kit.pads().len(),
            sample_dir.display()
        );

        Ok(Self {
            _stream: stream,
            sinks,
            sources,
        })
    }
}

impl SamplePlayer for RodioSampler {
    fn trigger(&self, index: usize, gain: f32) {
        let Some(source) = self.sources.get(index).and_then(|s| s.as_ref()) else {
            // Missing sample: the pad is visible but silent.
            return;
        };
        let sink = &self.sinks[index];
        sink.stop();
        sink.set_volume(gain);
        sink.append(source.clone());
        sink.play();
    }
}

/// Decode one sample file into a reusable in-memory source.
fn load_source(path: &Path, pad_name: &str) -> Option<PadSource> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            warn!("Pad \"{pad_name}\": cannot open {}: {e}", path.display());
            return None;
        }
    };
    let decoder = match Decoder::new(BufReader::new(file)) {
        Ok(d) => d,
        Err(e) => {
            warn!("Pad \"{pad_name}\": cannot decode {}: {e}", path.display());
            return None;
        }
    };
    let buffered = decoder.buffered();
    // Walk the source once so the whole sample is decoded now, not on the
    // first trigger.
    let _ = buffered.clone().count();
    Some(buffered)
}
