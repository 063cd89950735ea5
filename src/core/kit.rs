//! # Pad Kit
//!
//! The static pad configuration: which keyboard key fires which sound.
//!
//! A kit is an ordered list of exactly nine pads. Each pad binds one
//! character (matched case-insensitively) to one sample file and one
//! display name. The kit also owns the key dispatcher: a single
//! case-insensitive lookup from a pressed character to a pad index, so the
//! whole application installs exactly one keyboard route rather than one
//! listener per pad.
//!
//! Kits can be replaced wholesale from the config file (`[[pads]]` records,
//! see [`crate::core::config`]); a replacement kit must satisfy the same
//! invariants as the built-in one: nine pads, unique keys, unique names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A kit always holds exactly this many pads.
pub const PAD_COUNT: usize = 9;

/// One pad definition: trigger key, display name, sample file.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PadDef {
    /// Trigger character. Matching is ASCII case-insensitive.
    pub key: char,
    /// Numeric key-code from the old kit format. Never consulted by
    /// dispatch; accepted so kits written against that scheme still parse.
    #[serde(default)]
    pub legacy_code: Option<u8>,
    /// Display name, shown in the readout when the pad fires. Unique.
    pub name: String,
    /// Sample file name, resolved against the configured sample directory.
    pub sample: String,
}

/// The full nine-pad kit plus the key dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Kit {
    pads: Vec<PadDef>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, PartialEq)]
pub enum KitError {
    /// A kit must contain exactly [`PAD_COUNT`] pads.
    WrongPadCount(usize),
    /// Two pads share a trigger key (case-insensitive).
    DuplicateKey(char),
    /// Two pads share a display name.
    DuplicateName(String),
}

impl fmt::Display for KitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KitError::WrongPadCount(n) => {
                write!(f, "kit must have exactly {PAD_COUNT} pads, got {n}")
            }
            KitError::DuplicateKey(c) => write!(f, "duplicate pad key '{c}'"),
            KitError::DuplicateName(name) => write!(f, "duplicate pad name \"{name}\""),
        }
    }
}

impl std::error::Error for KitError {}

// ============================================================================
// Kit
// ============================================================================

impl Kit {
    /// Build a kit from pad records, enforcing the kit invariants.
    pub fn new(pads: Vec<PadDef>) -> Result<Self, KitError> {
        if pads.len() != PAD_COUNT {
            return Err(KitError::WrongPadCount(pads.len()));
        }
        for (i, pad) in pads.iter().enumerate() {
            for other in &pads[i + 1..] {
                if pad.key.eq_ignore_ascii_case(&other.key) {
                    return Err(KitError::DuplicateKey(other.key));
                }
                if pad.name == other.name {
                    return Err(KitError::DuplicateName(other.name.clone()));
                }
            }
        }
        Ok(Self { pads })
    }

    /// The key dispatcher: map a pressed character to a pad index.
    ///
    /// Comparison is ASCII case-insensitive, so `q` and `Q` both fire the
    /// pad bound to `Q`. Returns `None` for characters no pad claims.
    pub fn pad_for_key(&self, c: char) -> Option<usize> {
        self.pads.iter().position(|p| p.key.eq_ignore_ascii_case(&c))
    }

    pub fn pads(&self) -> &[PadDef] {
        &self.pads
    }

    pub fn pad(&self, index: usize) -> &PadDef {
        &self.pads[index]
    }
}

impl Default for Kit {
    /// The built-in kit: nine drum sounds on the Q/W/E, A/S/D, Z/X/C rows.
    fn default() -> Self {
        let pad = |key, legacy_code, name: &str, sample: &str| PadDef {
            key,
            legacy_code: Some(legacy_code),
            name: name.to_string(),
            sample: sample.to_string(),
        };
        Self {
            pads: vec![
                pad('Q', 81, "Open-HH", "Dsc_Oh.mp3"),
                pad('W', 87, "Closed-HH", "Cev_H2.mp3"),
                pad('E', 69, "Kick-and-Hat", "Kick_n_Hat.mp3"),
                pad('A', 65, "Punchy-Kick", "punchy_kick_1.mp3"),
                pad('S', 83, "Kick", "RP4_KICK_1.mp3"),
                pad('D', 68, "Snare", "Brk_Snr.mp3"),
                pad('Z', 90, "Side-Stick", "side_stick_1.mp3"),
                pad('X', 88, "Clap", "Heater-6.mp3"),
                pad('C', 67, "Shaker", "Give_us_a_light.mp3"),
            ],
        }
    }
}
