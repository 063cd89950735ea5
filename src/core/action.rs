//! # Actions
//!
//! Everything that can happen in Drumboy becomes an `Action`.
//! User hits the S key? That's `Action::PadTriggered(4)`.
//! A display timer fires? That's `Action::ClearDisplay`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the side work the caller
//! must do (play a sample, schedule a timer, quit). No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state and effect.
//!
//! ## Timer semantics
//!
//! `ClearDisplay` blanks the readout unconditionally. Every pad trigger and
//! power toggle schedules its own clear and nothing ever cancels a pending
//! one, so an older timer can blank a newer message early. Last write wins
//! for the text itself; the readout is always blank within [`DISPLAY_HOLD_MS`]
//! of the latest transition.
//!
//! [`DISPLAY_HOLD_MS`]: crate::core::state::DISPLAY_HOLD_MS

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A pad was activated by key press or mouse click.
    PadTriggered(usize),
    /// The power button was pressed.
    TogglePower,
    /// The volume gauge was set to a new level (raw 1..=100 value).
    SetVolume(u8),
    /// A display-hold timer fired.
    ClearDisplay,
    /// The user asked to exit.
    Quit,
}

/// Side work the run loop must perform after an `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Play the pad's sample at the current gain, flash the pad, and
    /// schedule a display clear.
    PadFired(usize),
    /// Power flipped; schedule a display clear (both directions).
    PowerSwitched,
    Quit,
}

/// The reducer: apply `action` to `app`, return the effect.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::PadTriggered(index) => {
            // Powered off: absorb the trigger entirely. No sound, no text.
            if !app.power {
                return Effect::None;
            }
            let Some(pad) = app.kit.pads().get(index) else {
                return Effect::None;
            };
            app.display_text = pad.name.clone();
            Effect::PadFired(index)
        }
        Action::TogglePower => {
            app.power = !app.power;
            if app.power {
                app.display_text = "Hello!".to_string();
            } else {
                app.display_text.clear();
            }
            Effect::PowerSwitched
        }
        Action::SetVolume(level) => {
            let level = level.clamp(1, 100);
            app.volume_level = level;
            app.volume_factor = level as f32 / 100.0;
            app.display_text = format!("Volume: {level}");
            // The reference never auto-clears a volume message.
            Effect::None
        }
        Action::ClearDisplay => {
            // Unconditional: a stale timer may blank a newer message.
            app.display_text.clear();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kit::PAD_COUNT;
    use crate::test_support::test_app;

    #[test]
    fn test_trigger_sets_readout_to_pad_name() {
        let mut app = test_app();
        for index in 0..PAD_COUNT {
            let effect = update(&mut app, Action::PadTriggered(index));
            assert_eq!(effect, Effect::PadFired(index));
            assert_eq!(app.display_text, app.kit.pad(index).name);
        }
    }

    #[test]
    fn test_trigger_absorbed_when_powered_off() {
        let mut app = test_app();
        app.power = false;
        app.display_text = "before".to_string();

        let effect = update(&mut app, Action::PadTriggered(0));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.display_text, "before");
    }

    #[test]
    fn test_trigger_out_of_range_is_noop() {
        let mut app = test_app();
        let effect = update(&mut app, Action::PadTriggered(PAD_COUNT));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.display_text, "");
    }

    #[test]
    fn test_power_on_greets_power_off_does_not() {
        let mut app = test_app();
        assert!(app.power);

        // on → off: readout blanked immediately, no greeting
        let effect = update(&mut app, Action::TogglePower);
        assert_eq!(effect, Effect::PowerSwitched);
        assert!(!app.power);
        assert_eq!(app.display_text, "");

        // off → on: greeting shown
        let effect = update(&mut app, Action::TogglePower);
        assert_eq!(effect, Effect::PowerSwitched);
        assert!(app.power);
        assert_eq!(app.display_text, "Hello!");
    }

    #[test]
    fn test_set_volume_updates_level_factor_and_readout() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SetVolume(73));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.volume_level, 73);
        assert_eq!(app.volume_factor, 0.73);
        assert_eq!(app.display_text, "Volume: 73");
    }

    #[test]
    fn test_set_volume_clamps_to_gauge_range() {
        let mut app = test_app();
        update(&mut app, Action::SetVolume(0));
        assert_eq!(app.volume_level, 1);
        update(&mut app, Action::SetVolume(255));
        assert_eq!(app.volume_level, 100);
    }

    #[test]
    fn test_clear_display_blanks_readout() {
        let mut app = test_app();
        update(&mut app, Action::PadTriggered(5));
        assert_eq!(app.display_text, "Snare");

        let effect = update(&mut app, Action::ClearDisplay);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.display_text, "");
    }

    #[test]
    fn test_clear_is_unconditional_even_after_newer_write() {
        // A stale timer blanks whatever is showing. Preserved from the
        // reference behavior: pending clears are never cancelled.
        let mut app = test_app();
        update(&mut app, Action::PadTriggered(0));
        update(&mut app, Action::PadTriggered(1));
        assert_eq!(app.display_text, "Closed-HH");

        update(&mut app, Action::ClearDisplay);
        assert_eq!(app.display_text, "");
    }

    #[test]
    fn test_rapid_retrigger_fires_both_times() {
        // A second trigger within the flash window restarts playback, it is
        // neither queued nor ignored.
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::PadTriggered(4)), Effect::PadFired(4));
        assert_eq!(update(&mut app, Action::PadTriggered(4)), Effect::PadFired(4));
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
