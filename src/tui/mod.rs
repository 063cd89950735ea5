//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The core state machine would drive any other adapter unchanged.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Flashing** (a pad fired within the last 80ms): polls every ~16ms so
//!   the flash highlight expires on time.
//! - **Idle**: blocks up to 100ms per poll, only redraws on events or
//!   timer actions.
//!
//! ## Timers
//!
//! Display clears are fire-and-forget tokio tasks: sleep, then send
//! `Action::ClearDisplay` over the action channel. Pending clears are never
//! cancelled, so a stale timer may blank a newer message early — the
//! reference behaves the same way and the reducer documents it.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::audio::{NullSampler, RodioSampler, SamplePlayer};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::kit::PAD_COUNT;
use crate::core::state::{App, DISPLAY_HOLD_MS};
use crate::tui::components::{ControlPanelState, PadBoardState, PanelHit};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How long a fired pad stays lit.
pub const PAD_FLASH_MS: u64 = 80;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Pad grid hit geometry, rebuilt each draw.
    pub board: PadBoardState,
    /// Panel hit geometry, rebuilt each draw.
    pub panel: ControlPanelState,
    /// Last trigger instant per pad; drives the flash highlight.
    pad_flash: Vec<Option<Instant>>,
    /// True when audio output is disabled.
    pub muted: bool,
}

impl TuiState {
    pub fn new(muted: bool) -> Self {
        Self {
            board: PadBoardState::new(),
            panel: ControlPanelState::new(),
            pad_flash: vec![None; PAD_COUNT],
            muted,
        }
    }

    /// Open a pad's flash window. Re-triggering restarts the window.
    pub fn flash(&mut self, index: usize) {
        if let Some(slot) = self.pad_flash.get_mut(index) {
            *slot = Some(Instant::now());
        }
    }

    /// Per-pad "currently lit" flags, in kit order.
    pub fn flash_flags(&self) -> Vec<bool> {
        self.pad_flash
            .iter()
            .map(|t| t.is_some_and(|t| t.elapsed() < Duration::from_millis(PAD_FLASH_MS)))
            .collect()
    }

    fn any_flash_live(&self) -> bool {
        self.flash_flags().into_iter().any(|lit| lit)
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the playback engine from a resolved config.
///
/// Returns the sampler plus whether the machine is muted. `--silent` mutes
/// by request; a missing output device mutes with a warning. Either way the
/// UI runs normally.
pub fn build_sampler(config: &ResolvedConfig) -> (Arc<dyn SamplePlayer>, bool) {
    if config.silent {
        info!("Audio disabled by --silent");
        return (Arc::new(NullSampler), true);
    }
    match RodioSampler::new(&config.kit, &config.sample_dir) {
        Ok(sampler) => (Arc::new(sampler), false),
        Err(e) => {
            warn!("Audio disabled: {e}");
            (Arc::new(NullSampler), true)
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let (sampler, muted) = build_sampler(&config);
    let mut app = App::new(sampler, config.kit.clone(), config.start_volume);
    let mut tui = TuiState::new(muted);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from timer tasks
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame

    loop {
        // A live flash must be redrawn until it expires
        let animating = tui.any_flash_live();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while a flash is live, longer when idle
        let timeout = if animating {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = action_for(&event, &app, &tui) else {
                continue;
            };
            let effect = update(&mut app, action);
            if execute_effect(effect, &app, &mut tui, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }

        // Handle timer actions (display clears)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Timer action: {:?}", action);
            let effect = update(&mut app, action);
            if execute_effect(effect, &app, &mut tui, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// The single input dispatcher.
///
/// Characters are offered to the kit's key lookup first; unclaimed ones
/// fall through to the control keys. Clicks are hit-tested against the
/// geometry of the last draw. State is read here, at dispatch time, so
/// handlers always observe current power and volume.
fn action_for(event: &TuiEvent, app: &App, tui: &TuiState) -> Option<Action> {
    match event {
        TuiEvent::Key(c) => {
            if let Some(index) = app.kit.pad_for_key(*c) {
                return Some(Action::PadTriggered(index));
            }
            match c.to_ascii_lowercase() {
                'p' => Some(Action::TogglePower),
                _ => None,
            }
        }
        TuiEvent::NudgeVolume(delta) => {
            let level = (app.volume_level as i16 + *delta as i16).clamp(1, 100) as u8;
            Some(Action::SetVolume(level))
        }
        TuiEvent::Click(column, row) => {
            if let Some(index) = tui.board.hit_test(*column, *row) {
                return Some(Action::PadTriggered(index));
            }
            match tui.panel.hit_test(*column, *row) {
                Some(PanelHit::Power) => Some(Action::TogglePower),
                Some(PanelHit::Volume(level)) => Some(Action::SetVolume(level)),
                None => None,
            }
        }
        // Redraw was already flagged by the event arriving
        TuiEvent::Resize => None,
        TuiEvent::Quit => Some(Action::Quit),
    }
}

/// Perform the side work an `update()` asked for. Returns true on quit.
fn execute_effect(
    effect: Effect,
    app: &App,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::PadFired(index) => {
            debug!(
                "Pad {index} (\"{}\") fired at gain {:.2}",
                app.kit.pad(index).name,
                app.volume_factor
            );
            app.sampler.trigger(index, app.volume_factor);
            tui.flash(index);
            schedule_display_clear(tx.clone());
            false
        }
        Effect::PowerSwitched => {
            info!("Power {}", if app.power { "on" } else { "off" });
            schedule_display_clear(tx.clone());
            false
        }
        Effect::Quit => true,
    }
}

/// Fire-and-forget: blank the readout [`DISPLAY_HOLD_MS`] from now.
fn schedule_display_clear(tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(DISPLAY_HOLD_MS)).await;
        if tx.send(Action::ClearDisplay).is_err() {
            warn!("Failed to send display clear: receiver dropped");
        }
    });
}
