//! # ControlPanel Component
//!
//! Power button, volume gauge, and the transient readout.
//!
//! ## Responsibilities
//!
//! - Render the power button, highlighted when on and flat when off
//! - Render the 1–100 volume gauge
//! - Render the readout (last sound name / status message)
//! - Cache the button and gauge rects for mouse hit testing
//!
//! The panel is a pure forwarder: it owns no machine state. Clicks resolved
//! by [`ControlPanelState::hit_test`] become actions in the run loop; the
//! updated values flow back down as props on the next frame.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Gauge, Paragraph};

use crate::tui::component::Component;

/// What a click inside the panel resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelHit {
    /// The power button.
    Power,
    /// The volume gauge, with the 1..=100 level the click position maps to.
    Volume(u8),
}

/// Hit-test geometry for the panel. Must be persisted in the parent
/// TuiState; rebuilt on every render.
pub struct ControlPanelState {
    pub power_area: Rect,
    pub gauge_area: Rect,
}

impl Default for ControlPanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlPanelState {
    pub fn new() -> Self {
        Self {
            power_area: Rect::default(),
            gauge_area: Rect::default(),
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<PanelHit> {
        let pos = Position::new(column, row);
        if self.power_area.contains(pos) {
            return Some(PanelHit::Power);
        }
        if self.gauge_area.contains(pos) {
            // Map the click's x-position across the gauge's inner width to
            // a 1..=100 level.
            let inner_x = self.gauge_area.x + 1;
            let inner_width = self.gauge_area.width.saturating_sub(2).max(1);
            let offset = column.saturating_sub(inner_x).min(inner_width - 1);
            let level = ((offset as u32 * 100) / (inner_width.saturating_sub(1).max(1)) as u32)
                .clamp(1, 100) as u8;
            return Some(PanelHit::Volume(level));
        }
        None
    }
}

pub struct ControlPanel<'a> {
    pub power: bool,
    pub volume_level: u8,
    pub display_text: &'a str,
    pub state: &'a mut ControlPanelState,
}

impl Component for ControlPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let layout = Layout::vertical([Length(1), Length(3), Length(3), Length(3), Min(0)]);
        let [brand_area, power_area, gauge_area, display_area, _rest] = layout.areas(area);

        self.state.power_area = power_area;
        self.state.gauge_area = gauge_area;

        // Power reflects in the whole panel's styling, like the reference.
        let powered_style = if self.power {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };

        let brand = Paragraph::new("DrumBoy")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(brand, brand_area);

        let power_label = if self.power { "I/O  ON" } else { "I/O  OFF" };
        let power_button = Paragraph::new(power_label)
            .block(Block::bordered().title("Power").border_style(powered_style))
            .style(powered_style)
            .alignment(Alignment::Center);
        frame.render_widget(power_button, power_area);

        let gauge = Gauge::default()
            .block(Block::bordered().title("Volume"))
            .gauge_style(if self.power {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            })
            .percent(self.volume_level as u16)
            .label(format!("{}", self.volume_level));
        frame.render_widget(gauge, gauge_area);

        let display = Paragraph::new(self.display_text)
            .block(Block::bordered().title("Display").border_style(powered_style))
            .style(powered_style)
            .alignment(Alignment::Center);
        frame.render_widget(display, display_area);
    }
}
