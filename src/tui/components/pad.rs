//! # PadCell Component
//!
//! One trigger surface: a bordered cell showing the pad's key, flashing
//! briefly when the pad fires.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! PadCell is purely presentational — whether the pad is currently flashing
//! is decided by the run loop (it owns the trigger timestamps) and arrives
//! here as a prop. The cell renders exactly what it is told:
//!
//! - powered, idle: plain bordered cell
//! - powered, flashing: reversed/bold for the flash window
//! - unpowered: dimmed, regardless of flash state
//!
//! ### The label is the trigger key
//!
//! The surface shows the key that fires it (the sound name only ever
//! appears in the control panel readout). The name is still passed in for
//! the cell's border title so a glance at the board tells you what's wired
//! where.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

pub struct PadCell<'a> {
    /// Trigger key shown on the surface.
    pub key: char,
    /// Sound name, used as the border title.
    pub name: &'a str,
    /// True while the pad's flash window is open.
    pub flashing: bool,
    /// Machine power. Unpowered pads render dimmed.
    pub power: bool,
}

impl Component for PadCell<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (cell_style, border_style) = if !self.power {
            let dim = Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM);
            (dim, dim)
        } else if self.flashing {
            let lit = Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED);
            (lit, Style::default().fg(Color::Yellow))
        } else {
            (
                Style::default().fg(Color::White),
                Style::default().fg(Color::DarkGray),
            )
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title(self.name)
            .title_style(border_style);

        // Center the key vertically by padding with blank lines.
        let inner_height = area.height.saturating_sub(2);
        let top_padding = (inner_height.saturating_sub(1)) / 2;
        let mut lines = vec![String::new(); top_padding as usize];
        lines.push(self.key.to_string());

        let cell = Paragraph::new(lines.join("\n"))
            .block(block)
            .style(cell_style)
            .alignment(Alignment::Center);

        frame.render_widget(cell, area);
    }
}
