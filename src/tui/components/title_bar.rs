//! # TitleBar Component
//!
//! Top status bar showing the application name, the key help line, and the
//! muted indicator.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational—it receives all data as props and has
//! no internal state. This makes it trivial to test and reason about:
//!
//! ```rust,ignore
//! let title_bar = TitleBar { muted: true };
//! title_bar.render(frame, area);
//! ```
//!
//! ### Props-in-Struct Pattern
//!
//! Rather than passing props as render() parameters, we store them as
//! struct fields. This is necessary for trait-based polymorphism—the
//! Component trait requires a fixed render() signature.
//!
//! ## Conditional Formatting
//!
//! 1. **Muted** (no audio device / `--silent`): the help line carries a
//!    trailing `| muted` so the user knows why pads are silent.
//! 2. **Default**: name and key help only.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component.
pub struct TitleBar {
    /// True when audio output is disabled (no device or `--silent`).
    pub muted: bool,
}

impl TitleBar {
    pub fn new(muted: bool) -> Self {
        Self { muted }
    }
}

const KEY_HELP: &str = "pads Q W E / A S D / Z X C · p power · ↑↓ volume · Esc quit";

impl Component for TitleBar {
    /// Render the title bar as a single line (height 1).
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.muted {
            format!("Drumboy | {KEY_HELP} | muted")
        } else {
            format!("Drumboy | {KEY_HELP}")
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| title_bar.render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_shows_name_and_help() {
        let mut title_bar = TitleBar::new(false);
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Drumboy"));
        assert!(text.contains("p power"));
        assert!(!text.contains("muted"));
    }

    #[test]
    fn test_title_bar_shows_muted_indicator() {
        let mut title_bar = TitleBar::new(true);
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("muted"));
    }
}
