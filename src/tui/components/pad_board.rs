//! # PadBoard Component
//!
//! The 3×3 grid of trigger surfaces.
//!
//! ## Architecture
//!
//! `PadBoard` is a transient component (created each frame) that wraps
//! `&'a mut PadBoardState` (persistent state) and the kit's pads (props).
//! Rendering splits its area into nine cells, renders a `PadCell` into
//! each, and records every cell's rect in the state so mouse clicks can be
//! hit-tested against the exact geometry of the last draw.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::core::kit::PadDef;
use crate::tui::component::Component;
use crate::tui::components::pad::PadCell;

/// Hit-test geometry for the board. Must be persisted in the parent
/// TuiState; rebuilt on every render.
pub struct PadBoardState {
    /// One rect per pad, in kit order, from the last draw.
    pub pad_areas: Vec<Rect>,
}

impl Default for PadBoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl PadBoardState {
    pub fn new() -> Self {
        Self {
            pad_areas: Vec::new(),
        }
    }

    /// Which pad (if any) contains the given screen position.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.pad_areas.iter().position(|rect| rect.contains(pos))
    }
}

pub struct PadBoard<'a> {
    pub pads: &'a [PadDef],
    /// Per-pad flash flags, in kit order.
    pub flashing: &'a [bool],
    pub power: bool,
    pub state: &'a mut PadBoardState,
}

impl Component for PadBoard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical([Constraint::Ratio(1, 3); 3]).split(area);

        self.state.pad_areas.clear();
        for (row_index, row_area) in rows.iter().enumerate() {
            let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(*row_area);
            for (col_index, cell_area) in cells.iter().enumerate() {
                let index = row_index * 3 + col_index;
                let Some(pad) = self.pads.get(index) else {
                    continue;
                };
                self.state.pad_areas.push(*cell_area);

                let mut cell = PadCell {
                    key: pad.key,
                    name: &pad.name,
                    flashing: self.flashing.get(index).copied().unwrap_or(false),
                    power: self.power,
                };
                cell.render(frame, *cell_area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kit::Kit;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_board_renders_all_nine_keys() {
        let kit = Kit::default();
        let backend = TestBackend::new(60, 18);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = PadBoardState::new();

        terminal
            .draw(|f| {
                let mut board = PadBoard {
                    pads: kit.pads(),
                    flashing: &[false; 9],
                    power: true,
                    state: &mut state,
                };
                board.render(f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        for pad in kit.pads() {
            assert!(text.contains(pad.key), "missing pad key {}", pad.key);
        }
    }

    #[test]
    fn test_board_caches_one_rect_per_pad() {
        let kit = Kit::default();
        let backend = TestBackend::new(60, 18);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = PadBoardState::new();

        terminal
            .draw(|f| {
                let mut board = PadBoard {
                    pads: kit.pads(),
                    flashing: &[false; 9],
                    power: true,
                    state: &mut state,
                };
                board.render(f, f.area());
            })
            .unwrap();

        assert_eq!(state.pad_areas.len(), 9);
    }

    #[test]
    fn test_hit_test_resolves_pads() {
        let kit = Kit::default();
        let backend = TestBackend::new(60, 18);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = PadBoardState::new();

        terminal
            .draw(|f| {
                let mut board = PadBoard {
                    pads: kit.pads(),
                    flashing: &[false; 9],
                    power: true,
                    state: &mut state,
                };
                board.render(f, f.area());
            })
            .unwrap();

        // Center of each cached rect must resolve back to that pad
        for (index, rect) in state.pad_areas.iter().enumerate() {
            let col = rect.x + rect.width / 2;
            let row = rect.y + rect.height / 2;
            assert_eq!(state.hit_test(col, row), Some(index));
        }
    }

    #[test]
    fn test_hit_test_misses_outside_board() {
        let state = PadBoardState::new();
        assert_eq!(state.hit_test(5, 5), None);
    }
}
