use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ControlPanel, PadBoard, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    let [board_area, panel_area] =
        Layout::horizontal([Percentage(62), Percentage(38)]).areas(main_area);

    let mut title_bar = TitleBar::new(tui.muted);
    title_bar.render(frame, title_area);

    let flashing = tui.flash_flags();
    let mut board = PadBoard {
        pads: app.kit.pads(),
        flashing: &flashing,
        power: app.power,
        state: &mut tui.board,
    };
    board.render(frame, board_area);

    let mut panel = ControlPanel {
        power: app.power,
        volume_level: app.volume_level,
        display_text: &app.display_text,
        state: &mut tui.panel,
    };
    panel.render(frame, panel_area);
}
