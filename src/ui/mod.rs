use ratatui::Frame;
use ratatui::layout::{Direction, Layout};

use crate::app::App;
use crate::model::Mode;
use crate::ui::constants::{FRAME_HORIZONTAL, FRAME_VERTICAL, body_columns};
use crate::ui::helpers::padded_rect;
use crate::ui::modals::draw_add_wizard_modal;
use crate::ui::panels::{draw_details, draw_host_list};
use crate::ui::theme::Theme;

pub(crate) mod constants;
mod helpers;
mod modals;
mod panels;
pub(crate) mod theme;

pub(crate) fn draw_ui(frame: &mut Frame<'_>, app: &App, theme: &Theme) {
    let area = padded_rect(frame.area(), FRAME_HORIZONTAL / 2, FRAME_VERTICAL / 2);
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(body_columns().as_ref())
        .split(area);

    draw_host_list(frame, app, theme, body[0]);
    draw_details(frame, app, theme, body[1]);

    if app.mode() == Mode::Adding {
        draw_add_wizard_modal(frame, app, theme);
    }
}
