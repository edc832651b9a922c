use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::App;
use crate::model::WizardField;
use crate::ui::constants::{
    HELP_ADDING, LABEL_WIDTH, MODAL_MIN_WIDTH, MODAL_WIDTH_PERCENT, VALUE_OFFSET,
};
use crate::ui::helpers::{field_line, padded_rect};
use crate::ui::theme::Theme;

/// Field rows, a blank line, the hint, the footer with its rule and the
/// outer border.
const WIZARD_ROWS: u16 = WizardField::ALL.len() as u16 + 2 + 2 + 2;
const FOOTER_ROWS: u16 = 2;

pub(crate) fn draw_add_wizard_modal(frame: &mut Frame<'_>, app: &App, theme: &Theme) {
    let Some(active) = app.wizard.active_field() else {
        return;
    };

    let area = wizard_area(frame.area());
    frame.render_widget(Clear, area);
    let title = Line::from(Span::styled(
        format!(" Add host ({}) ", active.label()),
        theme.modal.add_modifier(Modifier::BOLD),
    ))
    .centered();
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme.modal);
    let inner = padded_rect(block.inner(area), 1, 0);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(FOOTER_ROWS)])
        .split(inner);

    let value_width = (inner.width as usize).saturating_sub(VALUE_OFFSET);
    let mut lines: Vec<Line> = WizardField::ALL
        .iter()
        .map(|&field| {
            field_line(
                theme,
                field.label(),
                app.wizard.buffer(field),
                field == active,
                LABEL_WIDTH,
                value_width,
            )
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(active.hint(), theme.muted)));
    frame.render_widget(Paragraph::new(lines), rows[0]);

    let active_row = WizardField::ALL
        .iter()
        .position(|&field| field == active)
        .unwrap_or(0) as u16;
    if active_row < rows[0].height {
        let col = app.wizard.buffer(active).chars().count().min(value_width);
        let x = rows[0].x + (VALUE_OFFSET + col) as u16;
        frame.set_cursor_position((x, rows[0].y + active_row));
    }

    let footer = Paragraph::new(Line::from(Span::styled(HELP_ADDING, theme.muted))).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(theme.border),
    );
    frame.render_widget(footer, rows[1]);
}

/// Centres the wizard on screen, shrinking it on terminals too small to
/// hold it.
fn wizard_area(screen: Rect) -> Rect {
    let width = (screen.width.saturating_mul(MODAL_WIDTH_PERCENT) / 100)
        .max(MODAL_MIN_WIDTH)
        .min(screen.width);
    let height = WIZARD_ROWS.min(screen.height);
    Rect::new(
        screen.x + (screen.width - width) / 2,
        screen.y + (screen.height - height) / 2,
        width,
        height,
    )
}
