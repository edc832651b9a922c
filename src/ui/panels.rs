use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use crate::app::App;
use crate::app::constants::{LOG_NO_LOGS_MESSAGE, NO_SELECTION_MESSAGE};
use crate::app::list::FilterState;
use crate::model::{HostItem, ListEntry, Mode};
use crate::ssh::connection_target;
use crate::ui::constants::{
    APP_TITLE, DETAILS_LOG_LINES, HELP_ADDING, HELP_BROWSE, HELP_FILTER_APPLIED, HELP_FILTERING,
    LABEL_WIDTH, MODIFIED_MARKER,
};
use crate::ui::helpers::{field_line, list_state, truncate_text};
use crate::ui::theme::Theme;

pub(crate) fn draw_host_list(frame: &mut Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let mut title = vec![Span::styled(format!(" {APP_TITLE} "), theme.title)];
    if app.dirty {
        title.push(Span::styled(MODIFIED_MARKER, theme.warning));
    }
    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(theme.border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(inner);

    draw_filter_line(frame, app, theme, rows[0]);

    let width = rows[1].width.saturating_sub(2) as usize;
    let window = app.hosts.window();
    let items: Vec<ListItem> = if app.hosts.visible_len() == 0 {
        let empty = if app.hosts.len() == 0 {
            "No hosts yet, press a to add one"
        } else {
            "No matches"
        };
        vec![ListItem::new(Line::from(Span::styled(empty, theme.muted)))]
    } else {
        app.hosts
            .visible_items()
            .skip(window.start)
            .take(window.len())
            .map(|record| {
                let item = HostItem(record);
                ListItem::new(vec![
                    Line::from(Span::styled(
                        truncate_text(item.title(), width),
                        theme.item_title,
                    )),
                    Line::from(Span::styled(
                        truncate_text(&item.description(), width),
                        theme.item_description,
                    )),
                    Line::from(""),
                ])
            })
            .collect()
    };
    let list = List::new(items)
        .highlight_style(theme.selected)
        .highlight_symbol("│ ");
    let mut state = if app.hosts.visible_len() == 0 {
        list_state(0, 0)
    } else {
        list_state(app.hosts.cursor().saturating_sub(window.start), window.len())
    };
    frame.render_stateful_widget(list, rows[1], &mut state);

    let status = Paragraph::new(Line::from(Span::styled(
        app.status_line().to_string(),
        theme.status,
    )));
    frame.render_widget(status, rows[2]);

    let help = match (app.mode(), app.hosts.filter_state()) {
        (Mode::Adding, _) => HELP_ADDING.to_string(),
        (Mode::Filtering, _) => HELP_FILTERING.to_string(),
        (Mode::Browse, FilterState::Applied) => format!("{HELP_FILTER_APPLIED} | {HELP_BROWSE}"),
        (Mode::Browse, _) => HELP_BROWSE.to_string(),
    };
    let help = Paragraph::new(Line::from(Span::styled(
        truncate_text(&help, rows[3].width as usize),
        theme.muted,
    )));
    frame.render_widget(help, rows[3]);
}

fn draw_filter_line(frame: &mut Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let line = match app.hosts.filter_state() {
        FilterState::Filtering => Line::from(vec![
            Span::styled("Filter: ", theme.filter),
            Span::raw(app.hosts.filter().to_string()),
        ]),
        FilterState::Applied => Line::from(vec![
            Span::styled("Filter: ", theme.filter),
            Span::raw(app.hosts.filter().to_string()),
            Span::styled(
                format!("  ({} of {})", app.hosts.visible_len(), app.hosts.len()),
                theme.muted,
            ),
        ]),
        FilterState::Unfiltered => Line::from(Span::styled(
            format!("{} hosts", app.hosts.len()),
            theme.muted,
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
    if app.hosts.is_filtering() {
        let col = "Filter: ".len() + app.hosts.filter().chars().count();
        let x = area.x.saturating_add(col as u16);
        if x < area.x + area.width {
            frame.set_cursor_position((x, area.y));
        }
    }
}

pub(crate) fn draw_details(frame: &mut Frame<'_>, app: &App, theme: &Theme, area: Rect) {
    let block = Block::default()
        .title(Line::from(Span::styled(" Details ", theme.label)))
        .borders(Borders::ALL)
        .border_style(theme.border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value_width = (inner.width as usize).saturating_sub(2 + LABEL_WIDTH + 2);
    let mut lines = Vec::new();
    match app.hosts.current_selection() {
        Some(host) => {
            let forward_agent = if host.forward_agent { "yes" } else { "no" };
            let tags = host.tags.join(", ");
            for (label, value) in [
                ("Host", host.host.as_str()),
                ("HostName", host.hostname.as_str()),
                ("User", host.user.as_str()),
                ("ForwardAgent", forward_agent),
                ("Tags", tags.as_str()),
                ("Description", host.description.as_str()),
            ] {
                lines.push(field_line(theme, label, value, false, LABEL_WIDTH, value_width));
            }
            lines.push(Line::from(""));
            lines.push(field_line(
                theme,
                "Target",
                &connection_target(host),
                true,
                LABEL_WIDTH,
                value_width,
            ));
        }
        None => lines.push(Line::from(Span::styled(NO_SELECTION_MESSAGE, theme.muted))),
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Recent activity", theme.label)));
    if app.log_lines.is_empty() {
        lines.push(Line::from(Span::styled(LOG_NO_LOGS_MESSAGE, theme.muted)));
    }
    for entry in app.log_lines.iter().rev().take(DETAILS_LOG_LINES) {
        lines.push(Line::from(Span::styled(entry.clone(), theme.muted)));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
