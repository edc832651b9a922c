use ratatui::layout::Constraint;

pub(crate) const APP_TITLE: &str = "Available Hosts";
pub(crate) const MODIFIED_MARKER: &str = " [modified]";

pub(crate) const HELP_BROWSE: &str = concat!(
    "↑/k ↓/j move | enter connect | a add | d delete | s save",
    " | / filter | i import | g generate | q quit"
);
pub(crate) const HELP_FILTER_APPLIED: &str = "esc clear filter";
pub(crate) const HELP_FILTERING: &str = "type to filter | enter apply | esc cancel";
pub(crate) const HELP_ADDING: &str = "Enter confirms field | Backspace deletes | Ctrl-C quits";

pub(crate) const LABEL_WIDTH: usize = 12;
/// Columns before a field value: marker, padded label and `": "`.
pub(crate) const VALUE_OFFSET: usize = 2 + LABEL_WIDTH + 2;

/// Outer padding around the whole screen, horizontal and vertical totals.
pub(crate) const FRAME_HORIZONTAL: u16 = 4;
pub(crate) const FRAME_VERTICAL: u16 = 2;

/// Rows per list entry: title, description, spacer.
pub(crate) const ITEM_HEIGHT: usize = 3;
/// Borders, filter line, status line and help line around the entries.
pub(crate) const LIST_CHROME_HEIGHT: u16 = 5;

pub(crate) const BODY_COLUMN_PERCENTAGES: [u16; 2] = [60, 40];
pub(crate) const DETAILS_LOG_LINES: usize = 5;

pub(crate) const MODAL_WIDTH_PERCENT: u16 = 70;
pub(crate) const MODAL_MIN_WIDTH: u16 = 30;

pub(crate) fn body_columns() -> [Constraint; 2] {
    BODY_COLUMN_PERCENTAGES.map(Constraint::Percentage)
}
