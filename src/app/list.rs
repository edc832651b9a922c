use std::ops::Range;
use std::time::{Duration, Instant};

use crate::app::constants::STATUS_LIFETIME;
use crate::model::{HostItem, HostRecord, ListEntry};
use crate::ui::constants::{ITEM_HEIGHT, LIST_CHROME_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FilterState {
    Unfiltered,
    Filtering,
    Applied,
}

#[derive(Debug, Clone)]
pub(crate) struct StatusMessage {
    pub(crate) text: String,
    pub(crate) expires_at: Instant,
}

/// Ordered host records plus the filtered projection the user navigates.
#[derive(Debug)]
pub(crate) struct HostList {
    records: Vec<HostRecord>,
    visible: Vec<usize>,
    cursor: usize,
    filter: String,
    filter_state: FilterState,
    status: Option<StatusMessage>,
    status_lifetime: Duration,
    height: u16,
}

impl HostList {
    pub(crate) fn new(records: Vec<HostRecord>) -> Self {
        let mut list = Self {
            records,
            visible: Vec::new(),
            cursor: 0,
            filter: String::new(),
            filter_state: FilterState::Unfiltered,
            status: None,
            status_lifetime: STATUS_LIFETIME,
            height: 0,
        };
        list.refilter();
        list
    }

    pub(crate) fn records(&self) -> &[HostRecord] {
        &self.records
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub(crate) fn visible_items(&self) -> impl Iterator<Item = &HostRecord> {
        self.visible.iter().map(|&idx| &self.records[idx])
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn contains(&self, host: &str) -> bool {
        self.records.iter().any(|record| record.host == host)
    }

    pub(crate) fn current_selection(&self) -> Option<&HostRecord> {
        self.visible
            .get(self.cursor)
            .map(|&idx| &self.records[idx])
    }

    pub(crate) fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(crate) fn move_down(&mut self) {
        if self.cursor + 1 < self.visible.len() {
            self.cursor += 1;
        }
    }

    /// Inserts at `index` in the backing sequence (clamped to its end). The
    /// cursor stays on the record it pointed at before the insert.
    pub(crate) fn insert(&mut self, record: HostRecord, index: usize) {
        let index = index.min(self.records.len());
        let selected = self.selected_record_index().map(|sel| {
            if sel >= index { sel + 1 } else { sel }
        });
        self.records.insert(index, record);
        self.refilter();
        self.reselect(selected);
    }

    pub(crate) fn append(&mut self, record: HostRecord) {
        let end = self.records.len();
        self.insert(record, end);
    }

    /// Removes the first record whose host matches `identity`.
    pub(crate) fn remove(&mut self, identity: &str) -> Option<HostRecord> {
        let removed_idx = self.records.iter().position(|r| r.host == identity)?;
        let selected = self.selected_record_index();
        let removed = self.records.remove(removed_idx);
        self.refilter();
        match selected {
            Some(sel) if sel != removed_idx => {
                let sel = if sel > removed_idx { sel - 1 } else { sel };
                self.reselect(Some(sel));
            }
            _ => self.clamp_cursor(),
        }
        Some(removed)
    }

    pub(crate) fn filter(&self) -> &str {
        &self.filter
    }

    pub(crate) fn filter_state(&self) -> FilterState {
        self.filter_state
    }

    pub(crate) fn is_filtering(&self) -> bool {
        self.filter_state == FilterState::Filtering
    }

    pub(crate) fn set_filter(&mut self, text: &str) {
        self.filter = text.to_string();
        self.refilter();
        self.cursor = 0;
    }

    pub(crate) fn begin_filtering(&mut self) {
        self.filter_state = FilterState::Filtering;
        self.set_filter("");
    }

    pub(crate) fn push_filter_char(&mut self, ch: char) {
        let mut text = self.filter.clone();
        text.push(ch);
        self.set_filter(&text);
    }

    pub(crate) fn pop_filter_char(&mut self) {
        let mut text = self.filter.clone();
        if text.pop().is_some() {
            self.set_filter(&text);
        }
    }

    pub(crate) fn commit_filter(&mut self) {
        self.filter_state = if self.filter.is_empty() {
            FilterState::Unfiltered
        } else {
            FilterState::Applied
        };
    }

    /// Leaves filter mode and shows every record again. Like any other
    /// filter change this puts the cursor back on the first row.
    pub(crate) fn clear_filter(&mut self) {
        self.filter_state = FilterState::Unfiltered;
        self.set_filter("");
    }

    pub(crate) fn post_status(&mut self, message: impl Into<String>, now: Instant) {
        self.status = Some(StatusMessage {
            text: message.into(),
            expires_at: now + self.status_lifetime,
        });
    }

    pub(crate) fn expire_status(&mut self, now: Instant) {
        if self
            .status
            .as_ref()
            .is_some_and(|status| now >= status.expires_at)
        {
            self.status = None;
        }
    }

    pub(crate) fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    /// Rows available to the list panel, including its borders and footer.
    pub(crate) fn set_height(&mut self, height: u16) {
        self.height = height;
    }

    pub(crate) fn page_size(&self) -> usize {
        let rows = self.height.saturating_sub(LIST_CHROME_HEIGHT) as usize;
        (rows / ITEM_HEIGHT).max(1)
    }

    /// Slice of the projection to draw so the cursor stays on screen.
    pub(crate) fn window(&self) -> Range<usize> {
        let page = self.page_size();
        let len = self.visible.len();
        if len == 0 {
            return 0..0;
        }
        let start = (self.cursor / page) * page;
        start..(start + page).min(len)
    }

    fn selected_record_index(&self) -> Option<usize> {
        self.visible.get(self.cursor).copied()
    }

    fn reselect(&mut self, record_idx: Option<usize>) {
        match record_idx.and_then(|idx| self.visible.iter().position(|&v| v == idx)) {
            Some(pos) => self.cursor = pos,
            None => self.clamp_cursor(),
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.visible.len().saturating_sub(1));
    }

    fn refilter(&mut self) {
        let needle = self.filter.to_lowercase();
        self.visible = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                needle.is_empty()
                    || HostItem(record)
                        .filter_value()
                        .to_lowercase()
                        .contains(&needle)
            })
            .map(|(idx, _)| idx)
            .collect();
    }
}
