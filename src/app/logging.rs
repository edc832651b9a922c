use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use chrono::{Datelike, NaiveDateTime};

use crate::app::App;
use crate::app::constants::{
    LOG_MAX_ENTRIES, LOG_MAX_IN_MEMORY, LOG_PARSE_FORMAT, LOG_RETENTION_DAYS, LOG_SEPARATOR,
    LOG_TIMESTAMP_FORMAT,
};

impl App {
    /// Shows `message` in the status line and records it in the log.
    pub(crate) fn set_status(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.log_line(&message);
        self.hosts.post_status(message, Instant::now());
    }

    pub(crate) fn log_line(&mut self, message: &str) {
        let timestamp = chrono::Local::now().format(LOG_TIMESTAMP_FORMAT);
        let line = format!("{timestamp}{LOG_SEPARATOR}{message}");
        if let Some(parent) = self.log_path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(mut file) = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
        {
            let _ = writeln!(file, "{line}");
        }
        self.log_lines.push_back(line);
        while self.log_lines.len() > LOG_MAX_IN_MEMORY {
            self.log_lines.pop_front();
        }
    }
}

/// Rewrites the log file keeping only recent entries; an empty result removes
/// the file.
pub(crate) fn prune_log_file(path: &Path) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    let kept = retained_lines(&content, chrono::Local::now().naive_local());
    if kept.is_empty() {
        let _ = fs::remove_file(path);
        return;
    }
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let _ = fs::write(path, kept.join("\n") + "\n");
}

fn retained_lines(content: &str, now: NaiveDateTime) -> Vec<&str> {
    let cutoff = now - chrono::Duration::days(LOG_RETENTION_DAYS);
    let kept: Vec<&str> = content
        .lines()
        .filter(|line| {
            line.split_once(LOG_SEPARATOR)
                .and_then(|(stamp, _)| entry_time(stamp, now))
                .is_some_and(|at| at >= cutoff)
        })
        .collect();
    let skip = kept.len().saturating_sub(LOG_MAX_ENTRIES);
    kept[skip..].to_vec()
}

/// Log stamps carry no year. A stamp is dated in the current year unless that
/// would put it more than a day ahead of `now`, in which case it was written
/// last year. Feb 29 stamps that fit neither year are unreadable.
fn entry_time(stamp: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let in_year = |year: i32| {
        NaiveDateTime::parse_from_str(&format!("{year}-{stamp}"), LOG_PARSE_FORMAT).ok()
    };
    match in_year(now.year()) {
        Some(at) if at <= now + chrono::Duration::days(1) => Some(at),
        _ => in_year(now.year() - 1),
    }
}
