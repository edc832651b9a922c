use std::collections::VecDeque;
use std::path::PathBuf;

use anyhow::Result;

use crate::app::constants::STATUS_READY;
use crate::app::list::HostList;
use crate::app::logging::prune_log_file;
use crate::app::wizard::AddWizard;
use crate::model::{HostRecord, Mode};
use crate::storage::{config_path, load_hosts, log_path, save_hosts};

pub(crate) mod constants;
mod handlers;
mod helpers;
pub(crate) mod list;
mod logging;
pub(crate) mod wizard;

pub(crate) struct App {
    pub(crate) config_path: PathBuf,
    pub(crate) log_path: PathBuf,
    pub(crate) log_lines: VecDeque<String>,
    pub(crate) hosts: HostList,
    pub(crate) wizard: AddWizard,
    pub(crate) dirty: bool,
    /// Last failed save, cleared by a successful one. Printed on exit.
    pub(crate) save_error: Option<String>,
}

impl App {
    pub(crate) fn load() -> Result<Self> {
        Ok(Self::load_from(config_path()?, log_path()?))
    }

    /// Reads the host file. A missing or unreadable file is reported and the
    /// session starts with an empty list.
    pub(crate) fn load_from(config_path: PathBuf, log_path: PathBuf) -> Self {
        prune_log_file(&log_path);
        let (records, load_error) = match load_hosts(&config_path) {
            Ok(records) => (records, None),
            Err(err) => (Vec::new(), Some(err)),
        };
        let mut app = Self::new(config_path, log_path, records);
        match load_error {
            Some(err) => {
                let message = format!("Could not load hosts: {err:#}");
                eprintln!("{message}");
                app.set_status(message);
            }
            None => {
                let message = format!(
                    "Loaded {} hosts from {}",
                    app.hosts.len(),
                    app.config_path.display()
                );
                app.set_status(message);
            }
        }
        app
    }

    pub(crate) fn new(config_path: PathBuf, log_path: PathBuf, records: Vec<HostRecord>) -> Self {
        Self {
            config_path,
            log_path,
            log_lines: VecDeque::new(),
            hosts: HostList::new(records),
            wizard: AddWizard::default(),
            dirty: false,
            save_error: None,
        }
    }

    pub(crate) fn mode(&self) -> Mode {
        if self.wizard.is_active() {
            Mode::Adding
        } else if self.hosts.is_filtering() {
            Mode::Filtering
        } else {
            Mode::Browse
        }
    }

    pub(crate) fn save(&mut self) {
        match save_hosts(&self.config_path, self.hosts.records()) {
            Ok(()) => {
                self.dirty = false;
                self.save_error = None;
                self.set_status(format!(
                    "Saved {} hosts to {}",
                    self.hosts.len(),
                    self.config_path.display()
                ));
            }
            Err(err) => {
                let message = format!("Save failed: {err:#}");
                self.save_error = Some(message.clone());
                self.set_status(message);
            }
        }
    }

    pub(crate) fn status_line(&self) -> &str {
        self.hosts.status().unwrap_or(STATUS_READY)
    }
}
