use std::time::Duration;

pub(crate) const STATUS_READY: &str = "Ready";
pub(crate) const STATUS_LIFETIME: Duration = Duration::from_secs(2);

pub(crate) const LOG_TIMESTAMP_FORMAT: &str = "%m-%d %H:%M:%S";
pub(crate) const LOG_PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub(crate) const LOG_SEPARATOR: &str = " | ";
pub(crate) const LOG_NO_LOGS_MESSAGE: &str = "No logs yet";

pub(crate) const LOG_RETENTION_DAYS: i64 = 7;
pub(crate) const LOG_MAX_ENTRIES: usize = 10_000;
pub(crate) const LOG_MAX_IN_MEMORY: usize = 100;

pub(crate) const NO_SELECTION_MESSAGE: &str = "No host selected";
pub(crate) const WIZARD_STARTED_MESSAGE: &str = "Adding new host, Enter confirms each field";
pub(crate) const GENERATED_DESCRIPTION: &str = "generated host";
