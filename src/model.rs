use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub(crate) struct HostRecord {
    pub(crate) host: String,
    #[serde(default)]
    pub(crate) hostname: String,
    #[serde(default)]
    pub(crate) user: String,
    #[serde(default)]
    pub(crate) forward_agent: bool,
    #[serde(default)]
    pub(crate) tags: Vec<String>,
    #[serde(default)]
    pub(crate) description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct HostsFile {
    #[serde(default)]
    pub(crate) hosts: Vec<HostRecord>,
}

/// Anything the host list can show: a title line, a description line and the
/// text the filter matches against.
pub(crate) trait ListEntry {
    fn title(&self) -> &str;
    fn description(&self) -> String;
    fn filter_value(&self) -> String;
}

/// Presentation wrapper so the persisted record stays free of display logic.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HostItem<'a>(pub(crate) &'a HostRecord);

impl ListEntry for HostItem<'_> {
    fn title(&self) -> &str {
        &self.0.host
    }

    fn description(&self) -> String {
        let tags = self
            .0
            .tags
            .iter()
            .filter(|tag| !tag.is_empty())
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");
        match (self.0.description.is_empty(), tags.is_empty()) {
            (_, true) => self.0.description.clone(),
            (true, false) => tags,
            (false, false) => format!("{} {tags}", self.0.description),
        }
    }

    fn filter_value(&self) -> String {
        let mut value = format!("{} {}", self.0.host, self.0.description);
        for tag in &self.0.tags {
            value.push(' ');
            value.push_str(tag);
        }
        value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Browse,
    Filtering,
    Adding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WizardField {
    Host,
    HostName,
    User,
    ForwardAgent,
    Tags,
    Description,
}

impl WizardField {
    pub(crate) const ALL: [WizardField; 6] = [
        WizardField::Host,
        WizardField::HostName,
        WizardField::User,
        WizardField::ForwardAgent,
        WizardField::Tags,
        WizardField::Description,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            WizardField::Host => "Host",
            WizardField::HostName => "HostName",
            WizardField::User => "User",
            WizardField::ForwardAgent => "ForwardAgent",
            WizardField::Tags => "Tags",
            WizardField::Description => "Description",
        }
    }

    pub(crate) fn hint(self) -> &'static str {
        match self {
            WizardField::ForwardAgent => "type true to enable",
            WizardField::Tags => "comma separated",
            _ => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AppEvent {
    Key(crossterm::event::KeyEvent),
    Resize(u16, u16),
    Tick,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    Continue,
    Quit,
    Connect(HostRecord),
}
