use crate::model::{HostRecord, WizardField};

const FIELD_COUNT: usize = WizardField::ALL.len();
const TAG_DELIMITER: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WizardState {
    Idle,
    EditingField(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WizardStep {
    Next(WizardField),
    Complete(HostRecord),
}

/// Collects one host record field by field. There is no way back out once
/// editing has started; every field has to be committed.
#[derive(Debug, Clone)]
pub(crate) struct AddWizard {
    state: WizardState,
    buffers: [String; FIELD_COUNT],
}

impl Default for AddWizard {
    fn default() -> Self {
        Self {
            state: WizardState::Idle,
            buffers: Default::default(),
        }
    }
}

impl AddWizard {
    pub(crate) fn begin(&mut self) {
        for buffer in &mut self.buffers {
            buffer.clear();
        }
        self.state = WizardState::EditingField(0);
    }

    pub(crate) fn is_active(&self) -> bool {
        matches!(self.state, WizardState::EditingField(_))
    }

    pub(crate) fn active_field(&self) -> Option<WizardField> {
        match self.state {
            WizardState::EditingField(idx) => WizardField::ALL.get(idx).copied(),
            WizardState::Idle => None,
        }
    }

    pub(crate) fn buffer(&self, field: WizardField) -> &str {
        &self.buffers[field_index(field)]
    }

    pub(crate) fn push_char(&mut self, ch: char) {
        if let WizardState::EditingField(idx) = self.state {
            self.buffers[idx].push(ch);
        }
    }

    pub(crate) fn backspace(&mut self) {
        if let WizardState::EditingField(idx) = self.state {
            self.buffers[idx].pop();
        }
    }

    pub(crate) fn commit_field(&mut self) -> Option<WizardStep> {
        let WizardState::EditingField(idx) = self.state else {
            return None;
        };
        let next = idx + 1;
        if next < FIELD_COUNT {
            self.state = WizardState::EditingField(next);
            return Some(WizardStep::Next(WizardField::ALL[next]));
        }
        self.state = WizardState::Idle;
        Some(WizardStep::Complete(self.build_record()))
    }

    fn build_record(&self) -> HostRecord {
        HostRecord {
            host: self.buffer(WizardField::Host).to_string(),
            hostname: self.buffer(WizardField::HostName).to_string(),
            user: self.buffer(WizardField::User).to_string(),
            forward_agent: parse_forward_agent(self.buffer(WizardField::ForwardAgent)),
            tags: parse_tags(self.buffer(WizardField::Tags)),
            description: self.buffer(WizardField::Description).to_string(),
        }
    }
}

fn field_index(field: WizardField) -> usize {
    WizardField::ALL
        .iter()
        .position(|candidate| *candidate == field)
        .unwrap_or(0)
}

/// Only the exact text `true` enables agent forwarding.
pub(crate) fn parse_forward_agent(text: &str) -> bool {
    text == "true"
}

pub(crate) fn parse_tags(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(TAG_DELIMITER).map(str::to_string).collect()
}
