use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use anyhow::{Context, Result};

use crate::model::HostRecord;

pub(crate) const SSH_PROGRAM: &str = "ssh";
pub(crate) const IMPORT_TAG: &str = "imported";
const SSH_CONFIG_PATH: &str = "~/.ssh/config";

/// `user@hostname`, passed through as typed.
pub(crate) fn connection_target(host: &HostRecord) -> String {
    format!("{}@{}", host.user, host.hostname)
}

pub(crate) fn ssh_command(host: &HostRecord) -> Command {
    let mut command = Command::new(SSH_PROGRAM);
    command
        .arg(connection_target(host))
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    command
}

/// Runs `ssh` in the foreground. The caller must have released the terminal.
pub(crate) fn launch(host: &HostRecord) -> Result<ExitStatus> {
    let status = ssh_command(host)
        .status()
        .with_context(|| format!("start {SSH_PROGRAM} {}", connection_target(host)))?;
    Ok(status)
}

pub(crate) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

pub(crate) fn default_ssh_config_path() -> PathBuf {
    expand_tilde(SSH_CONFIG_PATH)
}

pub(crate) fn import_ssh_config(path: &Path) -> Result<Vec<HostRecord>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(parse_ssh_config(&content))
}

/// Collects concrete `Host` aliases with the `HostName`, `User` and
/// `ForwardAgent` set directly in their block. Patterns are skipped.
pub(crate) fn parse_ssh_config(content: &str) -> Vec<HostRecord> {
    let mut hosts: Vec<HostRecord> = Vec::new();
    let mut block: Vec<usize> = Vec::new();

    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((keyword, value)) = split_directive(line) else {
            continue;
        };
        match keyword.to_ascii_lowercase().as_str() {
            "host" => {
                block.clear();
                for alias in value.split_whitespace() {
                    if is_pattern(alias) || hosts.iter().any(|h| h.host == alias) {
                        continue;
                    }
                    block.push(hosts.len());
                    hosts.push(HostRecord {
                        host: alias.to_string(),
                        tags: vec![IMPORT_TAG.to_string()],
                        ..HostRecord::default()
                    });
                }
            }
            "match" => block.clear(),
            "hostname" => {
                for &idx in &block {
                    if hosts[idx].hostname.is_empty() {
                        hosts[idx].hostname = value.to_string();
                    }
                }
            }
            "user" => {
                for &idx in &block {
                    if hosts[idx].user.is_empty() {
                        hosts[idx].user = value.to_string();
                    }
                }
            }
            "forwardagent" => {
                let enabled = value.eq_ignore_ascii_case("yes");
                for &idx in &block {
                    hosts[idx].forward_agent = enabled;
                }
            }
            _ => {}
        }
    }

    for host in &mut hosts {
        if host.hostname.is_empty() {
            host.hostname = host.host.clone();
        }
    }
    hosts
}

fn split_directive(line: &str) -> Option<(&str, &str)> {
    let split_at = line.find(|c: char| c.is_whitespace() || c == '=')?;
    let (keyword, rest) = line.split_at(split_at);
    let value = rest
        .trim_start_matches(|c: char| c.is_whitespace() || c == '=')
        .trim()
        .trim_matches('"');
    if value.is_empty() {
        return None;
    }
    Some((keyword, value))
}

fn is_pattern(alias: &str) -> bool {
    alias.contains(['*', '?', '!'])
}
