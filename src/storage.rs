use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::{HostRecord, HostsFile};

const APP_DIR: &str = "quickssh";
const STORE_FILE: &str = "hosts.toml";
const LOCAL_STORE_FILE: &str = ".mysshconfig.toml";
const LOG_FILE: &str = "quickssh.log";

#[cfg(windows)]
pub(crate) const CONFIG_DIR_VAR: &str = "LOCALAPPDATA";
#[cfg(not(windows))]
pub(crate) const CONFIG_DIR_VAR: &str = "XDG_CONFIG_HOME";

pub(crate) fn config_path() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("current dir")?;
    Ok(resolve_config_path(std::env::var(CONFIG_DIR_VAR).ok(), &cwd))
}

pub(crate) fn resolve_config_path(config_dir: Option<String>, cwd: &Path) -> PathBuf {
    match config_dir.filter(|dir| !dir.trim().is_empty()) {
        Some(dir) => {
            let mut path = PathBuf::from(dir);
            path.push(APP_DIR);
            path.push(STORE_FILE);
            path
        }
        None => cwd.join(LOCAL_STORE_FILE),
    }
}

pub(crate) fn log_path() -> Result<PathBuf> {
    if let Some(mut dir) = dirs::data_local_dir() {
        dir.push(APP_DIR);
        dir.push(LOG_FILE);
        return Ok(dir);
    }
    let mut fallback = std::env::current_dir().context("current dir")?;
    fallback.push(LOG_FILE);
    Ok(fallback)
}

pub(crate) fn load_hosts(path: &Path) -> Result<Vec<HostRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read host file {}", path.display()))?;
    let file: HostsFile = toml::from_str(&content)
        .with_context(|| format!("parse host file {}", path.display()))?;
    Ok(file.hosts)
}

pub(crate) fn save_hosts(path: &Path, hosts: &[HostRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("create config dir")?;
        }
    }
    let file = HostsFile {
        hosts: hosts.to_vec(),
    };
    let content = toml::to_string_pretty(&file).context("serialize host file")?;
    fs::write(path, content).context("write host file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store_path(name: &str) -> PathBuf {
        let mut base = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        base.push(format!("quickssh-store-test-{name}-{nanos}"));
        base.push(STORE_FILE);
        base
    }

    fn host(name: &str, tags: &[&str]) -> HostRecord {
        HostRecord {
            host: name.to_string(),
            hostname: format!("{name}.example.net"),
            user: "ops".to_string(),
            forward_agent: name.len() % 2 == 0,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            description: format!("{name} box"),
        }
    }

    #[test]
    fn save_then_load_keeps_content_and_order() {
        let path = temp_store_path("roundtrip");
        let hosts = vec![
            host("web", &["prod"]),
            host("db", &[]),
            host("bastion", &["edge", "prod"]),
        ];
        save_hosts(&path, &hosts).unwrap();
        let loaded = load_hosts(&path).unwrap();
        assert_eq!(loaded, hosts);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn save_overwrites_previous_content() {
        let path = temp_store_path("overwrite");
        save_hosts(&path, &[host("a", &[]), host("b", &[])]).unwrap();
        save_hosts(&path, &[host("c", &[])]).unwrap();
        let loaded = load_hosts(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].host, "c");
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn empty_list_round_trips() {
        let path = temp_store_path("empty");
        save_hosts(&path, &[]).unwrap();
        assert!(load_hosts(&path).unwrap().is_empty());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn saved_file_uses_documented_keys() {
        let path = temp_store_path("keys");
        save_hosts(&path, &[host("web", &["prod"])]).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let keys = [
            "[[hosts]]",
            "host =",
            "hostname =",
            "user =",
            "forward_agent =",
            "tags =",
            "description =",
        ];
        for key in keys {
            assert!(content.contains(key), "missing {key} in {content}");
        }
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn load_reports_missing_and_malformed_files() {
        let path = temp_store_path("missing");
        assert!(load_hosts(&path).is_err());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "hosts = 12").unwrap();
        let err = load_hosts(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parse host file"));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn config_path_prefers_config_dir_variable() {
        let cwd = PathBuf::from("/work");
        let path = resolve_config_path(Some("/cfg".to_string()), &cwd);
        assert_eq!(path, PathBuf::from("/cfg").join("quickssh").join("hosts.toml"));
        assert_eq!(
            resolve_config_path(None, &cwd),
            cwd.join(".mysshconfig.toml")
        );
        assert_eq!(
            resolve_config_path(Some("  ".to_string()), &cwd),
            cwd.join(".mysshconfig.toml")
        );
    }
}
