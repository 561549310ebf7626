//! Command line and `dashnav.ron` configuration.
//!
//! File values are defaults; flags given on the command line win.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dashnav_core::{Capabilities, NavLink};
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Parser)]
#[command(
    name = "dashnav",
    version,
    about = "Navigate a partial-rendering dashboard from the terminal"
)]
pub struct Cli {
    /// Server that renders `/partials/{section}`.
    #[arg(long)]
    pub base_url: Option<String>,
    /// Address fragment to start from, e.g. `#/details/<id>`.
    #[arg(long)]
    pub fragment: Option<String>,
    /// Configuration file.
    #[arg(long, default_value = "dashnav.ron")]
    pub config: PathBuf,
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,
    /// Enable the table sorter for the overview table.
    #[arg(long)]
    pub table_sort: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub section: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub base_url: String,
    pub nav: Vec<NavEntry>,
    pub table_sort: bool,
    pub request_timeout_ms: Option<u64>,
    pub log: LogDestination,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            nav: vec![
                NavEntry {
                    label: "Overview".to_string(),
                    section: "overview".to_string(),
                },
                NavEntry {
                    label: "Details".to_string(),
                    section: "details".to_string(),
                },
            ],
            table_sort: false,
            request_timeout_ms: None,
            log: LogDestination::default(),
        }
    }
}

/// Effective settings after merging the file and the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub fragment: Option<String>,
    pub nav: Vec<NavLink>,
    pub capabilities: Capabilities,
    pub request_timeout: Option<Duration>,
    pub log: LogDestination,
}

impl Settings {
    pub fn resolve(cli: Cli, file: FileConfig) -> Self {
        Self {
            base_url: cli.base_url.unwrap_or(file.base_url),
            fragment: cli.fragment,
            nav: file
                .nav
                .into_iter()
                .map(|entry| NavLink::new(entry.label, entry.section))
                .collect(),
            capabilities: Capabilities {
                table_sort: cli.table_sort || file.table_sort,
            },
            request_timeout: file.request_timeout_ms.map(Duration::from_millis),
            log: cli.log.unwrap_or(file.log),
        }
    }
}

/// Reads the config file. A missing file yields `Ok(None)`.
pub fn load_file_config(path: &Path) -> anyhow::Result<Option<FileConfig>> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err).with_context(|| format!("reading {}", path.display())),
    };
    let config = ron::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("dashnav").chain(args.iter().copied()))
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_file_config(&dir.path().join("dashnav.ron")).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashnav.ron");
        fs::write(
            &path,
            r#"(base_url: "http://nas.local:9000", table_sort: true, request_timeout_ms: Some(1500))"#,
        )
        .unwrap();

        let loaded = load_file_config(&path).unwrap().unwrap();
        assert_eq!(loaded.base_url, "http://nas.local:9000");
        assert!(loaded.table_sort);
        assert_eq!(loaded.nav, FileConfig::default().nav);

        let settings = Settings::resolve(cli(&[]), loaded);
        assert_eq!(settings.request_timeout, Some(Duration::from_millis(1500)));
        assert!(settings.capabilities.table_sort);
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashnav.ron");
        fs::write(&path, "(base_url: ").unwrap();
        assert!(load_file_config(&path).is_err());
    }

    #[test]
    fn command_line_overrides_file() {
        let settings = Settings::resolve(
            cli(&[
                "--base-url",
                "http://other:1",
                "--fragment",
                "#/details/x",
                "--log",
                "terminal",
            ]),
            FileConfig::default(),
        );
        assert_eq!(settings.base_url, "http://other:1");
        assert_eq!(settings.fragment.as_deref(), Some("#/details/x"));
        assert_eq!(settings.log, LogDestination::Terminal);
        assert_eq!(settings.request_timeout, None);
        assert_eq!(settings.nav.len(), 2);
        assert!(!settings.capabilities.table_sort);
    }
}
