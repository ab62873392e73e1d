use crate::app::cli::Cli;
use crate::app::models::RuntimeConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

const DEFAULT_MAX_DEPTH: usize = 3;

/// Contents of `config.toml`. Every key is optional.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub exclude: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub hide_files: Option<bool>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join(".config")
            .join("wiki_sidebar")
            .join("config.toml")
    })
}

/// Loads the config file. An explicit path must exist; the default one may be absent.
fn load_config_file(explicit: Option<&Path>) -> Result<FileConfig> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(FileConfig::default()),
        },
    };

    log::debug!("Reading config from {}", config_path.display());

    let content = fs::read_to_string(&config_path)
        .context(format!("Failed to read config at {:?}", config_path))?;

    parse_config(&content).context(format!("Failed to parse {:?}", config_path))
}

fn parse_config(content: &str) -> Result<FileConfig> {
    Ok(toml::from_str(content)?)
}

/// Drops repeated names while keeping first-seen order.
fn dedup(mut names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names.retain(|item| seen.insert(item.clone()));
    names
}

/// Expands a leading `~` and makes the path absolute without touching the filesystem.
pub fn resolve_root(raw: &Path) -> Result<PathBuf> {
    let expanded = match raw.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .context("Could not determine home directory")?
            .join(rest),
        Err(_) => raw.to_path_buf(),
    };

    let absolute = std::path::absolute(&expanded)
        .context(format!("Failed to resolve {:?}", raw))?;

    Ok(normalize(&absolute))
}

/// Lexically folds `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

fn merge(root: PathBuf, cli: &Cli, file: FileConfig) -> RuntimeConfig {
    RuntimeConfig {
        root,
        // --exclude replaces the file list rather than extending it
        exclude: dedup(cli.exclude.clone().or(file.exclude).unwrap_or_default()),
        max_depth: cli
            .max_depth
            .or(file.max_depth)
            .unwrap_or(DEFAULT_MAX_DEPTH),
        hide_files: cli.hide_files || file.hide_files.unwrap_or(false),
    }
}

pub fn resolve_config(cli: Cli) -> Result<RuntimeConfig> {
    let file = load_config_file(cli.config.as_deref())?;
    let root = resolve_root(&cli.wiki_root)?;

    let config = merge(root, &cli, file);
    log::debug!("Resolved config: {:?}", config);

    Ok(config)
}
