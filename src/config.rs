use anyhow::{bail, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::theme::{apply_overrides, Theme, ThemeOverrides};

/// Refuse inputs whose LCS table would exceed this many cells.
pub const DEFAULT_MAX_TABLE_CELLS: u64 = 50_000_000;

#[derive(Debug, Clone)]
pub struct LdiffConfig {
    pub theme: Theme,
    pub unified: Option<bool>,
    pub context_lines: Option<usize>,
    pub max_table_cells: u64,
}

impl Default for LdiffConfig {
    fn default() -> Self {
        Self {
            theme: Theme::from_name("one-dark"),
            unified: None,
            context_lines: None,
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
        }
    }
}

impl LdiffConfig {
    /// Refuse inputs whose `(N+1) x (M+1)` LCS table exceeds `max_table_cells`.
    pub fn check_table_size(&self, old_lines: usize, new_lines: usize) -> Result<()> {
        let cells = (old_lines as u64 + 1).saturating_mul(new_lines as u64 + 1);
        if cells > self.max_table_cells {
            bail!(
                "inputs too large to compare: {old_lines} x {new_lines} lines needs {cells} table cells \
                 (max_table_cells = {})",
                self.max_table_cells
            );
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    theme: Option<String>,
    #[serde(default)]
    colors: Option<ThemeOverrides>,
    #[serde(default)]
    unified: Option<bool>,
    #[serde(default)]
    context_lines: Option<usize>,
    #[serde(default)]
    max_table_cells: Option<u64>,
}

fn config_path() -> PathBuf {
    let mut path = dirs_home().unwrap_or_else(|| PathBuf::from("."));
    path.push(".config");
    path.push("ldiff");
    path.push("config.toml");
    path
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Load config from `~/.config/ldiff/config.toml`, falling back to defaults.
pub fn load_config() -> LdiffConfig {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> LdiffConfig {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no config file, using defaults");
            return LdiffConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid config file, using defaults");
            LdiffConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<LdiffConfig, toml::de::Error> {
    let file: ConfigFile = toml::from_str(contents)?;

    // Load theme by name, apply color overrides
    let theme_name = file.theme.as_deref().unwrap_or("one-dark");
    let mut theme = Theme::from_name(theme_name);
    if let Some(ref overrides) = file.colors {
        apply_overrides(&mut theme, overrides);
    }

    Ok(LdiffConfig {
        theme,
        unified: file.unified,
        context_lines: file.context_lines,
        max_table_cells: file.max_table_cells.unwrap_or(DEFAULT_MAX_TABLE_CELLS),
    })
}
