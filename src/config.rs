use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Flags that can come from a config file or the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub wrap_left: bool,
    pub tab_width: Option<usize>,
}

impl ConfigFlags {
    /// Merge two flag sets; `other` (usually the CLI) wins for valued options.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            wrap_left: self.wrap_left || other.wrap_left,
            tab_width: other.tab_width.or(self.tab_width),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("minvi").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("minvi")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("minvi").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("minvi").join("config");
        }
    }

    PathBuf::from(".minvirc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".minvirc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--wrap-left" {
            flags.wrap_left = true;
        } else if token == "--tab-width" {
            if let Some(next) = tokens.get(i + 1) {
                flags.tab_width = parse_tab_width(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--tab-width=") {
            flags.tab_width = parse_tab_width(value);
        }
        i += 1;
    }
    flags
}

fn parse_tab_width(s: &str) -> Option<usize> {
    s.parse().ok().filter(|&width| width > 0)
}
