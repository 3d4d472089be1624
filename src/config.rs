use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Defaults read from the rc file and merged with CLI flags. File flags
/// load global first, then the local override, then the command line;
/// later sources win for valued options.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub margin: Option<u16>,
    pub handles: bool,
    pub no_handles: bool,
    pub state_file: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            margin: other.margin.or(self.margin),
            handles: self.handles || other.handles,
            no_handles: self.no_handles || other.no_handles,
            state_file: other
                .state_file
                .clone()
                .or_else(|| self.state_file.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("gutters").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("gutters")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("gutters").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("gutters").join("config");
        }
    }

    PathBuf::from(".guttersrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".guttersrc")
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

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# gutters defaults (saved with --save)".to_string());
    if let Some(margin) = flags.margin {
        lines.push(format!("--margin {margin}"));
    }
    if flags.handles {
        lines.push("--handles".to_string());
    }
    if flags.no_handles {
        lines.push("--no-handles".to_string());
    }
    if let Some(path) = &flags.state_file {
        lines.push(format!("--state-file {}", path.display()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--handles" {
            flags.handles = true;
        } else if token == "--no-handles" {
            flags.no_handles = true;
        } else if token == "--margin" {
            if let Some(next) = tokens.get(i + 1) {
                flags.margin = next.parse().ok();
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--margin=") {
            flags.margin = value.parse().ok();
        } else if token == "--state-file" {
            if let Some(next) = tokens.get(i + 1) {
                flags.state_file = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--state-file=") {
            flags.state_file = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}
