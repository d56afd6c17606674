use crate::constants::{CONFIG_DIR, CONFIG_FILE, CONFIG_KEY};
use crate::optics::coc::is_valid_coc;
use crate::optics::units::split_number;
use crate::output::format_number;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One-line `coc: <value>` file remembering the last CoC between runs.
///
/// Every failure on this path is logged and swallowed; a broken cache only
/// means the default applies.
#[derive(Debug, Clone, Default)]
pub struct ConfigCache {
    path: Option<PathBuf>,
}

impl ConfigCache {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A cache that never reads or writes anything.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// `$HOME/.config/dof`, but only when `$HOME/.config` already exists.
    pub fn default_location() -> Self {
        let path = dirs::home_dir()
            .map(|home| home.join(CONFIG_DIR))
            .filter(|dir| dir.is_dir())
            .map(|dir| dir.join(CONFIG_FILE));
        debug!(?path, "config cache location");
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn load(&self) -> Option<f64> {
        let path = self.path.as_deref()?;
        match read_coc(path) {
            Ok(coc) => {
                debug!(?coc, path = %path.display(), "loaded config cache");
                coc
            }
            Err(e) => {
                debug!("config cache unreadable: {e:#}");
                None
            }
        }
    }

    pub fn save(
        &self,
        coc: f64,
    ) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        match write_coc(path, coc) {
            Ok(()) => debug!(coc, path = %path.display(), "saved config cache"),
            Err(e) => debug!("config cache not written: {e:#}"),
        }
    }
}

fn read_coc(path: &Path) -> Result<Option<f64>> {
    if !path.is_file() {
        return Ok(None);
    }
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_cached_coc(&text))
}

fn write_coc(
    path: &Path,
    coc: f64,
) -> Result<()> {
    fs::write(path, render_cached_coc(coc))
        .with_context(|| format!("writing {}", path.display()))
}

/// Find the first `coc : <float>` line. Whitespace around the colon is free,
/// trailing text after the number is ignored.
pub fn parse_cached_coc(text: &str) -> Option<f64> {
    text.lines().find_map(|line| {
        let rest = line.trim().strip_prefix(CONFIG_KEY)?;
        let rest = rest.trim_start().strip_prefix(':')?;
        let (value, _) = split_number(rest.trim())?;
        is_valid_coc(value).then_some(value)
    })
}

pub fn render_cached_coc(coc: f64) -> String {
    format!("{CONFIG_KEY}: {}", format_number(coc))
}
