//! File system locations and small read/write helpers

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::SESSION_ENV_VAR;

/// Path: `$WOTBLITZ_SESSION`, else `~/.config/wotblitz/session.json`
pub fn session_path() -> PathBuf {
    if let Some(path) = std::env::var_os(SESSION_ENV_VAR).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    default_session_path()
}

/// The per-user session file, ignoring any environment override.
pub fn default_session_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("wotblitz").join("session.json")
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
