//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory
//! (or the path given with `--config`), then applies `BOOKSHELF_LOG_LEVEL`
//! and `BOOKSHELF_STORE` env overrides, then command-line flags.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::AppError;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Library store configuration.
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// Store type name passed to the store registry (e.g. `"catalog"`).
    pub store: String,
}

/// Interactive shell configuration.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Write prompts to stdout. Disable for piped input.
    pub echo_prompts: bool,
}

/// Fully-resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub name: String,
    pub log_level: String,
    /// Append notices to this file instead of stderr (already expanded, no `~`).
    pub log_file: Option<PathBuf>,
    pub library: LibraryConfig,
    pub shell: ShellConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "bookshelf".into(),
            log_level: "info".into(),
            log_file: None,
            library: LibraryConfig { store: default_store() },
            shell: ShellConfig { echo_prompts: true },
        }
    }
}

/// Env and command-line overrides, applied on top of the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub log_level: Option<String>,
    pub store: Option<String>,
}

impl Overrides {
    /// Read `BOOKSHELF_LOG_LEVEL` and `BOOKSHELF_STORE`.
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("BOOKSHELF_LOG_LEVEL").ok(),
            store: env::var("BOOKSHELF_STORE").ok(),
        }
    }

    /// Layer `higher` on top of `self`; fields set in `higher` win.
    pub fn then(self, higher: Overrides) -> Self {
        Self {
            log_level: higher.log_level.or(self.log_level),
            store: higher.store.or(self.store),
        }
    }
}

/// Raw TOML shape, the `serde` target before resolution.
#[derive(Deserialize)]
struct RawConfig {
    shelf: RawShelf,
    #[serde(default)]
    library: RawLibrary,
    #[serde(default)]
    shell: RawShell,
}

#[derive(Deserialize)]
struct RawShelf {
    name: String,
    log_level: String,
    #[serde(default)]
    log_file: Option<String>,
}

#[derive(Deserialize)]
struct RawLibrary {
    #[serde(default = "default_store")]
    store: String,
}

impl Default for RawLibrary {
    fn default() -> Self {
        Self { store: default_store() }
    }
}

#[derive(Deserialize)]
struct RawShell {
    #[serde(default = "default_true")]
    echo_prompts: bool,
}

impl Default for RawShell {
    fn default() -> Self {
        Self { echo_prompts: true }
    }
}

fn default_store() -> String {
    "catalog".to_string()
}

fn default_true() -> bool {
    true
}

/// Load config, then apply env-var overrides and finally `cli` overrides.
///
/// With no explicit path, a missing `config/default.toml` falls back to
/// built-in defaults; an explicit path must be readable.
pub fn load(explicit_path: Option<&Path>, cli: Overrides) -> Result<Config, AppError> {
    let overrides = Overrides::from_env().then(cli);
    match explicit_path {
        Some(path) => load_from(path, &overrides),
        None => {
            let path = Path::new(DEFAULT_CONFIG_PATH);
            if path.exists() {
                load_from(path, &overrides)
            } else {
                Ok(apply(Config::default(), &overrides))
            }
        }
    }
}

/// Internal loader; accepts an explicit path and overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(path: &Path, overrides: &Overrides) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: RawConfig = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    let s = parsed.shelf;
    let config = Config {
        name: s.name,
        log_level: s.log_level,
        log_file: s.log_file.as_deref().map(expand_home),
        library: LibraryConfig { store: parsed.library.store },
        shell: ShellConfig { echo_prompts: parsed.shell.echo_prompts },
    };
    Ok(apply(config, overrides))
}

fn apply(mut config: Config, overrides: &Overrides) -> Config {
    if let Some(level) = &overrides.log_level {
        config.log_level = level.clone();
    }
    if let Some(store) = &overrides.store {
        config.library.store = store.clone();
    }
    config
}

/// Expand a leading `~` to the user's home directory.
/// Absolute or relative paths without `~` are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}
