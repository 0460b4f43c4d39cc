//! Start-up configuration: environment variables plus a small JSON
//! preferences file that remembers the last chosen difficulty.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::types::Difficulty;

pub const ENV_SEED: &str = "BLOCKFALL_SEED";
pub const ENV_DIFFICULTY: &str = "BLOCKFALL_DIFFICULTY";
pub const ENV_PREFS_PATH: &str = "BLOCKFALL_PREFS_PATH";
pub const ENV_LOG_PATH: &str = "BLOCKFALL_LOG_PATH";

pub const DEFAULT_PREFS_PATH: &str = "blockfall-prefs.json";
pub const DEFAULT_LOG_PATH: &str = "blockfall.log";

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub difficulty: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default().as_str().to_string(),
        }
    }
}

impl Preferences {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty: difficulty.as_str().to_string(),
        }
    }

    /// Read preferences; `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading preferences from {}", path.display()))?;
        let prefs = serde_json::from_str(&text)
            .with_context(|| format!("parsing preferences in {}", path.display()))?;
        Ok(Some(prefs))
    }

    /// Like [`Preferences::load`], but any failure falls back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(Some(prefs)) => prefs,
            Ok(None) => Self::default(),
            Err(err) => {
                warn!("ignoring preferences file: {err:#}");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Parsed difficulty; unknown names fall back to the default profile.
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_str(&self.difficulty).unwrap_or_else(|| {
            warn!("unknown difficulty {:?} in preferences", self.difficulty);
            Difficulty::default()
        })
    }
}

/// Everything the binary needs before the first frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub seed: u32,
    pub difficulty: Difficulty,
    pub prefs_path: PathBuf,
    pub log_path: PathBuf,
}

impl Settings {
    /// Create from environment variables and the preferences file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Log file location only. Resolved before the logger is installed, so
    /// everything else read at start-up can already log.
    pub fn log_path_from_env() -> PathBuf {
        Self::log_path_from_lookup(|key| std::env::var(key).ok())
    }

    pub fn log_path_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
        non_empty(lookup(ENV_LOG_PATH))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH))
    }

    /// Same as [`Settings::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_lookup_with_clock(lookup, clock_seed)
    }

    /// `clock` supplies the seed when `BLOCKFALL_SEED` is unset or invalid.
    pub fn from_lookup_with_clock(
        lookup: impl Fn(&str) -> Option<String>,
        clock: impl FnOnce() -> u32,
    ) -> Self {
        let var = |key: &str| non_empty(lookup(key));

        let seed = match var(ENV_SEED) {
            Some(text) => text.parse().unwrap_or_else(|_| {
                warn!("{ENV_SEED}={text:?} is not a u32, using the clock");
                clock()
            }),
            None => clock(),
        };

        let prefs_path = var(ENV_PREFS_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFS_PATH));

        let log_path = Self::log_path_from_lookup(&lookup);

        let from_env = var(ENV_DIFFICULTY).and_then(|name| {
            let parsed = Difficulty::from_str(&name);
            if parsed.is_none() {
                warn!("{ENV_DIFFICULTY}={name:?} is not easy, medium or hard");
            }
            parsed
        });
        let difficulty =
            from_env.unwrap_or_else(|| Preferences::load_or_default(&prefs_path).difficulty());

        Self {
            seed,
            difficulty,
            prefs_path,
            log_path,
        }
    }

    /// Remember `difficulty` for the next session.
    pub fn persist_difficulty(&self, difficulty: Difficulty) -> Result<()> {
        Preferences::for_difficulty(difficulty).save(&self.prefs_path)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
