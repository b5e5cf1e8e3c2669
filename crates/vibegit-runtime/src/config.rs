use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_ROUNDS_DIR: &str = "rounds";

pub const PORT_VAR: &str = "PORT";
pub const ROUNDS_DIR_VAR: &str = "VIBEGIT_ROUNDS_DIR";
pub const CONFIG_VAR: &str = "VIBEGIT_CONFIG";

const CAPTURED_VARS: [&str; 4] = [PORT_VAR, ROUNDS_DIR_VAR, CONFIG_VAR, "HOME"];

/// Snapshot of the environment variables that take part in resolution.
///
/// Resolution never reads the process environment directly, so tests build
/// an `Env` by hand instead of mutating globals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: HashMap<String, String>,
}

impl Env {
    /// Capture the relevant variables from the process environment
    pub fn capture() -> Self {
        Self::from_pairs(
            CAPTURED_VARS
                .iter()
                .filter_map(|key| std::env::var(key).ok().map(|value| (*key, value))),
        )
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of `key`; blank values count as unset
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    fn expand_tilde(&self, path: &str) -> PathBuf {
        if let Some(stripped) = path.strip_prefix("~/")
            && let Some(home) = self.get("HOME")
        {
            return PathBuf::from(home).join(stripped);
        }
        PathBuf::from(path)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundsSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub rounds: RoundsSection,
}

/// Host and port the backend binds to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    /// `0` asks the OS for an ephemeral port
    pub port: u16,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load the config file found by [`resolve_config_path`]; defaults when
    /// there is none
    pub fn load_resolved(explicit: Option<&Path>, env: &Env) -> Result<Self> {
        match resolve_config_path(explicit, env) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load_from(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Resolve bind settings: flag > env > config file > default
    pub fn server_settings(
        &self,
        host_flag: Option<&str>,
        port_flag: Option<u16>,
        env: &Env,
    ) -> Result<ServerSettings> {
        let host = host_flag
            .map(str::to_string)
            .or_else(|| self.server.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match port_flag {
            Some(port) => port,
            None => match env.get(PORT_VAR) {
                Some(raw) => raw.parse::<u16>().map_err(|_| {
                    Error::Config(format!("{} is not a valid port: {:?}", PORT_VAR, raw))
                })?,
                None => self.server.port.unwrap_or(0),
            },
        };

        Ok(ServerSettings { host, port })
    }

    /// Resolve the rounds directory: flag > env > config file > `./rounds`
    pub fn rounds_dir(&self, dir_flag: Option<&Path>, env: &Env) -> PathBuf {
        if let Some(dir) = dir_flag {
            return dir.to_path_buf();
        }
        if let Some(dir) = env.get(ROUNDS_DIR_VAR) {
            return env.expand_tilde(dir);
        }
        if let Some(dir) = &self.rounds.dir {
            return match dir.to_str() {
                Some(s) => env.expand_tilde(s),
                None => dir.clone(),
            };
        }
        PathBuf::from(DEFAULT_ROUNDS_DIR)
    }
}

/// Resolve the config file path based on priority:
/// 1. Explicit path
/// 2. VIBEGIT_CONFIG environment variable (with tilde expansion)
/// 3. `<config dir>/vibegit/config.toml`
pub fn resolve_config_path(explicit: Option<&Path>, env: &Env) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(path) = env.get(CONFIG_VAR) {
        return Some(env.expand_tilde(path));
    }

    dirs::config_dir().map(|dir| dir.join("vibegit").join("config.toml"))
}
