//! Page configuration: where to mount, header/footer text and the run catalog
//! offered by the run selector.
//!
//! Files may be JSON or YAML (picked by extension). Run entries written in
//! the `{ run-info: {...}, ... }` form are unwrapped to their `run-info`
//! record, so existing run configuration files can be pointed at directly.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::run::RunDescriptor;

/// Environment variable consulted when no config path is given.
pub const CONFIG_ENV: &str = "NIRX_CONFIG";

pub const DEFAULT_MOUNT_SELECTOR: &str = "#app";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ShellConfig {
    /// CSS selector of the host element the shell attaches to.
    pub mount_selector: String,
    pub title: String,
    pub footer: String,
    pub runs: Vec<RunDescriptor>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            mount_selector: DEFAULT_MOUNT_SELECTOR.to_string(),
            title: "neural-ir-explorer".to_string(),
            footer: "Made with \u{2665} - Demo under review at ECIR".to_string(),
            runs: Vec::new(),
        }
    }
}

impl ShellConfig {
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        let cfg: ShellConfig = serde_json::from_str(s)?;
        Ok(cfg.normalized())
    }

    fn normalized(mut self) -> Self {
        self.runs = self.runs.into_iter().map(unwrap_run_info).collect();
        if self.mount_selector.trim().is_empty() {
            self.mount_selector = DEFAULT_MOUNT_SELECTOR.to_string();
        }
        self
    }
}

fn unwrap_run_info(run: RunDescriptor) -> RunDescriptor {
    match run.into_value() {
        Value::Object(mut m) if m.contains_key("run-info") => {
            RunDescriptor::new(m.remove("run-info").unwrap_or_default())
        }
        other => RunDescriptor::new(other),
    }
}

#[cfg(feature = "config-files")]
mod files {
    use std::path::{Path, PathBuf};
    use tracing::{debug, info};

    use super::{ShellConfig, CONFIG_ENV};
    use crate::error::{Result, ShellError};

    impl ShellConfig {
        /// Load from a JSON or YAML file.
        pub fn load(path: &Path) -> Result<Self> {
            let text = std::fs::read_to_string(path).map_err(|e| ShellError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

            let is_yaml = matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("yaml" | "yml")
            );
            let parsed: std::result::Result<ShellConfig, String> = if is_yaml {
                serde_yaml::from_str(&text).map_err(|e| e.to_string())
            } else {
                serde_json::from_str(&text).map_err(|e| e.to_string())
            };

            let cfg = parsed
                .map_err(|message| ShellError::Config {
                    path: path.to_path_buf(),
                    message,
                })?
                .normalized();
            info!(path = %path.display(), runs = cfg.runs.len(), "config loaded");
            Ok(cfg)
        }

        /// `path`, else `$NIRX_CONFIG`, else defaults.
        pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
            let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
            match path.map(Path::to_path_buf).or(from_env) {
                Some(p) => Self::load(&p),
                None => {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }
}
