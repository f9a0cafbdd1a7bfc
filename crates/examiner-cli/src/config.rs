//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level examiner configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExaminerConfig {
    /// Id of the subject the session files its exam under.
    #[serde(default = "default_subject_id")]
    pub subject_id: u32,
    /// Name of that subject.
    #[serde(default = "default_subject_name")]
    pub subject_name: String,
    /// Time budget for definition files that don't give one.
    #[serde(default = "default_time_minutes")]
    pub default_time_minutes: u32,
}

fn default_subject_id() -> u32 {
    1
}
fn default_subject_name() -> String {
    "General Knowledge".to_string()
}
fn default_time_minutes() -> u32 {
    60
}

impl Default for ExaminerConfig {
    fn default() -> Self {
        Self {
            subject_id: default_subject_id(),
            subject_name: default_subject_name(),
            default_time_minutes: default_time_minutes(),
        }
    }
}

/// Load config from an explicit path, or from `examiner.toml` in the
/// current directory if it exists.
///
/// `EXAMINER_SUBJECT_NAME` overrides the subject name from either source.
pub fn load_config_from(path: Option<&Path>) -> Result<ExaminerConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("examiner.toml");
            local.exists().then_some(local)
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            toml::from_str::<ExaminerConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ExaminerConfig::default(),
    };

    if let Ok(name) = std::env::var("EXAMINER_SUBJECT_NAME") {
        if !name.trim().is_empty() {
            config.subject_name = name;
        }
    }

    Ok(config)
}
