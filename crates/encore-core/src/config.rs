use crate::errors::ConfigError;
use crate::model::{Judge, Performer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub const SUPPORTED_CONFIG_VERSION: u32 = 1;

/// Setup-time description of one event: the judge panel and the performer
/// roster. Loaded once by `encore-cli seed`; both sets are immutable once the
/// competition starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    pub version: u32,
    pub event: String,
    pub judges: Vec<Judge>,
    pub performers: Vec<Performer>,
}

pub fn load_event_config(path: &Path) -> Result<EventConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError(format!("failed to read config {}: {}", path.display(), e)))?;

    let cfg: EventConfig = serde_yaml::from_str(&raw)
        .map_err(|e| ConfigError(format!("failed to parse YAML: {}", e)))?;

    if cfg.version != SUPPORTED_CONFIG_VERSION {
        return Err(ConfigError(format!(
            "unsupported config version {} (supported: {})",
            cfg.version, SUPPORTED_CONFIG_VERSION
        )));
    }

    validate(&cfg)?;
    Ok(cfg)
}

fn validate(cfg: &EventConfig) -> Result<(), ConfigError> {
    if cfg.judges.is_empty() {
        return Err(ConfigError("config has no judges".into()));
    }
    if cfg.performers.is_empty() {
        return Err(ConfigError("config has no performers".into()));
    }

    let mut judge_ids = HashSet::new();
    let mut emails = HashSet::new();
    for judge in &cfg.judges {
        if !judge_ids.insert(judge.judge_id) {
            return Err(ConfigError(format!(
                "duplicate judge_id {} in config",
                judge.judge_id
            )));
        }
        if !emails.insert(judge.email.as_str()) {
            return Err(ConfigError(format!(
                "duplicate judge email {} in config",
                judge.email
            )));
        }
        if judge.weight <= 0.0 {
            return Err(ConfigError(format!(
                "judge {} has non-positive weight {}",
                judge.judge_id, judge.weight
            )));
        }
    }

    let mut performer_ids = HashSet::new();
    for performer in &cfg.performers {
        if !performer_ids.insert(performer.id) {
            return Err(ConfigError(format!(
                "duplicate performer id {} in config",
                performer.id
            )));
        }
    }

    Ok(())
}
