use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};

pub const DEFAULT_MAX_EPOCHS: usize = 100;
pub const DEFAULT_BASE_DELAY_MS: u64 = 1000;

/// Engine tunables.
///
/// # Fields
/// - `max_epochs`: ceiling for non-convergent runs; must be at least 1
/// - `base_delay_ms`: auto-step pacing at animation speed 1.0; the delay
///   between ticks is `base_delay_ms / animation_speed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub max_epochs: usize,
    pub base_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_epochs: DEFAULT_MAX_EPOCHS,
            base_delay_ms: DEFAULT_BASE_DELAY_MS,
        }
    }
}

impl EngineConfig {
    pub fn new(max_epochs: usize, base_delay_ms: u64) -> Self {
        EngineConfig { max_epochs, base_delay_ms }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_epochs == 0 {
            return Err(Error::invalid("max_epochs", self.max_epochs));
        }
        Ok(())
    }

    /// Reads a config from a JSON file. Missing fields take their defaults.
    pub fn load_json(path: impl AsRef<Path>) -> Result<EngineConfig> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        let reader = std::io::BufReader::new(file);
        let config: EngineConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
