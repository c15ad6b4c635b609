use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemadocConfig {
    #[serde(default)]
    pub schema: SchemaSettings,

    #[serde(default)]
    pub tui: TuiSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaSettings {
    /// Default SDL file to load when --schema is not given
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiSettings {
    #[serde(default = "default_start_expanded")]
    pub start_expanded: bool,
}

fn default_start_expanded() -> bool {
    true
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            start_expanded: default_start_expanded(),
        }
    }
}

impl SchemadocConfig {
    /// Load configuration by walking up from `start_path` looking for
    /// `.schemadoc.yml`. The config file is optional; defaults apply
    /// when none is found.
    pub fn load(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(config_path) => {
                let content = std::fs::read_to_string(&config_path)?;
                let config: SchemadocConfig = serde_yaml::from_str(&content)?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(".schemadoc.yml");
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
