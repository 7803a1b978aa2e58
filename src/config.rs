use crate::cli::NameStrategyKind;
use crate::error::{CvifyError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_keywords: Vec<String>,
    pub report_name: String,
    pub name_strategy: NameStrategyKind,
    pub package_matched: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_keywords: vec!["Python".into(), "SQL".into(), "T24".into(), "Agile".into()],
            report_name: "CV_Report".into(),
            name_strategy: NameStrategyKind::Heuristic,
            package_matched: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CvifyError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("cvify").join("config.json"))
    }
}
