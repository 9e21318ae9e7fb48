use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[cfg(not(target_arch = "wasm32"))]
use anyhow::Context;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

#[cfg(not(target_arch = "wasm32"))]
const CONFIG_FILE: &str = "config.json";
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_ENV: &str = "PROJECT_BOARD_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

/// Every user-facing string the board renders.
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub active_heading: &'static str,
    pub finished_heading: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub manday: &'static str,
    pub submit: &'static str,
    pub invalid_input: &'static str,
    pub dismiss: &'static str,
    pub day_unit: &'static str,
    pub month_unit: &'static str,
}

const JA: Labels = Labels {
    active_heading: "実行中プロジェクト",
    finished_heading: "完了プロジェクト",
    title: "タイトル",
    description: "説明",
    manday: "工数（人日）",
    submit: "プロジェクト追加",
    invalid_input: "入力値が正しくありません。再度お試しください。",
    dismiss: "OK",
    day_unit: "人日",
    month_unit: "人月",
};

const EN: Labels = Labels {
    active_heading: "Active Projects",
    finished_heading: "Finished Projects",
    title: "Title",
    description: "Description",
    manday: "Effort (person-days)",
    submit: "Add Project",
    invalid_input: "Invalid input. Please try again.",
    dismiss: "OK",
    day_unit: "person-days",
    month_unit: "person-months",
};

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Self::Ja => &JA,
            Self::En => &EN,
        }
    }
}

/// Bounds applied to the creation form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputRules {
    pub description_min_length: usize,
    pub manday_min: f64,
    pub manday_max: f64,
}

impl Default for InputRules {
    fn default() -> Self {
        Self {
            description_min_length: 5,
            manday_min: 1.0,
            manday_max: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub locale: Locale,
    /// Effort at or above this many person-days is shown in person-months,
    /// and it is also the days-per-month divisor.
    pub month_threshold: f64,
    pub rules: InputRules,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            month_threshold: 20.0,
            rules: InputRules::default(),
        }
    }
}

impl BoardConfig {
    pub fn labels(&self) -> &'static Labels {
        self.locale.labels()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.month_threshold.is_nan() || self.month_threshold <= 0.0 {
            return Err(ConfigError::NonPositiveThreshold(self.month_threshold));
        }
        if self.rules.manday_min > self.rules.manday_max {
            return Err(ConfigError::InvertedMandayRange {
                min: self.rules.manday_min,
                max: self.rules.manday_max,
            });
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl BoardConfig {
    /// Loads the user's config file, falling back to defaults when it is
    /// missing or unusable.
    pub fn load() -> Self {
        let path = match config_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("no config location, using defaults: {e:#}");
                return Self::default();
            }
        };
        if !path.exists() {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), locale = ?config.locale, "config loaded");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "failed to load config, using defaults: {e:#}");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("failed to create config directory")?;
        }
        let content = serde_json::to_string_pretty(self).context("failed to serialize config")?;
        std::fs::write(path, content).context("failed to write config file")?;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
impl BoardConfig {
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn config_path() -> anyhow::Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let dirs = directories::ProjectDirs::from("com", "dx", "project_board")
        .context("unable to resolve config directory")?;
    Ok(dirs.config_dir().join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page_fixtures() {
        let config = BoardConfig::default();
        assert_eq!(config.locale, Locale::Ja);
        assert_eq!(config.month_threshold, 20.0);
        assert_eq!(config.rules.description_min_length, 5);
        assert_eq!((config.rules.manday_min, config.rules.manday_max), (1.0, 100.0));
        assert_eq!(config.labels().active_heading, "実行中プロジェクト");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = BoardConfig::from_json(r#"{ "locale": "en" }"#).unwrap();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.month_threshold, 20.0);
        assert_eq!(config.labels().day_unit, "person-days");
    }

    #[test]
    fn rejects_bad_threshold_and_range() {
        assert!(BoardConfig::from_json(r#"{ "month_threshold": 0 }"#).is_err());

        let mut config = BoardConfig::default();
        config.rules.manday_min = 50.0;
        config.rules.manday_max = 10.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedMandayRange { min: 50.0, max: 10.0 })
        );
    }

    #[test]
    fn save_then_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = BoardConfig {
            locale: Locale::En,
            month_threshold: 22.0,
            rules: InputRules::default(),
        };
        config.save_to(&path).unwrap();
        assert_eq!(BoardConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "not json").unwrap();
        let err = BoardConfig::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse"));
    }
}
