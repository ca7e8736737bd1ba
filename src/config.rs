use crate::error::{InspectorError, Result};
use defect_inspector_common::{ClientSettings, Locale};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ベースURLを上書きする環境変数
pub const BASE_URL_ENV: &str = "DEFECT_INSPECTOR_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub settings: ClientSettings,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: ClientSettings {
                base_url: DEFAULT_BASE_URL.into(),
                ..ClientSettings::default()
            },
            timeout_seconds: 60,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| InspectorError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("defect-inspector").join("config.json"))
    }

    /// 実際に使うベースURL（引数 > 環境変数 > 設定ファイル）
    pub fn base_url(&self, override_url: Option<&str>) -> Result<String> {
        let url = match override_url {
            Some(url) => url.to_string(),
            None => std::env::var(BASE_URL_ENV).unwrap_or_else(|_| self.settings.base_url.clone()),
        };

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(InspectorError::Config(format!(
                "ベースURLは http:// または https:// で始めてください: {:?}",
                url
            )));
        }
        Ok(url.trim_end_matches('/').to_string())
    }

    pub fn locale(&self, override_locale: Option<Locale>) -> Locale {
        override_locale.unwrap_or(self.settings.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.settings.base_url, "http://localhost:8000");
        assert_eq!(config.settings.locale, Locale::Ru);
        assert_eq!(config.timeout_seconds, 60);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.settings.base_url = "http://inspector.local:9000".into();
        config.settings.locale = Locale::Ja;
        config.timeout_seconds = 15;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_flattened_json_layout() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("\"base_url\""));
        assert!(json.contains("\"timeout_seconds\""));
        assert!(!json.contains("\"settings\""));
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_base_url_override_and_validation() {
        let config = Config::default();
        assert_eq!(
            config.base_url(Some("http://other:8000/")).unwrap(),
            "http://other:8000"
        );
        assert!(config.base_url(Some("ftp://other")).is_err());
    }

    #[test]
    fn test_locale_override() {
        let config = Config::default();
        assert_eq!(config.locale(None), Locale::Ru);
        assert_eq!(config.locale(Some(Locale::En)), Locale::En);
    }
}
