use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::markdown::MarkdownExtensions;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FontChoice {
    Courier,
    Screen,
    ScreenBold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    #[serde(default = "default_font")]
    pub font: FontChoice,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Editor width in average character columns.
    #[serde(default = "default_editor_columns")]
    pub editor_columns: u32,

    #[serde(default = "default_highlighting")]
    pub highlighting_enabled: bool,

    #[serde(default)]
    pub line_numbers_enabled: bool,

    #[serde(default)]
    pub show_source_view: bool,

    #[serde(default)]
    pub show_directory_view: bool,

    /// Stylesheet referenced from the document shell of previews and exports.
    #[serde(default = "default_stylesheet_href")]
    pub stylesheet_href: String,

    #[serde(default)]
    pub extensions: MarkdownExtensions,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Light
}

fn default_font() -> FontChoice {
    FontChoice::Courier
}

fn default_font_size() -> u32 {
    15
}

fn default_editor_columns() -> u32 {
    67
}

fn default_highlighting() -> bool {
    true
}

fn default_stylesheet_href() -> String {
    "markpane.css".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            font: default_font(),
            font_size: default_font_size(),
            editor_columns: default_editor_columns(),
            highlighting_enabled: default_highlighting(),
            line_numbers_enabled: false,
            show_source_view: false,
            show_directory_view: false,
            stylesheet_href: default_stylesheet_href(),
            extensions: MarkdownExtensions::default(),
        }
    }
}

impl AppSettings {
    /// Load settings from the default location, writing defaults if none exist.
    pub fn load() -> Self {
        match Self::get_config_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                let default = Self::default();
                if let Err(e) = default.save_to(path) {
                    tracing::debug!("Could not write default settings: {}", e);
                }
                default
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// `<config dir>/markpane/settings.json`
    pub fn get_config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| AppError::Settings("no config directory on this platform".to_string()))?;
        path.push("markpane");
        path.push("settings.json");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.font, FontChoice::Courier);
        assert_eq!(settings.font_size, 15);
        assert_eq!(settings.editor_columns, 67);
        assert!(settings.highlighting_enabled);
        assert!(!settings.show_source_view);
        assert!(!settings.show_directory_view);
        assert_eq!(settings.stylesheet_href, "markpane.css");
        assert!(settings.extensions.tables);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings {
            theme_mode: ThemeMode::Dark,
            show_directory_view: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"Dark\""));
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"font_size": 12, "extensions": {"footnotes": true}}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.font_size, 12);
        assert_eq!(settings.editor_columns, 67);
        assert!(settings.extensions.footnotes);
        assert!(settings.extensions.tables);
    }

    #[test]
    fn test_load_missing_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings::load_from(&path);
        assert_eq!(settings, AppSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_corrupt_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let settings = AppSettings {
            stylesheet_href: "https://example.com/github.css".to_string(),
            line_numbers_enabled: true,
            ..Default::default()
        };

        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path), settings);
    }
}
