use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub charts: ChartConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show row numbers in the dataset preview
    pub show_row_numbers: bool,

    /// Rows shown in the post-rename head preview
    pub head_rows: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Bin count for every histogram
    pub histogram_bins: usize,

    /// Draw the smoothed density curve over the histogram bars
    pub density_overlay: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color scheme: "default", "mono"
    pub color_scheme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            charts: ChartConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_row_numbers: false,
            head_rows: 5,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            histogram_bins: 30,
            density_overlay: true,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            color_scheme: "default".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(config_path)?;
        let mut config: Config = toml::from_str(&contents)?;
        // zero bins would bin nothing; treat it as "use the default"
        if config.charts.histogram_bins == 0 {
            config.charts.histogram_bins = ChartConfig::default().histogram_bins;
        }
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("salesboard").join("config.toml"))
    }

    /// Default config file with comments, for --generate-config
    pub fn create_default_with_comments() -> String {
        r#"# salesboard configuration file
# Location: ~/.config/salesboard/config.toml (Linux/macOS)
#           %APPDATA%\salesboard\config.toml (Windows)

[display]
# Show row numbers in the dataset preview
show_row_numbers = false

# Rows shown in the preview under the rename form
head_rows = 5

[charts]
# Bin count for the price/age/satisfaction histograms
histogram_bins = 30

# Draw the smoothed density curve over the histogram bars
density_overlay = true

[theme]
# Color scheme: "default", "mono"
color_scheme = "default"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.charts.histogram_bins, 30);
        assert!(config.charts.density_overlay);
        assert_eq!(config.display.head_rows, 5);
        assert_eq!(config.theme.color_scheme, "default");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(
            config.charts.histogram_bins,
            parsed.charts.histogram_bins
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[charts]\nhistogram_bins = 12\n").unwrap();
        assert_eq!(parsed.charts.histogram_bins, 12);
        assert_eq!(parsed.display.head_rows, 5);
    }

    #[test]
    fn test_commented_default_parses_to_defaults() {
        let parsed: Config = toml::from_str(&Config::create_default_with_comments()).unwrap();
        assert_eq!(parsed.charts.histogram_bins, 30);
        assert!(!parsed.display.show_row_numbers);
    }

    #[test]
    fn test_load_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.charts.histogram_bins, 30);

        // zero bins in the file falls back to the default
        std::fs::write(&path, "[charts]\nhistogram_bins = 0\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.charts.histogram_bins, 30);
    }
}
