use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file the binary looks for in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "render.toml";

/// Longest canvas side accepted by `Config::validate`, in pixels.
pub const MAX_CANVAS_SIDE: u32 = 32_768;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub paths: PathConfig,
    pub figure: FigureConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Input and output locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Grid data file produced by the generator.
    pub input: PathBuf,
    /// PNG written by the renderer.
    pub output: PathBuf,
    /// Optional JSON run report.
    pub report: Option<PathBuf>,
}

/// Canvas geometry and labelling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub width_inches: f64,
    pub height_inches: f64,
    pub dpi: u32,
    pub title_prefix: String,
    /// Canvas background, RGB.
    pub background: [u8; 3],
    pub title_color: [u8; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Open an interactive window after saving, if a viewer is available.
    pub show: bool,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("newton_output.dat"),
            output: PathBuf::from("newton_fractal.png"),
            report: None,
        }
    }
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width_inches: 8.0,
            height_inches: 8.0,
            dpi: 150,
            title_prefix: "Fractal de Newton".to_string(),
            background: [255, 255, 255],
            title_color: [0, 0, 0],
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { show: true }
    }
}

impl FigureConfig {
    /// Canvas size in pixels, `round(inches * dpi)` on each axis.
    pub fn canvas_size(&self) -> (u32, u32) {
        let px = |inches: f64| (inches * self.dpi as f64).round().max(1.0) as u32;
        (px(self.width_inches), px(self.height_inches))
    }

    fn longest_side_inches(&self) -> f64 {
        self.width_inches.max(self.height_inches)
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;

        if content.trim_start().starts_with('{') {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(toml::from_str(&content)?)
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P, format: ConfigFormat) -> Result<(), Box<dyn std::error::Error>> {
        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.paths.input.as_os_str().is_empty() {
            errors.push("Input path must not be empty".to_string());
        }

        if self.paths.output.as_os_str().is_empty() {
            errors.push("Output path must not be empty".to_string());
        }

        if self.figure.dpi == 0 {
            errors.push("Figure dpi must be positive".to_string());
        }

        if !(self.figure.width_inches.is_finite() && self.figure.width_inches > 0.0) {
            errors.push("Figure width_inches must be positive".to_string());
        }

        if !(self.figure.height_inches.is_finite() && self.figure.height_inches > 0.0) {
            errors.push("Figure height_inches must be positive".to_string());
        }

        let longest = self.figure.longest_side_inches() * self.figure.dpi as f64;
        if longest.is_finite() && longest.round() > MAX_CANVAS_SIDE as f64 {
            errors.push(format!(
                "Figure canvas of {:.0}px exceeds the {}px limit per side",
                longest.round(),
                MAX_CANVAS_SIDE
            ));
        }

        if let Err(e) = self.logging.validate() {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone)]
pub enum ConfigFormat {
    Json,
    Toml,
}

/// Load `config_path` if given and readable, falling back to defaults on any problem.
///
/// Logging is usually not installed yet when this runs, so problems go to stderr.
pub fn load_config_or_default(config_path: Option<&Path>) -> Config {
    match config_path {
        Some(path) => match Config::load_from_file(path) {
            Ok(config) => {
                if let Err(errors) = config.validate() {
                    eprintln!("Configuration validation errors:");
                    for error in errors {
                        eprintln!("  - {}", error);
                    }
                    eprintln!("Using default configuration instead.");
                    Config::default()
                } else {
                    config
                }
            }
            Err(e) => {
                eprintln!("Failed to load config from '{}': {}", path.display(), e);
                eprintln!("Using default configuration.");
                Config::default()
            }
        },
        None => Config::default(),
    }
}
