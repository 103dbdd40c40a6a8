//! Configuration settings for the simulator

use crate::scheduler::StepRate;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub schedule: ScheduleConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    /// Start with width and height exchanged
    pub swap_dimensions: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub steps_per_second: StepRate,
    pub generations: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub pattern_file: Option<PathBuf>,
    #[serde(default)]
    pub offset_x: isize,
    #[serde(default)]
    pub offset_y: isize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_every_generation: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 40,
            swap_dimensions: false,
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            steps_per_second: StepRate::default(),
            generations: 100,
        }
    }
}

impl GridConfig {
    /// Dimensions after applying the swap toggle
    pub fn effective_dimensions(&self) -> (usize, usize) {
        if self.swap_dimensions {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.grid.width == 0 || self.grid.height == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.grid.width,
                self.grid.height
            );
        }

        if self.schedule.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        if let Some(ref pattern) = self.input.pattern_file {
            if !pattern.exists() {
                anyhow::bail!("Pattern file does not exist: {}", pattern.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.grid.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.grid.height = height;
        }
        if cli_overrides.swap_dimensions {
            self.grid.swap_dimensions = !self.grid.swap_dimensions;
        }
        if let Some(rate) = cli_overrides.steps_per_second {
            self.schedule.steps_per_second = StepRate::new(rate);
        }
        if let Some(generations) = cli_overrides.generations {
            self.schedule.generations = generations;
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.input.pattern_file = Some(pattern_file.clone());
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if cli_overrides.show_every_generation {
            self.output.show_every_generation = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    /// Flips the configured swap toggle
    pub swap_dimensions: bool,
    pub steps_per_second: Option<i64>,
    pub generations: Option<usize>,
    pub pattern_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub show_every_generation: bool,
}
