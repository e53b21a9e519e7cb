//! Configuration settings for the simulation host loop

use crate::game_of_life::{patterns, Pattern};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub height: usize,
    pub width: usize,
    pub ticks_per_second: u32,
    /// Stop after this many generations; run until interrupted when absent
    #[serde(default)]
    pub generations: Option<u64>,
    /// Named starting pattern
    #[serde(default)]
    pub pattern: Option<String>,
    /// Text grid file to start from; must match the configured dimensions
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
    #[serde(default)]
    pub parallel: bool,
}

/// Where the starting cells come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource<'a> {
    Pattern(&'a str),
    File(&'a Path),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub alive_char: char,
    pub dead_char: char,
    pub clear_screen: bool,
    pub show_status: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    #[serde(default)]
    pub final_state_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                height: 60,
                width: 60,
                ticks_per_second: 6,
                generations: None,
                pattern: Some(patterns::GOSPER_GLIDER_GUN.name.to_string()),
                seed_file: None,
                parallel: false,
            },
            display: DisplayConfig {
                alive_char: '█',
                dead_char: '·',
                clear_screen: true,
                show_status: true,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                final_state_file: None,
            },
        }
    }
}

impl SimulationConfig {
    /// Delay between generations
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }

    /// A seed file wins over a pattern name
    pub fn seed_source(&self) -> SeedSource<'_> {
        match (&self.seed_file, &self.pattern) {
            (Some(path), _) => SeedSource::File(path),
            (None, Some(name)) => SeedSource::Pattern(name),
            (None, None) => SeedSource::Empty,
        }
    }

    /// The named pattern, when seeding from one
    pub fn named_pattern(&self) -> Result<Option<&'static Pattern>> {
        match self.seed_source() {
            SeedSource::Pattern(name) => patterns::find(name)
                .map(Some)
                .with_context(|| format!("Unknown pattern '{}'", name)),
            _ => Ok(None),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// Only parses; call [`validate`](Self::validate) once CLI overrides are merged.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
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
        let sim = &self.simulation;
        if sim.height == 0 || sim.width == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                sim.height,
                sim.width
            );
        }

        if sim.ticks_per_second == 0 {
            anyhow::bail!("Ticks per second must be positive");
        }

        if let Some(pattern) = sim.named_pattern()? {
            if !pattern.fits(sim.height, sim.width) {
                let (h, w) = pattern.bounding_box();
                anyhow::bail!(
                    "Pattern '{}' needs at least {}x{} cells, grid is {}x{}",
                    pattern.name,
                    h,
                    w,
                    sim.height,
                    sim.width
                );
            }
        }

        if let SeedSource::File(path) = sim.seed_source() {
            if !path.exists() {
                anyhow::bail!("Seed file does not exist: {}", path.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        let sim = &mut self.simulation;
        if let Some(height) = cli_overrides.height {
            sim.height = height;
        }
        if let Some(width) = cli_overrides.width {
            sim.width = width;
        }
        if let Some(tps) = cli_overrides.ticks_per_second {
            sim.ticks_per_second = tps;
        }
        if let Some(generations) = cli_overrides.generations {
            sim.generations = Some(generations);
        }
        if let Some(ref pattern) = cli_overrides.pattern {
            sim.pattern = Some(pattern.clone());
            sim.seed_file = None;
        }
        if let Some(ref file) = cli_overrides.seed_file {
            sim.seed_file = Some(file.clone());
        }
        if cli_overrides.parallel {
            sim.parallel = true;
        }
        if let Some(ref output) = cli_overrides.output {
            self.output.final_state_file = Some(output.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub height: Option<usize>,
    pub width: Option<usize>,
    pub ticks_per_second: Option<u32>,
    pub generations: Option<u64>,
    pub pattern: Option<String>,
    pub seed_file: Option<PathBuf>,
    pub parallel: bool,
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        assert_eq!(settings.simulation.tick_interval(), Duration::from_secs(1) / 6);
        assert_eq!(
            settings.simulation.named_pattern().unwrap(),
            Some(&patterns::GOSPER_GLIDER_GUN)
        );
    }

    #[test]
    fn test_yaml_round_trip_through_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.simulation.generations = Some(100);
        settings.output.format = OutputFormat::Json;
        settings.to_file(&path).unwrap();

        assert_eq!(Settings::from_file(&path).unwrap(), settings);
    }

    #[test]
    fn test_overrides_can_repair_loaded_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("narrow.yaml");

        let mut narrow = Settings::default();
        narrow.simulation.width = 20;
        narrow.to_file(&path).unwrap();

        let mut settings = Settings::from_file(&path).unwrap();
        assert!(settings.validate().is_err(), "glider gun is 38 columns wide");

        settings.merge_with_cli(&CliOverrides {
            pattern: Some("glider".into()),
            ..Default::default()
        });
        settings.validate().unwrap();

        let mut settings = Settings::from_file(&path).unwrap();
        settings.merge_with_cli(&CliOverrides {
            width: Some(60),
            ..Default::default()
        });
        settings.validate().unwrap();
    }

    #[test]
    fn test_parses_handwritten_yaml() {
        let yaml = r##"
simulation:
  height: 20
  width: 30
  ticks_per_second: 10
  pattern: pulsar
display:
  alive_char: "#"
  dead_char: "."
  clear_screen: false
  show_status: false
output:
  format: json
"##;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        settings.validate().unwrap();
        assert_eq!(settings.simulation.generations, None);
        assert!(!settings.simulation.parallel);
        assert_eq!(
            settings.simulation.named_pattern().unwrap(),
            Some(&patterns::PULSAR)
        );
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::default();
        settings.simulation.width = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.ticks_per_second = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.width = 20;
        assert!(settings.validate().is_err(), "glider gun is 38 columns wide");

        let mut settings = Settings::default();
        settings.simulation.pattern = Some("nope".into());
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.seed_file = Some("/definitely/missing.txt".into());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            height: Some(12),
            pattern: Some("glider".into()),
            generations: Some(8),
            ..Default::default()
        });

        assert_eq!(settings.simulation.height, 12);
        assert_eq!(settings.simulation.width, 60);
        assert_eq!(settings.simulation.generations, Some(8));
        assert_eq!(settings.simulation.seed_source(), SeedSource::Pattern("glider"));

        settings.merge_with_cli(&CliOverrides {
            seed_file: Some("start.txt".into()),
            ..Default::default()
        });
        assert_eq!(
            settings.simulation.seed_source(),
            SeedSource::File(Path::new("start.txt"))
        );
    }
}
