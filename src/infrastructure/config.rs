use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use config::ConfigError;
use serde::Deserialize;

use crate::domain::duration::FormatOptions;
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Shortest accepted periodic callback interval
pub const MIN_TICK_INTERVAL_MS: u64 = 1;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub stopwatch: StopwatchConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StopwatchConfig {
    /// Interval of the periodic callback that refreshes elapsed time
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default, flatten)]
    pub format: FormatOptions,
}

fn default_tick_interval_ms() -> u64 {
    30
}

impl Default for StopwatchConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            format: FormatOptions::default(),
        }
    }
}

impl Config {
    /// The built-in defaults shipped with the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Loads user configuration from the config directory layered over the defaults.
    /// A missing user file is not an error.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder();

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(default_config);
        cfg.validate()?;

        Ok(cfg)
    }

    /// Fills in every key binding and style the user left out
    fn merge_defaults(&mut self, default_config: Config) {
        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            self.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in default_config.styles.iter() {
            self.styles.entry(style_key.clone()).or_insert(*style);
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.stopwatch.tick_interval_ms < MIN_TICK_INTERVAL_MS {
            return Err(ConfigError::Message(format!(
                "stopwatch.tick_interval_ms must be at least {MIN_TICK_INTERVAL_MS}"
            )));
        }
        Ok(())
    }
}
