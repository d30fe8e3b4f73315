// src/config.rs

//! Defines the configuration structures for `life-term`.
//!
//! Settings deserialize from an optional JSON file and are then overridden
//! by the command line flags. Default values are provided for every option,
//! so both the file and the flags are optional.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable naming an alternate config file path.
pub const CONFIG_PATH_ENV: &str = "LIFE_TERM_CONFIG";

/// Config file looked up in the working directory when the environment
/// variable is not set.
const DEFAULT_CONFIG_PATH: &str = "life-term.json";

// --- Top-Level Configuration Structure ---

/// The complete configuration, grouped into behavior and appearance.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)] // Apply default values for the entire struct if a field is missing.
pub struct Config {
    /// Simulation pacing and telemetry settings.
    pub behavior: BehaviorConfig,
    /// How the field and the info panel are drawn at startup.
    pub appearance: AppearanceConfig,
}

// --- Behavior Configuration ---

/// Settings for simulation pacing and telemetry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Capacity of the frame-time ring; also the growth increment of the
    /// full frame-time series. Must be greater than 10.
    pub history_capacity: usize,
    /// Fixed delay between frames, in milliseconds. Pacing only; a slow
    /// frame simply starts the next one late.
    pub frame_delay_ms: u64,
    /// Path the logger appends to. The simulation owns the terminal, so
    /// logs cannot go to stderr.
    pub log_file: PathBuf,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            history_capacity: 100,
            frame_delay_ms: 15,
            log_file: PathBuf::from("life-term.log"),
        }
    }
}

// --- Appearance Configuration ---

/// Initial display toggles and panel geometry. All of the toggles can be
/// flipped at runtime from the keyboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Height of the info panel at the bottom, in rows.
    pub info_panel_height: u16,
    /// Color live cells by how long they have survived.
    pub use_colors: bool,
    /// Pack two grid rows into every text row with half-block glyphs.
    pub half_blocks: bool,
    /// Show the info panel.
    pub show_info: bool,
    /// Show the frame-time graphs inside the info panel.
    pub show_history: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            info_panel_height: 10,
            use_colors: true,
            half_blocks: false,
            show_info: true,
            show_history: true,
        }
    }
}

impl Config {
    /// Loads the config file if one exists, otherwise the defaults.
    ///
    /// The path comes from `LIFE_TERM_CONFIG` when set, else
    /// `life-term.json` in the working directory. A missing file is fine; a
    /// malformed one is an error.
    pub fn load_or_default() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)
                .with_context(|| format!("malformed config file {}", path.display())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            Err(err) => {
                Err(err).with_context(|| format!("could not read config file {}", path.display()))
            }
        }
    }

    /// Applies one command line flag. Unknown flags are an error.
    fn apply_flag(&mut self, flag: &str) -> Result<()> {
        match flag {
            "-2" => self.appearance.half_blocks = true,
            "-nc" => self.appearance.use_colors = false,
            "-nh" => self.appearance.show_history = false,
            "-ni" => self.appearance.show_info = false,
            _ => bail!("unknown option: {flag}"),
        }
        Ok(())
    }
}

/// How the process was asked to run.
#[derive(Debug, Clone)]
pub enum Invocation {
    /// Run the simulation with this configuration.
    Run(Config),
    /// Print usage and exit.
    Usage,
}

/// Builds the configuration from the config file plus command line flags.
/// `args` must not include the program name.
pub fn parse_args<I>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::load_or_default()?;
    for arg in args {
        if arg == "-h" {
            return Ok(Invocation::Usage);
        }
        config.apply_flag(&arg)?;
    }
    Ok(Invocation::Run(config))
}

/// Usage text printed for `-h`.
pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [-2] [-nc] [-nh] [-ni]\n\
         Options:\n\
         \x20 -2 : Display two cells per block\n\
         \x20 -nc: No colors will be used\n\
         \x20 -nh: Do not show history\n\
         \x20 -ni: Do not show info at start\n"
    )
}
