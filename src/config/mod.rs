pub mod toml_config;

use crate::config::toml_config::TomlConfig;
use crate::domain::model::DemoSettings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "container-tour")]
#[command(about = "An interactive tour of Rust's standard collections")]
pub struct CliConfig {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log CPU and memory usage around each demo
    #[arg(long)]
    pub monitor: bool,

    /// Run the named demos and exit instead of showing the menu
    #[arg(long = "demo", value_delimiter = ',')]
    pub demos: Vec<String>,

    /// List available demos and exit
    #[arg(long)]
    pub list: bool,

    /// Do not wait for Enter after each demo
    #[arg(long)]
    pub no_pause: bool,

    /// Seed for the random sample in the algorithm demo
    #[arg(long)]
    pub seed: Option<u64>,
}

impl CliConfig {
    /// Settings file (or defaults), validated, with command-line overrides applied.
    pub fn load_settings(&self) -> Result<DemoSettings> {
        let config = match &self.config {
            Some(path) => {
                tracing::info!("Loading settings from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        config.validate()?;

        let mut settings = config.settings();
        self.apply_overrides(&mut settings);
        tracing::debug!("Settings: {:?}", settings);
        Ok(settings)
    }

    /// Command-line flags win over whatever the settings file said.
    pub fn apply_overrides(&self, settings: &mut DemoSettings) {
        if self.no_pause {
            settings.pause_after_demo = false;
            tracing::debug!("Pause after demo disabled from command line");
        }
        if let Some(seed) = self.seed {
            settings.sample_seed = Some(seed);
            tracing::debug!("Sample seed overridden to: {}", seed);
        }
    }
}
