use crate::domain::model::DemoSettings;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{self, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub algorithm: AlgorithmConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub smart_pointer: SmartPointerConfig,
    #[serde(default)]
    pub arithmetic: ArithmeticConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default = "default_true")]
    pub pause_after_demo: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmConfig {
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_sleep_ms")]
    pub sleep_ms: u64,
    #[serde(default = "default_busy_loop_iterations")]
    pub busy_loop_iterations: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SmartPointerConfig {
    pub scratch_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArithmeticConfig {
    #[serde(default = "default_lhs")]
    pub lhs: i32,
    #[serde(default = "default_rhs")]
    pub rhs: i32,
}

fn default_true() -> bool {
    true
}

fn default_sample_size() -> usize {
    3
}

fn default_sleep_ms() -> u64 {
    100
}

fn default_busy_loop_iterations() -> u64 {
    1_000_000
}

fn default_lhs() -> i32 {
    10
}

fn default_rhs() -> i32 {
    5
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            pause_after_demo: default_true(),
        }
    }
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            seed: None,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            sleep_ms: default_sleep_ms(),
            busy_loop_iterations: default_busy_loop_iterations(),
        }
    }
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self {
            lhs: default_lhs(),
            rhs: default_rhs(),
        }
    }
}

/// Largest sample the algorithm demo can draw from its ten numbers.
const MAX_SAMPLE_SIZE: usize = 10;
const MAX_SLEEP_MS: u64 = 10_000;

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"))
}

impl TomlConfig {
    /// Loads settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| DemoError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses settings from a TOML string after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_range(
            "algorithm.sample_size",
            self.algorithm.sample_size,
            1,
            MAX_SAMPLE_SIZE,
        )?;
        validation::validate_range("timing.sleep_ms", self.timing.sleep_ms, 0, MAX_SLEEP_MS)?;
        validation::validate_positive_number(
            "timing.busy_loop_iterations",
            self.timing.busy_loop_iterations,
            1,
        )?;

        if let Some(path) = &self.smart_pointer.scratch_file {
            validation::validate_path("smart_pointer.scratch_file", &path.to_string_lossy())?;
        }

        Ok(())
    }

    pub fn settings(&self) -> DemoSettings {
        let defaults = DemoSettings::default();
        DemoSettings {
            pause_after_demo: self.menu.pause_after_demo,
            sample_size: self.algorithm.sample_size,
            sample_seed: self.algorithm.seed,
            sleep_ms: self.timing.sleep_ms,
            busy_loop_iterations: self.timing.busy_loop_iterations,
            scratch_file: self
                .smart_pointer
                .scratch_file
                .clone()
                .unwrap_or(defaults.scratch_file),
            lhs: self.arithmetic.lhs,
            rhs: self.arithmetic.rhs,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
