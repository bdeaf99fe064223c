pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::demos::catalog;
pub use config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::menu::{Session, SessionSummary};
pub use crate::core::runner::DemoRunner;
pub use domain::model::{DemoSettings, MenuChoice};
pub use domain::ports::Demo;
pub use utils::error::{DemoError, Result};
