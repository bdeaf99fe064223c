pub mod menu;
pub mod runner;

pub use crate::domain::model::{DemoSettings, MenuChoice};
pub use crate::domain::ports::Demo;
pub use crate::utils::error::Result;
