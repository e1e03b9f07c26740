pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{
    dispatcher::Dispatcher,
    formatters::{print_formatted, ASK, EXCLAIM},
};
pub use domain::model::{SampleSequence, Selector};
pub use utils::error::{DemoError, Result};
