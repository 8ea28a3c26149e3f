pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{MemorySink, Page, StdoutSink};
pub use config::GreetrConfig;
pub use core::{
    greeter::Greeter,
    login::{LoginFlow, LoginSelectors},
};
pub use domain::{
    model::Language,
    ports::{Dom, TextSink},
};
pub use utils::error::{GreetrError, Result};
