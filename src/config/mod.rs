pub mod toml_config;

pub use toml_config::GreetrConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "greetr")]
#[command(about = "Print localized greetings")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    /// Language code (en, es, fr)
    #[arg(short, long)]
    pub language: Option<String>,

    #[arg(long, help = "Use the formal greeting")]
    pub formal: bool,

    #[arg(long, help = "Also print the login log line")]
    pub log: bool,

    /// Render the greeting into this selector of an in-memory page and print it
    #[arg(long)]
    pub render: Option<String>,

    #[arg(long, help = "Simulate the login page flow")]
    pub login: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔（若有）並套用命令列覆蓋設定
    pub fn resolve(&self) -> Result<GreetrConfig> {
        let mut config = match &self.config {
            Some(path) => GreetrConfig::from_file(path)?,
            None => GreetrConfig::default(),
        };

        if let Some(first_name) = &self.first_name {
            config.greeter.first_name = Some(first_name.clone());
        }
        if let Some(last_name) = &self.last_name {
            config.greeter.last_name = Some(last_name.clone());
        }
        if let Some(language) = &self.language {
            config.greeter.language = Some(language.clone());
        }
        if self.formal {
            config.output.formal = Some(true);
        }
        if self.log {
            config.output.log = Some(true);
        }
        if let Some(target) = &self.render {
            config.output.render_target = Some(target.clone());
        }
        if self.login && config.login.is_none() {
            config.login = Some(Default::default());
        }

        Ok(config)
    }
}
