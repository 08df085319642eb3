#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

pub use toml_config::SiteConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pages")]
#[command(about = "Course landing pages and Imersão Django lesson pages")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 沒有指定設定檔時使用預設值
    pub fn load_site_config(&self) -> crate::utils::error::Result<SiteConfig> {
        match &self.config {
            Some(path) => SiteConfig::from_file(path),
            None => Ok(SiteConfig::default()),
        }
    }
}
