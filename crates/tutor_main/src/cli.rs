use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "tutor8", version, about = "Trợ lý học tập Toán 8 trong terminal")]
pub struct Cli {
    /// Model id to request from the service
    #[arg(long)]
    pub model: Option<String>,

    /// Base URL of the model service
    #[arg(long)]
    pub base_url: Option<url::Url>,

    /// Sampling temperature
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Directory for log files (defaults to the OS local data dir)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Send one message non-interactively and exit
    #[arg(long, short = 'p')]
    pub prompt: Option<String>,
}
