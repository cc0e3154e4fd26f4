use clap::Parser;
use moodlens::analysis::HttpAnalysisService;
use moodlens::core::config;
use moodlens::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "moodlens", about = "Terminal mood journal backed by a mood-analysis service")]
struct Args {
    /// Base URL of the mood-analysis service
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to moodlens.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("moodlens.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().map_err(std::io::Error::other)?;
    let resolved = config::resolve(&file_config, args.base_url.as_deref());

    log::info!("MoodLens starting up against {}", resolved.base_url);

    let service = Arc::new(HttpAnalysisService::new(
        resolved.base_url.clone(),
        resolved.request_timeout,
    ));

    tui::run(service)
}
