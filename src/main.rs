use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use taskdeck::core::config;

#[derive(Parser)]
#[command(name = "taskdeck", about = "Terminal front-end for a task-runner agent service")]
struct Args {
    /// Base URL of the agent service
    #[arg(short, long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to taskdeck.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("taskdeck.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Using default config: {}", e);
        Default::default()
    });
    let resolved = config::resolve(&file_config, args.endpoint.as_deref());

    log::info!("Taskdeck starting up, agent endpoint: {}", resolved.base_url);

    taskdeck::tui::run(resolved)
}
