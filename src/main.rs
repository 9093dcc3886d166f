use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use sommelier::core::config::{self, CliOverrides, SommelierConfig};
use sommelier::{Action, Session, Tab, tui};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sommelier", about = "Conversational wine assistant")]
struct Args {
    /// Config file (defaults to ~/.sommelier/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Content file with seed chat, taste profile and cellar
    #[arg(long)]
    content: Option<PathBuf>,

    /// Delay before the simulated reply, in milliseconds
    #[arg(long)]
    reply_delay_ms: Option<u64>,

    /// Print the view tree of a fresh session as JSON and exit
    #[arg(long, value_enum, num_args = 0..=1, default_missing_value = "chat")]
    print_view: Option<Tab>,

    /// Log file (defaults to sommelier.log in the current directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config(args.config.as_deref()) {
        Ok(c) => (c, None),
        Err(e) => (SommelierConfig::default(), Some(e)),
    };

    // Initialize file logger - the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(config::resolve_log_file(&file_config)));

    if let Ok(log_file) = File::create(&log_path) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }

    let cli = CliOverrides {
        reply_delay_ms: args.reply_delay_ms,
        content_file: args.content.clone(),
    };
    let resolved = config::resolve(&file_config, &cli).map_err(io::Error::other)?;

    if let Some(tab) = args.print_view {
        let mut session = Session::from_config(&resolved);
        session.dispatch(Action::SelectTab(tab));
        let json = serde_json::to_string_pretty(&session.view()).map_err(io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    log::info!(
        "Sommelier starting up (reply delay {:?})",
        resolved.reply_delay
    );

    tui::run(resolved)
}
