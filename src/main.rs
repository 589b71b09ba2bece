use clap::Parser;
use log::{Level, info};
use shelf::core::config::{self, CliOverrides, ConfigNotice, LoadedConfig, ShelfConfig};
use shelf::core::state::NavigationController;
use shelf::tui;
use shelf::tui::theme::Theme;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shelf", about = "Keep a list of books from your terminal")]
struct Args {
    /// Config file to use instead of ~/.shelf/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Start with an empty library, ignoring configured books
    #[arg(long)]
    empty: bool,

    /// Print the library as JSON after exiting
    #[arg(long)]
    export: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let loaded = loaded.unwrap_or_else(|e| {
        eprintln!("shelf: {e}; using default settings");
        LoadedConfig {
            config: ShelfConfig::default(),
            notices: vec![ConfigNotice {
                level: Level::Warn,
                message: format!("{e}; using default settings"),
            }],
        }
    });
    let resolved = config::resolve(
        &loaded.config,
        &CliOverrides {
            log_level: args.log_level.clone(),
            empty: args.empty,
        },
    );

    // File logger: the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    for notice in loaded.notices.iter().chain(&resolved.notices) {
        notice.emit();
    }

    info!(
        "Shelf starting up with {} seeded books",
        resolved.books.len()
    );

    let mut app = NavigationController::from_config(&resolved);
    tui::run(&mut app, Theme::default())?;

    if args.export {
        let json = serde_json::to_string_pretty(app.library().items())
            .map_err(std::io::Error::other)?;
        println!("{json}");
    }

    info!("Shelf shut down with {} books", app.library().len());
    Ok(())
}
