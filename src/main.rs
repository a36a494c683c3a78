use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use od_core::ids::OrphanageId;
use orphanage_directory_lib::adapters::ConsoleAlert;
use orphanage_directory_lib::bootstrap::{
    resolve_config, tracing::init_tracing_subscriber, wire_dependencies, API_URL_ENV,
};
use orphanage_directory_lib::commands::{
    list_orphanages, map_err, register_orphanage, show_orphanage, RegisterRequest,
};

#[derive(Parser)]
#[command(name = "orphanages")]
#[command(about = "Browse and register orphanages", long_about = None)]
struct Cli {
    /// Config file (defaults to <config dir>/orphanages/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory API base URL, overrides config and environment
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every orphanage shown on the map
    List,
    /// Show the details of one orphanage
    Show {
        /// Orphanage id
        id: OrphanageId,
    },
    /// Register a new orphanage
    Register {
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        about: String,
        #[arg(long, default_value = "")]
        instructions: String,
        #[arg(long, default_value = "")]
        opening_hours: String,
        /// The orphanage does not open on weekends
        #[arg(long)]
        closed_on_weekends: bool,
        /// Image file to attach, may be repeated
        #[arg(long = "image")]
        images: Vec<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Dropped when `main` returns, flushing the log file.
    let _tracing_guards = match init_tracing_subscriber() {
        Ok(guards) => Some(guards),
        Err(err) => {
            eprintln!("Failed to initialize tracing: {err}");
            None
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = map_err(err);
            tracing::error!(error = %message, "command failed");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(
        cli.config.as_deref(),
        std::env::var(API_URL_ENV).ok(),
        cli.api_url,
    )?;

    let images = match &cli.command {
        Commands::Register { images, .. } => images.clone(),
        _ => Vec::new(),
    };
    let mut wired = wire_dependencies(&config, images, ConsoleAlert::new())?;

    match cli.command {
        Commands::List => print(cli.json, &list_orphanages(&mut wired.app).await?),
        Commands::Show { id } => print(cli.json, &show_orphanage(&mut wired.app, id).await?),
        Commands::Register {
            latitude,
            longitude,
            name,
            about,
            instructions,
            opening_hours,
            closed_on_weekends,
            images,
        } => {
            let request = RegisterRequest {
                latitude,
                longitude,
                name,
                about,
                instructions,
                opening_hours,
                open_on_weekends: !closed_on_weekends,
                image_picks: images.len(),
            };
            let result = register_orphanage(&mut wired.app, &wired.alert, request).await?;
            print(cli.json, &result)
        }
    }
}

fn print<T: Serialize + Display>(json: bool, value: &T) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{value}");
    }
    Ok(())
}
