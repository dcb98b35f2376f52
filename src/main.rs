use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use mapscriber::config::Config;
use mapscriber::geo::{self, GeoPoint};
use mapscriber::import;
use mapscriber::notification::NoticeLevel;
use mapscriber::services::{ServiceDependencies, ServiceDispatcher};
use mapscriber::session::{self, MapSession};
use mapscriber::util::{format_area, format_km};
use std::fs;
use std::path::{Path, PathBuf};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("MAPSCRIBER_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "mapscriber")]
#[command(version = VERSION, about = "Map annotation, geodesic measurement and route planning")]
struct Cli {
    /// Config file to use instead of ~/.config/mapscriber/config.toml
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a JSON script of session commands and print the resulting state
    Replay {
        /// JSON array of commands ({"op": "select", "tool": "line"}, {"op": "click", ...})
        script: PathBuf,
    },
    /// Measure a path through the given points (polygon area/perimeter for 3+ points)
    Measure {
        /// Points as lat,lng
        #[arg(required = true, num_args = 2.., allow_hyphen_values = true)]
        points: Vec<GeoPoint>,
    },
    /// Print the markers a .geojson/.json/.kml file would import
    Import { file: PathBuf },
    /// Search places with the configured geocoder
    Search { query: String },
    /// Plan a route between two free-text locations
    Route { start: String, end: String },
    /// Write the example configuration file
    InitConfig,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Replay { script } => replay(&load_config(cli.config.as_deref())?, &script),
        Command::Measure { points } => {
            measure(&points);
            Ok(())
        }
        Command::Import { file } => {
            let markers = import::load_file(&file)
                .with_context(|| format!("Failed to import {}", file.display()))?;
            println!("{}", serde_json::to_string_pretty(&markers)?);
            Ok(())
        }
        Command::Search { query } => {
            let config = load_config(cli.config.as_deref())?;
            run_services(&config, |session| session.request_search(&query), |session| {
                serde_json::to_string_pretty(session.search_results())
            })
        }
        Command::Route { start, end } => {
            let config = load_config(cli.config.as_deref())?;
            run_services(
                &config,
                |session| session.request_route(&start, &end),
                |session| serde_json::to_string_pretty(&session.route()),
            )
        }
        Command::InitConfig => {
            let path = match cli.config {
                Some(path) => path,
                None => Config::get_config_path()?,
            };
            Config::create_default_file(&path)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn replay(config: &Config, script: &Path) -> Result<()> {
    let text = fs::read_to_string(script)
        .with_context(|| format!("Failed to read script {}", script.display()))?;
    let commands = session::parse_script(&text)
        .with_context(|| format!("Failed to parse script {}", script.display()))?;
    log::info!("Replaying {} command(s)", commands.len());

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let mut session = new_session(config, runtime.handle());
    session.run_script(commands);
    runtime.block_on(session.settle_services());

    println!("{}", session.snapshot().to_json()?);
    Ok(())
}

fn measure(points: &[GeoPoint]) {
    println!(
        "Path length: {}",
        format_km(geo::path_length_km(points))
    );
    if points.len() >= 3 {
        println!("Area: {}", format_area(geo::polygon_area_m2(points)));
        println!(
            "Perimeter: {}",
            format_km(geo::polygon_perimeter_km(points))
        );
    }
}

fn new_session(config: &Config, handle: &tokio::runtime::Handle) -> MapSession {
    let session = MapSession::new(config);
    match ServiceDependencies::from_config(&config.services) {
        Ok(dependencies) => session.with_services(ServiceDispatcher::new(handle, dependencies)),
        Err(err) => {
            log::warn!("Geocoding and routing disabled: {}", err);
            session
        }
    }
}

/// Issues one collaborator request, waits for it and prints the result.
fn run_services(
    config: &Config,
    request: impl FnOnce(&mut MapSession),
    render: impl FnOnce(&MapSession) -> serde_json::Result<String>,
) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let mut session = new_session(config, runtime.handle());
    request(&mut session);
    runtime.block_on(session.settle_services());

    if let Some(notice) = session.notices().last() {
        if notice.level == NoticeLevel::Error {
            bail!("{}", notice.message);
        }
        eprintln!("{}", notice.message);
    }
    println!("{}", render(&session)?);
    Ok(())
}
