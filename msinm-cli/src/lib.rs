//! Command-line interface for the MSI/NM geographic core.
//!
//! Exposes the library contracts as subcommands: position parsing and
//! formatting, distance unit conversion, map-feature construction from a
//! location file, and structural JSON comparison.
#![forbid(unsafe_code)]

use std::fs;

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use geo::Coord;
use log::debug;
use msinm_core::{
    Location, format_latitude, format_longitude, km_to_nm, m_to_nm, nm_to_km, parse_latitude,
    parse_longitude,
};
use msinm_diff::{compare, render};
use msinm_geo::{MapFeature, features};
use serde_json::{Value, json};

mod error;

pub use error::CliError;

#[cfg(test)]
mod tests;

/// Exit code returned by `diff` when the documents differ.
pub const EXIT_DIFFERENCES: i32 = 1;

/// Run the parsed CLI, returning the process exit code.
///
/// # Errors
/// Returns [`CliError`] for missing arguments, unreadable or malformed
/// input files, and invalid positions or locations.
pub fn run(cli: Cli) -> Result<i32, CliError> {
    match cli.command {
        Command::Position(args) => run_position(&args.command),
        Command::Convert(args) => run_convert(&args),
        Command::Features(args) => run_features(&args),
        Command::Diff(args) => run_diff(&args),
    }
}

/// Top-level CLI arguments.
#[derive(Debug, Parser)]
#[command(
    name = "msinm",
    about = "Codecs and geometry tools for MSI/NM message locations",
    version
)]
pub struct Cli {
    /// Log level filter (error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    pub log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert positions between decimal degrees and degree/minute text.
    Position(PositionArgs),
    /// Convert distances between nautical miles, kilometres, and metres.
    Convert(ConvertArgs),
    /// Project a location JSON file into drawable map features.
    Features(FeaturesArgs),
    /// Structurally compare two JSON documents.
    Diff(DiffArgs),
}

#[derive(Debug, Args)]
struct PositionArgs {
    #[command(subcommand)]
    command: PositionCommand,
}

#[derive(Debug, Subcommand)]
enum PositionCommand {
    /// Parse degree/minute text (e.g. "56 12.345N") into decimal degrees.
    Parse(ParseArgs),
    /// Format decimal degrees as degree/minute text.
    Format(FormatArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Latitude text to parse.
    #[arg(long)]
    lat: Option<String>,
    /// Longitude text to parse.
    #[arg(long)]
    lon: Option<String>,
}

#[derive(Debug, Args)]
struct FormatArgs {
    /// Latitude in signed decimal degrees.
    #[arg(long)]
    lat: Option<f64>,
    /// Longitude in signed decimal degrees.
    #[arg(long)]
    lon: Option<f64>,
}

#[derive(Debug, Args)]
struct ConvertArgs {
    /// Nautical miles to convert to kilometres.
    #[arg(long)]
    nm_to_km: Option<f64>,
    /// Kilometres to convert to nautical miles.
    #[arg(long)]
    km_to_nm: Option<f64>,
    /// Metres to convert to nautical miles.
    #[arg(long)]
    m_to_nm: Option<f64>,
}

#[derive(Debug, Args)]
struct FeaturesArgs {
    /// Path to a location JSON file.
    location: Utf8PathBuf,
}

#[derive(Debug, Args)]
struct DiffArgs {
    /// Left-hand JSON document.
    left: Utf8PathBuf,
    /// Right-hand JSON document.
    right: Utf8PathBuf,
}

fn run_position(command: &PositionCommand) -> Result<i32, CliError> {
    match command {
        PositionCommand::Parse(args) => {
            if args.lat.is_none() && args.lon.is_none() {
                return Err(CliError::MissingArgument {
                    expected: "--lat and/or --lon",
                });
            }
            if let Some(lat) = &args.lat {
                println!("lat {}", parse_latitude(lat)?);
            }
            if let Some(lon) = &args.lon {
                println!("lon {}", parse_longitude(lon)?);
            }
        }
        PositionCommand::Format(args) => {
            if args.lat.is_none() && args.lon.is_none() {
                return Err(CliError::MissingArgument {
                    expected: "--lat and/or --lon",
                });
            }
            if let Some(lat) = args.lat {
                println!("lat {}", format_latitude(lat));
            }
            if let Some(lon) = args.lon {
                println!("lon {}", format_longitude(lon));
            }
        }
    }
    Ok(0)
}

fn run_convert(args: &ConvertArgs) -> Result<i32, CliError> {
    if args.nm_to_km.is_none() && args.km_to_nm.is_none() && args.m_to_nm.is_none() {
        return Err(CliError::MissingArgument {
            expected: "--nm-to-km, --km-to-nm, and/or --m-to-nm",
        });
    }
    if let Some(nm) = args.nm_to_km {
        println!("{} km", converted(nm_to_km(nm)));
    }
    if let Some(km) = args.km_to_nm {
        println!("{} nm", converted(km_to_nm(km)));
    }
    if let Some(metres) = args.m_to_nm {
        println!("{} nm", converted(m_to_nm(metres)));
    }
    Ok(0)
}

fn converted(value: Option<f64>) -> String {
    value.map_or_else(|| String::from("-"), |v| v.to_string())
}

fn run_features(args: &FeaturesArgs) -> Result<i32, CliError> {
    let location = read_location(&args.location)?;
    let drawn = features(&location);
    debug!("projected {} feature(s) from {}", drawn.len(), args.location);
    let payload = Value::Array(drawn.iter().map(feature_json).collect());
    let encoded = serde_json::to_string_pretty(&payload).map_err(CliError::EncodeFeatures)?;
    println!("{encoded}");
    Ok(0)
}

fn read_location(path: &Utf8PathBuf) -> Result<Location, CliError> {
    let text = fs::read_to_string(path.as_std_path()).map_err(|source| CliError::ReadInput {
        path: path.clone(),
        source,
    })?;
    let location: Location =
        serde_json::from_str(&text).map_err(|source| CliError::ParseJson {
            path: path.clone(),
            source,
        })?;
    location
        .validate()
        .map_err(|source| CliError::InvalidLocation {
            path: path.clone(),
            source,
        })?;
    Ok(location)
}

fn feature_json(feature: &MapFeature) -> Value {
    match feature {
        MapFeature::Point(vertex) => json!({
            "type": "point",
            "coordinates": [vertex.x, vertex.y],
        }),
        MapFeature::Path(vertices) => json!({
            "type": "path",
            "coordinates": coordinates(vertices),
        }),
        MapFeature::Ring(vertices) => json!({
            "type": "ring",
            "coordinates": coordinates(vertices),
        }),
    }
}

fn coordinates(vertices: &[Coord<f64>]) -> Vec<Value> {
    vertices
        .iter()
        .map(|vertex| json!([vertex.x, vertex.y]))
        .collect()
}

fn run_diff(args: &DiffArgs) -> Result<i32, CliError> {
    let left = read_json(&args.left)?;
    let right = read_json(&args.right)?;

    let mut differences = 0_u32;
    let root = compare(&left, &right, &mut |node| {
        debug!("{}: {}", node.status, node.key);
        differences += 1;
    });

    print!("{}", render(&root));
    if differences > 0 {
        println!("{differences} difference(s)");
        Ok(EXIT_DIFFERENCES)
    } else {
        println!("no differences");
        Ok(0)
    }
}

fn read_json(path: &Utf8PathBuf) -> Result<Value, CliError> {
    let text = fs::read_to_string(path.as_std_path()).map_err(|source| CliError::ReadInput {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::ParseJson {
        path: path.clone(),
        source,
    })
}
