use std::{net::SocketAddr, path::PathBuf};

use clap::{Parser, Subcommand};

use crate::cli::{
    DestinationCommands, HomeCommands, ItineraryCommands, PackageCommands, ServeArgs,
};

/// Admin command line for the wayfare travel catalog
///
/// Manage destinations, packages, itineraries, romantic packages and the
/// curated home page. Commands run against the local catalog database unless
/// `--server` points at a running resource API.
#[derive(Parser)]
#[command(version, about, name = "wf")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/wayfare/wayfare.db
    #[arg(long, global = true, env = "WAYFARE_DATABASE")]
    pub database_file: Option<PathBuf>,

    /// Base URL of a wayfare resource server, e.g. http://localhost:8080
    #[arg(long, global = true, env = "WAYFARE_SERVER")]
    pub server: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the wayfare CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage travel packages
    #[command(alias = "p")]
    Package {
        #[command(subcommand)]
        command: PackageCommands,
    },
    /// Manage romantic packages
    #[command(alias = "r")]
    Romantic {
        #[command(subcommand)]
        command: PackageCommands,
    },
    /// Manage day-by-day itineraries
    #[command(alias = "i")]
    Itinerary {
        #[command(subcommand)]
        command: ItineraryCommands,
    },
    /// Manage destinations
    #[command(alias = "d")]
    Destination {
        #[command(subcommand)]
        command: DestinationCommands,
    },
    /// Curate the home page
    Home {
        #[command(subcommand)]
        command: HomeCommands,
    },
    /// Serve the resource API over HTTP
    Serve(ServeArgs),
}

/// Default listen address for `wf serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Parses a listen address.
pub fn parse_bind(raw: &str) -> Result<SocketAddr, String> {
    raw.parse()
        .map_err(|e| format!("invalid listen address '{raw}': {e}"))
}
