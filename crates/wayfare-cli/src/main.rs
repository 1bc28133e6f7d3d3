//! Wayfare CLI Application
//!
//! Admin command line for the wayfare travel catalog, and the HTTP resource
//! server the admin front ends talk to.

mod args;
mod cli;
mod handlers;
mod prompt;
mod renderer;
mod server;

use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handlers::Cli;
use log::info;
use renderer::TerminalRenderer;
use wayfare_core::{Catalog, CatalogBuilder, HttpResourceApi, LocalResourceApi, ResourceApi};
use Commands::*;

async fn open_catalog(database_file: Option<PathBuf>) -> Result<Catalog> {
    CatalogBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize catalog")
}

/// Resource API for the admin commands: a remote server when `--server` is
/// given, the local database otherwise.
async fn connect(server: Option<String>, database_file: Option<PathBuf>) -> Result<Arc<dyn ResourceApi>> {
    match server {
        Some(url) => {
            info!("Using resource server at {url}");
            Ok(Arc::new(HttpResourceApi::new(url)?))
        }
        None => Ok(Arc::new(LocalResourceApi::new(open_catalog(database_file).await?))),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        server: server_url,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    info!("Wayfare started");

    match command {
        Some(Package { command }) => {
            Cli::new(connect(server_url, database_file).await?, renderer)
                .handle_package_command(command)
                .await
        }
        Some(Romantic { command }) => {
            Cli::new(connect(server_url, database_file).await?, renderer)
                .handle_romantic_command(command)
                .await
        }
        Some(Itinerary { command }) => {
            Cli::new(connect(server_url, database_file).await?, renderer)
                .handle_itinerary_command(command)
                .await
        }
        Some(Destination { command }) => {
            Cli::new(connect(server_url, database_file).await?, renderer)
                .handle_destination_command(command)
                .await
        }
        Some(Home { command }) => {
            Cli::new(connect(server_url, database_file).await?, renderer)
                .handle_home_command(command)
                .await
        }
        Some(Serve(serve_args)) => {
            if server_url.is_some() {
                bail!("wf serve works on the local database, drop --server");
            }
            info!("Starting wayfare resource server");
            server::serve(open_catalog(database_file).await?, serve_args.bind)
                .await
                .context("Resource server failed")
        }
        None => {
            Cli::new(connect(server_url, database_file).await?, renderer)
                .list_packages()
                .await
        }
    }
}
