use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use client_core::{
    config::timeout_from_secs, load_settings, AmphibiansViewModel, NetworkAmphibiansRepository,
    UiState,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

mod controls;
mod render;

use controls::{parse_action, Action};

#[derive(Parser, Debug)]
struct Args {
    /// Service base URL; the listing is read from `<base_url>/amphibians`.
    #[arg(long)]
    base_url: Option<String>,
    /// Request timeout in seconds, 0 disables it.
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Print the first outcome and exit.
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(secs) = args.timeout_secs {
        settings.request_timeout = timeout_from_secs(secs);
    }

    let repository = NetworkAmphibiansRepository::new(&settings)?;
    info!(endpoint = %repository.endpoint(), "starting amphibians viewer");
    let view_model = AmphibiansViewModel::new(Arc::new(repository));

    if args.once {
        let state = view_model.settled().await;
        println!("{}", render::render(&state));
        if state == UiState::Error {
            bail!("failed to load amphibians");
        }
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let current = view_model.state();
        if current.is_loading() {
            println!("{}", render::render(&current));
        }
        let state = view_model.settled().await;
        println!("{}", render::render(&state));

        loop {
            println!("{}", render::prompt(&state));
            let Some(line) = lines.next_line().await? else {
                return Ok(());
            };
            match parse_action(&line) {
                Action::Retry => {
                    view_model.retry();
                    break;
                }
                Action::Quit => return Ok(()),
                Action::Unknown => {}
            }
        }
    }
}
