// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! NFT Rarity Ranking Tool
//!
//! Queries Blockspan for a collection and prints its trait rarity table.

use std::{io, path::PathBuf, process::ExitCode};

use anyhow::Result;
use api_client::QueryInput;
use clap::Parser;
use external_apis::BlockspanClient;
use ranking_tool::{
    Blockchain, OutputFormat, RequestController, ToolConfig, ToolError, exit_status, run,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "ranking-tool", version)]
#[command(about = "Show NFT rarity information for a collection contract", long_about = None)]
struct Cli {
    /// Contract address of the collection
    #[arg(short, long)]
    address: String,

    /// Blockchain the contract lives on (eth-main, arbitrum-main, optimism-main, poly-main, bsc-main, eth-goerli)
    #[arg(short, long)]
    chain: Option<Blockchain>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Configuration file (defaults to an optional ranking-tool.* in the working directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = ToolConfig::from_env(cli.config.as_deref())?;
    let client = BlockspanClient::new(config.blockspan_config()).map_err(ToolError::from)?;
    let controller = RequestController::new(client);

    let chain = cli.chain.unwrap_or(config.default_chain);
    info!(chain = chain.as_str(), "querying collection");

    let state = run(
        &controller,
        QueryInput::new(cli.address, chain),
        cli.format,
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await?;

    Ok(ExitCode::from(exit_status(&state)))
}
