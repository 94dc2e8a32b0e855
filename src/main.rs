//! Enso swap tools CLI
//!
//! Lists the registered tools and runs them against a local signing wallet.

use clap::{Parser, Subcommand};
use enso_swap_tools::networks;
use enso_swap_tools::wallet::PRIVATE_KEY_ENV;
use enso_swap_tools::{
    AlloyWallet, Config, EnsoClient, Error, EvmWalletClient, Result, SecureWallet, ToolRegistry,
    TOOL_CHECK_APPROVAL, TOOL_ROUTE,
};
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "enso-tools")]
#[command(about = "Route and approve token swaps through the Enso router")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Network to send transactions on
    #[arg(short, long, global = true, default_value = "ethereum")]
    network: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available tools and their input schemas
    Tools,

    /// Find the best route and execute the swap
    Route {
        /// Input token address
        #[arg(long)]
        token_in: String,

        /// Output token address
        #[arg(long)]
        token_out: String,

        /// Amount of the input token in base units
        #[arg(long)]
        amount_in: String,
    },

    /// Approve the Enso router for a token if the allowance is too low
    CheckApproval {
        /// Token address
        #[arg(long)]
        token: String,

        /// Amount in base units
        #[arg(long)]
        amount: String,
    },

    /// Show current configuration
    Config,
}

fn init_logging(verbose: bool, json_logs: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if json_logs {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose, cli.json_logs);

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Tools => {
            let registry = ToolRegistry::enso(EnsoClient::new(&config.enso)?);
            println!("{}", serde_json::to_string_pretty(&registry.specs())?);
        }
        Commands::Route {
            token_in,
            token_out,
            amount_in,
        } => {
            let wallet = load_wallet(&config, &cli.network).await?;
            let args = json!({
                "tokenIn": token_in,
                "tokenOut": token_out,
                "amountIn": amount_in,
            });
            run_tool(&config, &wallet, TOOL_ROUTE, args).await?;
        }
        Commands::CheckApproval { token, amount } => {
            let wallet = load_wallet(&config, &cli.network).await?;
            let args = json!({
                "token": token,
                "amount": amount,
                "walletAddress": wallet.address().to_string(),
            });
            run_tool(&config, &wallet, TOOL_CHECK_APPROVAL, args).await?;
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

async fn load_wallet(config: &Config, network: &str) -> Result<AlloyWallet> {
    let chain_id = networks::parse_network(network)
        .ok_or_else(|| Error::InvalidArgument(format!("Unknown network: {}", network)))?;

    let signer = SecureWallet::from_env(PRIVATE_KEY_ENV)?;
    tracing::info!(address = %signer.address(), chain_id, "Loaded wallet from {}", PRIVATE_KEY_ENV);

    AlloyWallet::from_rpc_config(signer, &config.rpc(), chain_id).await
}

async fn run_tool(config: &Config, wallet: &AlloyWallet, tool: &str, args: Value) -> Result<()> {
    let registry = ToolRegistry::enso(EnsoClient::new(&config.enso)?);

    let result = registry.execute(tool, wallet, args).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
