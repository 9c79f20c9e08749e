//! FundMe console.
//!
//! Terminal front end for the coordinator. One-shot subcommands replay the
//! clicks a user would make; `interactive` reads one UI event per line.
//!
//! ```text
//!   stdin / argv ──▶ UiEvent ──▶ Coordinator ──▶ WalletProvider ──▶ JSON-RPC node
//!                                    │
//!                                    ▼
//!                  stdout: accounts, tx hashes, balances, button state
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use fundme_console::blockchain::units;
use fundme_console::config::{self, validate_config, ConfigError, FundMeConfig};
use fundme_console::observability::logging;
use fundme_console::ui::{ActionOutcome, ButtonId, Coordinator, CoordinatorResult, UiEvent};
use fundme_console::ProviderDetection;

#[derive(Parser)]
#[command(name = "fundme")]
#[command(about = "Fund and withdraw from a FundMe contract through a wallet provider", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults target a local node.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the wallet RPC endpoint.
    #[arg(long)]
    rpc_url: Option<String>,

    /// Override the contract address.
    #[arg(long)]
    contract: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect the wallet and print its accounts
    Connect,
    /// Send AMOUNT ether to the contract's fund()
    Fund { amount: String },
    /// Print the contract's balance in ether
    Balance,
    /// Call the contract's withdraw()
    Withdraw,
    /// Read events from stdin: connect, amount <value>, fund, balance, withdraw, state, quit
    Interactive,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load(&cli)?;
    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        rpc_url = %config.wallet.rpc_url,
        contract = %config.contract.address,
        "fundme starting"
    );

    let detection = ProviderDetection::detect(&config.wallet).await;
    let mut coordinator = Coordinator::from_config(detection, &config)?;

    match cli.command {
        Commands::Connect => {
            click(&mut coordinator, ButtonId::Connect).await?;
        }
        Commands::Fund { amount } => {
            coordinator.set_amount(amount);
            click(&mut coordinator, ButtonId::Fund).await?;
        }
        Commands::Balance => {
            click(&mut coordinator, ButtonId::Connect).await?;
            click(&mut coordinator, ButtonId::Balance).await?;
        }
        Commands::Withdraw => {
            click(&mut coordinator, ButtonId::Connect).await?;
            click(&mut coordinator, ButtonId::Withdraw).await?;
        }
        Commands::Interactive => interactive(&mut coordinator).await?,
    }

    Ok(())
}

fn load(cli: &Cli) -> Result<FundMeConfig, ConfigError> {
    let mut config = config::load_or_default(cli.config.as_deref())?;
    if let Some(rpc_url) = &cli.rpc_url {
        config.wallet.rpc_url = rpc_url.clone();
    }
    if let Some(contract) = &cli.contract {
        config.contract.address = contract.clone();
    }
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

async fn click(coordinator: &mut Coordinator, button: ButtonId) -> CoordinatorResult<()> {
    let outcome = coordinator.dispatch(UiEvent::Click(button)).await?;
    print_outcome(&outcome, coordinator);
    Ok(())
}

fn print_outcome(outcome: &ActionOutcome, coordinator: &Coordinator) {
    match outcome {
        ActionOutcome::Connected { accounts } => {
            for account in accounts {
                println!("{account}");
            }
        }
        ActionOutcome::ProviderMissing => println!("{}", coordinator.ui().connect_button.label),
        ActionOutcome::Submitted { tx_hash } => println!("{tx_hash}"),
        ActionOutcome::Balance { wei } => println!("{}", units::to_ether(*wei)),
        ActionOutcome::InputUpdated { fund_enabled } => {
            let state = if *fund_enabled { "enabled" } else { "disabled" };
            println!("{} {state}", ButtonId::Fund.element_id());
        }
        ActionOutcome::Ignored(button) => println!("{} is disabled", button.element_id()),
    }
}

/// A parsed line of interactive input.
#[derive(Debug, PartialEq, Eq)]
enum Line {
    Event(UiEvent),
    State,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_line(line: &str) -> Line {
    let line = line.trim();
    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    match command {
        "" => Line::Empty,
        "connect" => Line::Event(UiEvent::Click(ButtonId::Connect)),
        "fund" => Line::Event(UiEvent::Click(ButtonId::Fund)),
        "balance" => Line::Event(UiEvent::Click(ButtonId::Balance)),
        "withdraw" => Line::Event(UiEvent::Click(ButtonId::Withdraw)),
        "amount" => Line::Event(UiEvent::Input(rest.trim().to_string())),
        "state" => Line::State,
        "quit" | "exit" => Line::Quit,
        other => Line::Unknown(other.to_string()),
    }
}

async fn interactive(coordinator: &mut Coordinator) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", coordinator.ui());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        };
        let Some(line) = line else { break };

        let event = match parse_line(&line) {
            Line::Event(event) => event,
            Line::State => {
                println!("{}", serde_json::to_string_pretty(coordinator.ui())?);
                continue;
            }
            Line::Quit => break,
            Line::Empty => continue,
            Line::Unknown(command) => {
                eprintln!("unknown command '{command}'");
                continue;
            }
        };

        match coordinator.dispatch(event).await {
            Ok(outcome) => print_outcome(&outcome, coordinator),
            Err(e) => tracing::error!(error = %e, "Action failed"),
        }
    }

    tracing::info!("Session closed");
    Ok(())
}
