mod api;
mod auth;
mod config;
mod lookup;
mod models;
mod report;

use std::fmt;
use std::process::ExitCode;

use clap::{ArgGroup, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Blockchains the API serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Currency {
    Btc,
    Eth,
    Ltc,
    Doge,
    Trx,
    Bnb,
}

impl Currency {
    fn code(self) -> &'static str {
        match self {
            Currency::Btc => "btc",
            Currency::Eth => "eth",
            Currency::Ltc => "ltc",
            Currency::Doge => "doge",
            Currency::Trx => "trx",
            Currency::Bnb => "bnb",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Verifica transazioni blockchain usando l'API Caudena
#[derive(Parser)]
#[command(
    name = "caudena-check",
    about = "Verifica transazioni blockchain usando l'API Caudena",
    after_help = "Esempi:\n  \
        caudena-check --hash 0000000000000000000000000000000000000000000000000000000000000000 --currency btc\n  \
        caudena-check --address bc1qxxxxxx --currency btc\n\n\
        Per maggiori informazioni, visita: https://docs.caudena.com"
)]
#[command(group(
    ArgGroup::new("lookup")
        .required(true)
        .args(["hash", "address"]),
))]
struct Cli {
    /// Hash della transazione da verificare
    #[arg(long)]
    hash: Option<String>,

    /// Indirizzo blockchain da verificare
    #[arg(long)]
    address: Option<String>,

    /// Currency/blockchain (default: btc)
    #[arg(long, value_enum, default_value_t = Currency::Btc)]
    currency: Currency,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr and stay off unless RUST_LOG asks for them,
    // so the report output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    println!("🔐 Autenticazione...");
    let (kid, secret) = match config::credentials() {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let token = match auth::generate_token(&kid, &secret) {
        Ok(token) => token,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    println!("✅ Token generato con successo\n");

    let client = match api::ApiClient::new(config::api_base_url(), token) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = match (&cli.hash, &cli.address) {
        (Some(hash), _) => lookup::by_hash(&client, cli.currency, hash).await,
        (_, Some(address)) => lookup::by_address(&client, cli.currency, address).await,
        _ => unreachable!("clap enforces exactly one of --hash/--address"),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
