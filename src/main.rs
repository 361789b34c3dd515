use checkout_engine::application::service::TransactionService;
use checkout_engine::config::{DEFAULT_DATA_DIR, DataPaths};
use checkout_engine::domain::cart::CartEntry;
use checkout_engine::domain::transaction::FinalStatus;
use checkout_engine::infrastructure::file::{JsonCatalog, JsonLedger};
use checkout_engine::interfaces::cli::cart_item::parse_cart_entry;
use checkout_engine::interfaces::cli::output::JsonOutput;
use checkout_engine::telemetry;
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding products.json and transactions.json
    #[arg(long, env = "DATA_DIR", default_value = DEFAULT_DATA_DIR, global = true)]
    data_dir: PathBuf,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the product catalog
    Products,
    /// Print every recorded transaction
    Transactions,
    /// Price a cart and record it as a pending transaction
    Start {
        /// Cart lines as productId:quantity[:member|:non-member]
        #[arg(required = true, value_parser = parse_cart_entry)]
        items: Vec<CartEntry>,
    },
    /// Mark a transaction as completed or canceled
    Finalize {
        /// Transaction id
        id: String,
        /// completed or canceled
        status: FinalStatus,
    },
}

/// Exit status for input the operator can correct (bad cart line, unknown id).
const EXIT_USER_ERROR: u8 = 2;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    telemetry::init(cli.log_json);

    let paths = DataPaths::new(cli.data_dir);
    tracing::debug!(data_dir = %paths.data_dir().display(), "using data directory");
    let service = TransactionService::new(
        Box::new(JsonCatalog::from_paths(&paths)),
        Box::new(JsonLedger::from_paths(&paths)),
    );

    let stdout = io::stdout();
    let mut output = JsonOutput::new(stdout.lock());

    let outcome = match cli.command {
        Command::Products => service
            .list_products()
            .await
            .map(|products| output.write(&products)),
        Command::Transactions => service
            .list_transactions()
            .await
            .map(|transactions| output.write(&transactions)),
        Command::Start { items } => service
            .start_transaction(&items)
            .await
            .map(|transaction| output.write(&transaction)),
        Command::Finalize { id, status } => service
            .finalize_transaction(&id, status)
            .await
            .map(|transaction| output.write(&transaction)),
    };

    match outcome {
        Ok(written) => {
            written.into_diagnostic()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_user_error() => {
            eprintln!("Error: {e}");
            Ok(ExitCode::from(EXIT_USER_ERROR))
        }
        Err(e) => Err(e).into_diagnostic(),
    }
}
