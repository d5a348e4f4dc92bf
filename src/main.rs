use clap::{Parser, Subcommand};
use log::error;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use enchant_reagents::config::AppConfig;
use enchant_reagents::{extract, EnchantService, EnchantStore, RequestFetcher};

#[derive(Parser)]
#[command(name = "enchant-reagents")]
#[command(about = "Scrape enchant recipes and total the reagents they need")]
struct Args {
    /// Store file to use instead of the configured one
    #[arg(long)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract a recipe from a saved page without storing it
    Extract {
        /// HTML file to read
        file: PathBuf,
    },
    /// Scrape an enchant page and store its recipe
    Add {
        url: String,
    },
    /// List stored enchants
    List,
    /// Delete a stored enchant
    Delete {
        id: u64,
    },
    /// Total the reagents for the given enchant ids (repeat an id to craft it more than once)
    Calculate {
        #[arg(required = true)]
        ids: Vec<u64>,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn open_service(
    store: Option<PathBuf>,
    config: &AppConfig,
) -> Result<EnchantService<RequestFetcher>, Box<dyn std::error::Error>> {
    let store = EnchantStore::open(store.unwrap_or_else(|| config.store_path.clone()))?;
    let fetcher = RequestFetcher::new(Some(config.timeout()), Some(config.user_agent.as_str()))?;
    Ok(EnchantService::new(store, fetcher))
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    match args.command {
        Command::Extract { file } => {
            let markup = fs::read_to_string(&file)?;
            print_json(&extract(&markup)?)
        }
        Command::Add { url } => {
            let service = open_service(args.store, &config)?;
            print_json(&service.create_from_url(&url).await?)
        }
        Command::List => print_json(&open_service(args.store, &config)?.list()),
        Command::Delete { id } => {
            open_service(args.store, &config)?.delete(id)?;
            println!("Enchant deleted");
            Ok(())
        }
        Command::Calculate { ids } => {
            print_json(&open_service(args.store, &config)?.calculate(&ids))
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        error!("{}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
