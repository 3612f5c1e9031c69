#![forbid(unsafe_code)]

mod output;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use output::OutputMode;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use winedrops_core::{
    BestSellerOptions, Ranking, StatsConfig, db, get_best_selling_wines, get_products,
    get_qualifying_orders, get_wines, load_config,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "winedrops: wine sales statistics",
    long_about = None
)]
struct Cli {
    /// Path to the wine ledger SQLite database.
    #[arg(long, global = true, default_value = "db/winedrops.db")]
    db: PathBuf,

    /// Optional TOML config file (query limits and timeouts).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    const fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Rank wines by sales",
        long_about = "Rank wines by revenue, bottles sold, or order count over paid and dispatched orders.",
        after_help = "EXAMPLES:\n    # Top sellers by revenue (default)\n    wd best-sellers\n\n    # Rank by bottles sold, filtered by name\n    wd best-sellers --order-by quantity --search riesling\n\n    # Emit machine-readable output\n    wd best-sellers --json"
    )]
    BestSellers(BestSellersArgs),

    #[command(about = "List every wine in the catalog")]
    Wines,

    #[command(about = "List every wine product")]
    Products,

    #[command(about = "List qualifying (paid or dispatched) orders")]
    Orders,
}

#[derive(Args, Debug)]
struct BestSellersArgs {
    /// Metric to rank by: revenue, quantity, or orders.
    #[arg(long, value_name = "METRIC", default_value_t = Ranking::Revenue)]
    order_by: Ranking,

    /// Substring filter on the wine's display name.
    #[arg(long, value_name = "TERM")]
    search: Option<String>,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("WINEDROPS_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => StatsConfig::default(),
    };

    let conn = db::open_ledger(&cli.db, &config.query)?;
    tracing::debug!(ledger = %cli.db.display(), "ledger opened read-only");
    let mode = cli.output_mode();

    match cli.command {
        Commands::BestSellers(args) => {
            let options = BestSellerOptions {
                order_by: Some(args.order_by.to_string()),
                search: args.search,
            };
            let envelope = get_best_selling_wines(&conn, &config.query, &options);
            output::render_best_sellers(&envelope, mode)
        }
        Commands::Wines => output::render_wines(&get_wines(&conn), mode),
        Commands::Products => output::render_products(&get_products(&conn), mode),
        Commands::Orders => output::render_orders(&get_qualifying_orders(&conn), mode),
    }
}
