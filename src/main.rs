//! wb-search - collect Wildberries search results into an XLSX workbook.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::Level;

use wb_search::{config, ExportOutcome, SearchFilter, WbSearch};

/// Wildberries search parser
#[derive(Parser)]
#[command(name = "wb-search")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Search query
    query: String,

    /// Minimum price
    #[arg(long = "min_price", default_value_t = config::DEFAULT_MIN_PRICE)]
    min_price: u32,

    /// Maximum price
    #[arg(long = "max_price", default_value_t = config::DEFAULT_MAX_PRICE)]
    max_price: u32,

    /// Minimum discount
    #[arg(long, default_value_t = config::DEFAULT_DISCOUNT)]
    discount: u32,

    /// Directory to write the workbook into
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Maximum number of result pages to walk
    #[arg(long, default_value_t = config::MAX_PAGES)]
    max_pages: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> wb_search::Result<()> {
    let filter =
        SearchFilter::new(cli.query, cli.min_price, cli.max_price)?.with_discount(cli.discount);

    let search = WbSearch::builder()
        .output_dir(&cli.output_dir)
        .max_pages(cli.max_pages)
        .timeout(Duration::from_secs(cli.timeout))
        .build()?;
    tracing::debug!("{}", search);

    match search.run(&filter)? {
        ExportOutcome::Written { path, .. } => {
            println!("Data successfully saved to {}", path.display());
        }
        ExportOutcome::NoData => {
            println!("No data found with the specified parameters");
        }
    }
    Ok(())
}
