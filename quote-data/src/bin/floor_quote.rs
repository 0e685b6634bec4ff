use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use quote_core::calculations::material_cost;
use quote_core::{CatalogRepository, Estimator, InMemoryCatalog, QuoteRequest};
use quote_data::{WoodProfileLoader, estimate_batch, load_or_default, logging, quote_loader, report};
use rust_decimal::Decimal;
use tracing::info;

/// Price flooring jobs from the command line.
///
/// Rates come from the built-in rate card unless `--config` points at a TOML
/// file overriding some of them.
#[derive(Parser, Debug)]
#[command(name = "floor-quote")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML file with rate-table overrides
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `quote_core=trace` (defaults to RUST_LOG, then info)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate a single job
    Estimate(EstimateArgs),

    /// Estimate every row of a quote CSV
    Batch {
        /// CSV with one quote request per row
        #[arg(short, long)]
        file: PathBuf,

        /// Print results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Load wood profiles and list them, or price materials for one SKU
    Catalog {
        /// CSV of wood profiles
        #[arg(short, long)]
        file: PathBuf,

        /// Profile to price
        #[arg(long, requires = "area")]
        sku: Option<String>,

        /// Area to cover in square feet
        #[arg(long, requires = "sku")]
        area: Option<Decimal>,
    },
}

#[derive(Args, Debug)]
struct EstimateArgs {
    /// refinish, new_hardwood, luxury_vinyl, kitchen_remodel, engineered or stairs_only
    #[arg(short, long)]
    project_type: String,

    /// Floor area in square feet (step count for stairs_only)
    #[arg(short, long)]
    square_feet: Decimal,

    /// economy, standard or premium
    #[arg(long)]
    quality: Option<String>,

    /// light, average or heavy (ignored when --quality is given)
    #[arg(long)]
    condition: Option<String>,

    /// low, medium or high labor-cost area
    #[arg(long)]
    location: Option<String>,

    /// Number of stairs to add
    #[arg(long)]
    stairs: Option<u32>,

    #[arg(long, default_value_t = false)]
    demo: bool,

    #[arg(long, default_value_t = false)]
    subfloor: bool,

    #[arg(long, default_value_t = false)]
    furniture: bool,

    #[arg(long, default_value_t = false)]
    haul_away: bool,

    #[arg(long, default_value_t = false)]
    rush: bool,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl From<&EstimateArgs> for QuoteRequest {
    fn from(args: &EstimateArgs) -> Self {
        QuoteRequest {
            project_type: Some(args.project_type.clone()),
            square_feet: Some(args.square_feet),
            quality: args.quality.clone(),
            condition: args.condition.clone(),
            location_cost_tier: args.location.clone(),
            has_stairs: args.stairs.is_some_and(|n| n > 0),
            stair_count: args.stairs,
            needs_demo: args.demo,
            needs_subfloor_prep: args.subfloor,
            move_furniture: args.furniture,
            haul_away_debris: args.haul_away,
            rush_job: args.rush,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level.as_deref())?;

    let config = load_or_default(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load config: {}", path.display()),
        None => "Built-in rate card is invalid".to_string(),
    })?;
    let estimator = Estimator::new(config);

    match &cli.command {
        Command::Estimate(args) => run_estimate(&estimator, args),
        Command::Batch { file, json } => run_batch(&estimator, file, *json),
        Command::Catalog { file, sku, area } => run_catalog(file, sku.as_deref(), *area).await,
    }
}

fn run_estimate(
    estimator: &Estimator,
    args: &EstimateArgs,
) -> Result<ExitCode> {
    let result = estimator
        .estimate(&QuoteRequest::from(args))
        .context("Failed to estimate")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::render_quote(&result));
    }
    Ok(ExitCode::SUCCESS)
}

fn run_batch(
    estimator: &Estimator,
    file: &Path,
    json: bool,
) -> Result<ExitCode> {
    info!(path = %file.display(), "loading quote requests");
    let requests = quote_loader::load_from_file(file)
        .with_context(|| format!("Failed to load quotes: {}", file.display()))?;
    info!(count = requests.len(), "parsed quote requests");

    let rows = estimate_batch(estimator, &requests);
    let failed = rows.iter().filter(|r| !r.is_ok()).count();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            match (&row.quote, &row.error) {
                (Some(quote), _) => {
                    println!("--- row {} ---", row.row);
                    print!("{}", report::render_quote(quote));
                }
                (None, Some(error)) => println!("--- row {} --- error: {error}", row.row),
                (None, None) => {}
            }
        }
    }

    info!(total = rows.len(), failed, "batch complete");
    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn run_catalog(
    file: &Path,
    sku: Option<&str>,
    area: Option<Decimal>,
) -> Result<ExitCode> {
    info!(path = %file.display(), "loading wood profiles");
    let reader =
        File::open(file).with_context(|| format!("Failed to open: {}", file.display()))?;
    let records = WoodProfileLoader::parse(reader)
        .with_context(|| format!("Failed to parse CSV: {}", file.display()))?;

    let catalog = InMemoryCatalog::new();
    let stored = WoodProfileLoader::load(&catalog, &records)
        .await
        .context("Failed to load wood profiles into the catalog")?;
    info!(stored, "catalog ready");

    match (sku, area) {
        (Some(sku), Some(area)) => {
            let profile = catalog
                .get_by_sku(sku)
                .await
                .with_context(|| format!("Unknown SKU: {sku}"))?;
            let cost = material_cost(area, &profile);
            println!("{}", report::render_material(&profile, area, cost));
        }
        _ => {
            let profiles = catalog
                .list_profiles()
                .await
                .context("Failed to list wood profiles")?;
            print!("{}", report::render_catalog(&profiles));
        }
    }
    Ok(ExitCode::SUCCESS)
}
