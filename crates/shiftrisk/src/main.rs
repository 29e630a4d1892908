use clap::Parser;
use tracing_subscriber::EnvFilter;

use shiftrisk_core::{ScenarioConfig, run_scenario};

mod report;

#[derive(Parser, Debug)]
#[command(name = "shiftrisk")]
#[command(about = "Monte Carlo estimator for worst-case incident exposure on a shift roster")]
struct Args {
    /// Master seed for margin generation and all runs
    #[arg(long, default_value_t = 123)]
    seed: u64,

    /// Roster period length in days (two shifts per day)
    #[arg(long, default_value_t = 384)]
    days: usize,

    /// Number of incident shifts overlaid on each run
    #[arg(long, default_value_t = 20)]
    incidents: usize,

    /// Number of Monte Carlo runs
    #[arg(long, default_value_t = 1000)]
    runs: usize,

    /// Swap attempts used to mix each sampled roster
    #[arg(long, default_value_t = 20_000)]
    swaps: u64,

    /// Print the empirical P(max >= OBSERVED) for an observed maximum
    #[arg(long)]
    observed: Option<u32>,

    /// Emit the full report as JSON instead of the text summary
    #[arg(long)]
    json: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level);

    let config = ScenarioConfig::default()
        .with_seed(args.seed)
        .with_days(args.days)
        .with_incidents(args.incidents)
        .with_runs(args.runs)
        .with_swaps(args.swaps);

    tracing::info!(
        seed = config.seed,
        days = config.n_days,
        shifts = config.n_shifts(),
        incidents = config.incident_count,
        runs = config.runs,
        swaps = config.swaps,
        "running scenario"
    );

    let scenario = run_scenario(&config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scenario)?);
        return Ok(());
    }

    let Some(dist) = &scenario.distribution else {
        println!("no runs requested; nothing to report");
        return Ok(());
    };

    println!(
        "Worst per-worker incident exposure: {} incidents across {} shifts, {} runs",
        config.incident_count,
        config.n_shifts(),
        dist.runs
    );
    println!();
    print!("{}", report::render_histogram(dist, 40));
    println!();
    println!(
        "mean {:.2}   p50 {}   p95 {}   range {}..={}",
        dist.mean(),
        dist.quantile(0.50),
        dist.quantile(0.95),
        dist.min,
        dist.max
    );

    if let Some(observed) = args.observed {
        println!(
            "empirical P(max >= {observed}) = {:.3}",
            dist.exceedance_probability(observed)
        );
    }

    tracing::info!("scenario complete");

    Ok(())
}
