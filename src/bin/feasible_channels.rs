use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use exg_montage::{logging, run, Montage, SearchConfig};

#[derive(Parser)]
#[command(name = "feasible_channels", about = "Enumerate feasible reduced double banana montages")]
struct Args {
    /// Directory for feasible_<n>edges.json (created if missing)
    #[arg(long, default_value = "feasible_channels")]
    output_dir: PathBuf,

    /// Evaluate cardinalities in parallel
    #[arg(long)]
    parallel: bool,

    /// Verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let montage = Montage::double_banana();
    let cfg = SearchConfig {
        output_dir: args.output_dir,
        parallel: args.parallel,
    };

    let summary = run(&montage, &cfg)
        .with_context(|| format!("feasibility search into {}", cfg.output_dir.display()))?;

    println!("Total feasible combinations: {}", summary.total);
    for (k, n) in summary.per_cardinality.iter().enumerate().skip(1) {
        println!("  {k:>2} channels: {n}");
    }
    println!("Written → {}", summary.path.display());

    Ok(())
}
