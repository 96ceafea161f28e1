/// check_subset: explain the feasibility verdict for one channel subset, or
/// summarise an existing artifact.
///
/// Channels are given as edge indices or bipolar labels, mixed freely:
///
///   check_subset 0 1            FP1-F7 + F7-T3        → feasible
///   check_subset FP1-F7 T3-T5   gap at F7-T3          → infeasible
///   check_subset --artifact feasible_channels/feasible_20edges.json
use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use exg_montage::{
    is_feasible, logging, read_feasible_set, violations, DegreeMap, EdgeSubset, Error, Montage,
};

#[derive(Parser, Debug)]
#[command(name = "check_subset")]
struct Args {
    /// Channels to keep: edge indices (0-19) or labels such as F7-T3.
    channels: Vec<String>,

    /// Summarise this artifact instead of checking a subset.
    #[arg(long, conflicts_with = "channels")]
    artifact: Option<PathBuf>,

    /// Verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);
    let montage = Montage::double_banana();

    if let Some(path) = &args.artifact {
        return summarise(&montage, path);
    }
    if args.channels.is_empty() {
        bail!("no channels given (pass edge indices or labels, or --artifact)");
    }

    let subset = parse_subset(&montage, &args.channels)?;
    let degrees = DegreeMap::compute(&montage, subset);

    println!("Kept channels ({}):", subset.cardinality());
    for i in subset.indices() {
        println!("  {i:>2}  {}", montage.channel_label(i).unwrap_or_default());
    }

    println!("Electrodes in use:");
    for e in degrees.touched() {
        println!("  {:<4} degree {}", montage.electrode_label(e), degrees.degree(e));
    }

    let bad = violations(&montage, subset);
    for &i in &bad {
        println!(
            "Dropped channel {i} ({}) joins two electrodes in use",
            montage.channel_label(i).unwrap_or_default()
        );
    }

    let verdict = is_feasible(&montage, subset);
    debug_assert_eq!(verdict, bad.is_empty());
    println!("{}", if verdict { "FEASIBLE" } else { "INFEASIBLE" });
    Ok(())
}

fn parse_subset(montage: &Montage, channels: &[String]) -> Result<EdgeSubset> {
    let n_edges = montage.n_edges();
    let mut subset = EdgeSubset::empty();
    for ch in channels {
        let index = match ch.parse::<usize>() {
            Ok(i) if i < n_edges => i,
            Ok(i) => return Err(Error::EdgeOutOfRange { index: i, n_edges }.into()),
            Err(_) => montage
                .edge_by_label(ch)
                .ok_or_else(|| Error::UnknownChannel(ch.clone()))?,
        };
        subset.insert(index);
    }
    Ok(subset)
}

fn summarise(montage: &Montage, path: &std::path::Path) -> Result<()> {
    let n_edges = montage.n_edges();
    let set = read_feasible_set(path, n_edges)?;
    println!("{}: {} feasible subsets", path.display(), set.len());
    for (k, n) in set.counts_by_cardinality(n_edges).iter().enumerate().skip(1) {
        println!("  {k:>2} channels: {n}");
    }
    Ok(())
}
