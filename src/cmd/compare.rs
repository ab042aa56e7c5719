use super::load_ratings;
use crate::reports;
use clap::Args;
use keystat::config::Config;
use keystat::layouts::{get_all_layouts, LayoutMapping};
use keystat::stats::{Analysis, Analyzer};
use keystat::KsResult;
use rayon::prelude::*;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub config: Config,

    /// Only built-in layouts whose name contains this text
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Extra 47-key layout strings to include (repeatable)
    #[arg(long = "custom")]
    pub custom: Vec<String>,
}

pub fn run(args: CompareArgs) -> KsResult<()> {
    let analyzer =
        Analyzer::from_dir(&args.config.data.corpus_dir)?.with_top_n(args.config.report.top_n);
    let ratings = load_ratings(&args.config.data)?;

    let mut candidates: Vec<(String, String)> = get_all_layouts()
        .into_iter()
        .map(|(l, s)| (l.to_string(), s.to_string()))
        .filter(|(name, _)| match &args.filter {
            Some(f) => name.to_lowercase().contains(&f.to_lowercase()),
            None => true,
        })
        .collect();
    for (i, s) in args.custom.iter().enumerate() {
        candidates.push((format!("custom_{}", i + 1), s.clone()));
    }

    if candidates.is_empty() {
        println!("No layouts found matching criteria.");
        return Ok(());
    }

    info!("🔎 Comparing {} layouts", candidates.len());

    // Each worker builds its own mapping; the analyzer is shared read-only.
    let mut results: Vec<(String, Analysis)> = candidates
        .par_iter()
        .map(|(name, layout)| -> KsResult<(String, Analysis)> {
            let mapping = LayoutMapping::new_lowercase(layout)?;
            Ok((name.clone(), analyzer.analyze(&mapping)?))
        })
        .collect::<KsResult<_>>()?;

    results.sort_by(|a, b| a.0.cmp(&b.0));

    reports::print_comparison_report(&results, &ratings);
    Ok(())
}
