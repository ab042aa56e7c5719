use super::load_ratings;
use crate::reports;
use clap::Args;
use keystat::api::{rate_analysis, AnalysisReport};
use keystat::config::Config;
use keystat::layouts::resolve_layout;
use keystat::stats::Analyzer;
use keystat::KsResult;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: Config,

    /// Layout name (jcuken, qwerty, colemak...) or a 47-key string
    #[arg(short, long, default_value = "jcuken")]
    pub layout: String,

    /// Print the full report as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: AnalyzeArgs) -> KsResult<()> {
    let analyzer =
        Analyzer::from_dir(&args.config.data.corpus_dir)?.with_top_n(args.config.report.top_n);
    let ratings = load_ratings(&args.config.data)?;
    let mapping = resolve_layout(&args.layout)?;

    let analysis = analyzer.analyze(&mapping)?;
    let heatmap = analyzer.key_heat(&mapping);

    if args.json {
        let (ngram_ratings, finger_ratings) = rate_analysis(&analysis, &ratings);
        let report = AnalysisReport {
            layout: mapping.as_string(),
            analysis,
            ngram_ratings,
            finger_ratings,
            heatmap,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    reports::print_layout_grid(&args.layout, &mapping, &heatmap);
    reports::print_ngram_report(&analysis, &ratings, args.config.report.show_top);
    reports::print_finger_report(&analysis, &ratings);
    reports::print_morpheme_report("Endings", &analysis.ending_stats);
    reports::print_morpheme_report("Prefixes", &analysis.prefix_stats);
    Ok(())
}
