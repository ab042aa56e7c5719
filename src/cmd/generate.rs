use clap::Args;
use keystat::corpus::generate_corpus;
use keystat::stats::loader::save_corpus_dir;
use keystat::KsResult;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Plain text file to count
    #[arg(short, long)]
    pub input: String,

    /// Directory to write the corpus JSON files into
    #[arg(short, long, default_value = "data/corpora")]
    pub output: String,

    /// Keep only the N heaviest bigrams, skipgrams and trigrams (0 keeps all)
    #[arg(long, default_value_t = 0)]
    pub top: usize,
}

pub fn run(args: GenerateArgs) -> KsResult<()> {
    info!("📂 Reading text: {}", args.input);
    let content = fs::read_to_string(&args.input)?;

    let corpus = generate_corpus(&content, args.top);
    info!(
        "Counted {} monograms, {} bigrams, {} skipgrams, {} trigrams",
        corpus.monograms.len(),
        corpus.bigrams.len(),
        corpus.skipgrams.len(),
        corpus.trigrams.len()
    );

    save_corpus_dir(&args.output, &corpus, None)
}
