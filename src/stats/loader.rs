use crate::consts::{
    BIGRAMS_FILE, ENDINGS_FILE, MONOGRAMS_FILE, PREFIXES_FILE, SKIPGRAMS_FILE, TRIGRAMS_FILE,
};
use crate::corpus::{Corpus, Morphemes, NgramTable};
use crate::error::{KeyStatError, KsResult};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Reads a JSON object of n-gram -> weight.
///
/// Every key must have `order` characters and every weight must be a
/// finite, non-negative number.
pub fn load_ngram_table<R: Read>(reader: R, order: usize) -> KsResult<NgramTable> {
    let table: NgramTable = serde_json::from_reader(reader)?;

    for (gram, weight) in table.iter() {
        let len = gram.chars().count();
        if len != order {
            return Err(KeyStatError::Validation(format!(
                "N-gram '{}' has {} characters, expected {}",
                gram, len, order
            )));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(KeyStatError::Validation(format!(
                "N-gram '{}' has invalid weight {}",
                gram, weight
            )));
        }
    }

    Ok(table)
}

/// Reads a JSON array of strings. Lengths are not checked here; the
/// analysis skips entries it cannot classify.
pub fn load_morpheme_list<R: Read>(reader: R) -> KsResult<Vec<String>> {
    Ok(serde_json::from_reader(reader)?)
}

fn open_optional(dir: &Path, name: &str) -> KsResult<Option<BufReader<File>>> {
    let path = dir.join(name);
    if !path.exists() {
        warn!("⚠️  {} not found in {:?}; treating it as empty", name, dir);
        return Ok(None);
    }
    debug!("Reading {:?}", path);
    Ok(Some(BufReader::new(File::open(path)?)))
}

/// Loads the four n-gram families and both morpheme lists from a directory.
pub fn load_corpus_dir<P: AsRef<Path>>(dir: P) -> KsResult<(Corpus, Morphemes)> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(KeyStatError::Config(format!(
            "Corpus directory not found: {:?}",
            dir
        )));
    }

    info!("📚 Loading corpus from {:?}", dir);

    let table = |name: &str, order: usize| -> KsResult<NgramTable> {
        match open_optional(dir, name)? {
            Some(r) => load_ngram_table(r, order),
            None => Ok(NgramTable::new()),
        }
    };
    let list = |name: &str| -> KsResult<Vec<String>> {
        match open_optional(dir, name)? {
            Some(r) => load_morpheme_list(r),
            None => Ok(Vec::new()),
        }
    };

    let corpus = Corpus {
        monograms: table(MONOGRAMS_FILE, 1)?,
        bigrams: table(BIGRAMS_FILE, 2)?,
        skipgrams: table(SKIPGRAMS_FILE, 2)?,
        trigrams: table(TRIGRAMS_FILE, 3)?,
    };
    let morphemes = Morphemes {
        endings: list(ENDINGS_FILE)?,
        prefixes: list(PREFIXES_FILE)?,
    };

    info!(
        "Corpus: {} monograms, {} bigrams, {} skipgrams, {} trigrams, {} endings, {} prefixes",
        corpus.monograms.len(),
        corpus.bigrams.len(),
        corpus.skipgrams.len(),
        corpus.trigrams.len(),
        morphemes.endings.len(),
        morphemes.prefixes.len()
    );

    Ok((corpus, morphemes))
}

fn write_json<T: Serialize + ?Sized>(dir: &Path, name: &str, value: &T) -> KsResult<()> {
    let file = File::create(dir.join(name))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)?;
    Ok(())
}

/// Writes a corpus in the layout `load_corpus_dir` reads. Morpheme lists
/// are only written when given.
pub fn save_corpus_dir<P: AsRef<Path>>(
    dir: P,
    corpus: &Corpus,
    morphemes: Option<&Morphemes>,
) -> KsResult<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    write_json(dir, MONOGRAMS_FILE, &corpus.monograms)?;
    write_json(dir, BIGRAMS_FILE, &corpus.bigrams)?;
    write_json(dir, SKIPGRAMS_FILE, &corpus.skipgrams)?;
    write_json(dir, TRIGRAMS_FILE, &corpus.trigrams)?;

    if let Some(m) = morphemes {
        write_json(dir, ENDINGS_FILE, &m.endings)?;
        write_json(dir, PREFIXES_FILE, &m.prefixes)?;
    }

    info!("💾 Corpus written to {:?}", dir);
    Ok(())
}
