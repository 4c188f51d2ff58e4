//! Training dataset preparation pipeline
//!
//! # Processing
//! 1. Train and validation corpora are read into source and target word instances,
//!    posts being lowercased (unless asked not to) and truncated to a maximum length.
//! 1. Channels are aligned and pairs with an empty side are removed.
//! 1. Vocabularies are either loaded from a previous dataset, or built from the *train* split only,
//!    shared between channels or not.
//! 1. Both splits are encoded with these vocabularies.
//! 1. The dataset (settings, vocabularies, encoded splits) is saved.
//!
//! Nothing is written if any of these steps fails.
use std::path::Path;

use log::{debug, info, warn};

use crate::dataset::{Dataset, Dictionary, EncodedSplit};
use crate::error::Error;
use crate::io::{load_corpus, ArtifactStore, JsonStore};
use crate::pipelines::pipeline::Pipeline;
use crate::processing::{align, read_instances, ReadReport, SplitReport, WordInstance};
use crate::settings::{Settings, VocabSource};
use crate::vocab::{build_vocabulary, encode_all, VocabReport};

/// What happened to a split while reading and aligning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitStats {
    pub read: ReadReport,
    pub align: SplitReport,
}

/// Vocabulary building reports, depending on where vocabularies come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabStats {
    /// nothing was counted.
    Predefined,
    Shared(VocabReport),
    Separate { src: VocabReport, tgt: VocabReport },
}

/// Aggregated reports of a preprocessing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub train: SplitStats,
    pub valid: SplitStats,
    pub vocab: VocabStats,
}

impl Report {
    /// Log a summary of the run.
    pub fn log(&self) {
        for (name, stats) in [("train", &self.train), ("valid", &self.valid)] {
            info!(
                "[{}] {} instances read, {} trimmed, {} empty pairs removed",
                name, stats.read.src_instances, stats.read.trimmed, stats.align.dropped
            );
            if let Some((src, tgt)) = stats.align.mismatch {
                warn!("[{}] {} source for {} target instances", name, src, tgt);
            }
        }
        match self.vocab {
            VocabStats::Predefined => info!("pre-defined vocabularies"),
            VocabStats::Shared(r) => info!(
                "shared vocabulary: {} words, {} ignored",
                r.trimmed_size, r.ignored
            ),
            VocabStats::Separate { src, tgt } => info!(
                "source vocabulary: {} words, {} ignored. target vocabulary: {} words, {} ignored",
                src.trimmed_size, src.ignored, tgt.trimmed_size, tgt.ignored
            ),
        }
    }
}

/// Aligned word instances of a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSplit {
    pub src: Vec<WordInstance>,
    pub tgt: Vec<WordInstance>,
}

impl WordSplit {
    /// Encode both channels with their respective vocabularies.
    pub fn encode(&self, dict: &Dictionary) -> EncodedSplit {
        EncodedSplit {
            src: encode_all(&self.src, &dict.src),
            tgt: encode_all(&self.tgt, &dict.tgt),
        }
    }
}

pub struct Preprocess<S: ArtifactStore = JsonStore> {
    settings: Settings,
    store: S,
}

impl Preprocess<JsonStore> {
    pub fn new(settings: Settings) -> Self {
        Self::with_store(settings, JsonStore)
    }
}

impl<S: ArtifactStore> Preprocess<S> {
    pub fn with_store(settings: Settings, store: S) -> Self {
        debug!("preprocess settings: {:#?}", settings);
        Self { settings, store }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Read and align the `name` split located at `path`.
    pub fn read_split(&self, name: &str, path: &Path) -> Result<(WordSplit, SplitStats), Error> {
        info!("Reading {} instances from {:?}", name, path);
        let discussions = load_corpus(path)?;
        let (src, tgt, read_report) = read_instances(
            &discussions,
            self.settings.max_word_seq_len,
            self.settings.keep_case,
        );
        let (src, tgt, split_report) = align(name, src, tgt)?;
        let stats = SplitStats {
            read: read_report,
            align: split_report,
        };
        Ok((WordSplit { src, tgt }, stats))
    }

    /// Get source and target vocabularies, building them from `train` if no pre-defined one is set.
    pub fn dictionary(&self, train: &WordSplit) -> Result<(Dictionary, VocabStats), Error> {
        let min_word_count = self.settings.min_word_count;
        let built = match self.settings.vocab_source() {
            VocabSource::Predefined(path) => {
                let dict = self.store.load_dictionary(path)?;
                info!("Pre-defined vocabulary found in {:?}", path);
                (dict, VocabStats::Predefined)
            }
            VocabSource::Shared => {
                info!("Build shared vocabulary for source and target");
                let (vocab, report) =
                    build_vocabulary(train.src.iter().chain(train.tgt.iter()), min_word_count);
                (Dictionary::shared(vocab), VocabStats::Shared(report))
            }
            VocabSource::Separate => {
                info!("Build vocabulary for source");
                let (src, src_report) = build_vocabulary(&train.src, min_word_count);
                info!("Build vocabulary for target");
                let (tgt, tgt_report) = build_vocabulary(&train.tgt, min_word_count);
                (
                    Dictionary::new(src, tgt),
                    VocabStats::Separate {
                        src: src_report,
                        tgt: tgt_report,
                    },
                )
            }
        };

        Ok(built)
    }

    /// Run the pipeline, returning the saved dataset along with the run reports.
    pub fn run_with_report(&self) -> Result<(Dataset, Report), Error> {
        info!("preprocess v{}", <Self as Pipeline<Dataset>>::version());

        let (train, train_stats) = self.read_split("train", &self.settings.train)?;
        let (valid, valid_stats) = self.read_split("valid", &self.settings.valid)?;

        let (dict, vocab_stats) = self.dictionary(&train)?;

        info!("Convert word instances into sequences of word index");
        let dataset = Dataset {
            settings: self.settings.clone(),
            train: train.encode(&dict),
            valid: valid.encode(&dict),
            dict,
        };

        self.store.save(&dataset, &self.settings.save_data)?;

        let report = Report {
            train: train_stats,
            valid: valid_stats,
            vocab: vocab_stats,
        };
        report.log();
        info!("Finished");
        Ok((dataset, report))
    }
}

impl<S: ArtifactStore> Pipeline<Dataset> for Preprocess<S> {
    fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn run(&self) -> Result<Dataset, Error> {
        self.run_with_report().map(|(dataset, _)| dataset)
    }
}
