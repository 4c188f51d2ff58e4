//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use seqprep::error::Error;
use seqprep::settings::Settings;

#[derive(Debug, StructOpt)]
#[structopt(name = "seqprep", about = "seq2seq training data preprocessing.")]
/// Preprocessing parameters.
///
/// ```sh
/// USAGE:
///     seqprep [FLAGS] [OPTIONS] --save_data <save-data> --train <train> --valid <valid>
///
/// FLAGS:
///     -h, --help           Prints help information
///         --keep_case      do not lowercase tokens
///         --share_vocab    use a single vocabulary for source and target
///     -V, --version        Prints version information
/// ```
pub struct Preprocess {
    #[structopt(long = "train", parse(from_os_str), help = "train corpus location")]
    pub train: PathBuf,
    #[structopt(long = "valid", parse(from_os_str), help = "validation corpus location")]
    pub valid: PathBuf,
    #[structopt(long = "save_data", parse(from_os_str), help = "dataset destination")]
    pub save_data: PathBuf,
    #[structopt(
        short = "l",
        long = "max_word_seq_len",
        help = "maximum number of words in a post",
        default_value = "25"
    )]
    pub max_word_seq_len: usize,
    #[structopt(
        long = "min_word_count",
        help = "words occurring this many times or less are left out of vocabularies",
        default_value = "9"
    )]
    pub min_word_count: usize,
    #[structopt(long = "keep_case", help = "do not lowercase tokens")]
    pub keep_case: bool,
    #[structopt(
        long = "share_vocab",
        help = "use a single vocabulary for source and target"
    )]
    pub share_vocab: bool,
    #[structopt(
        long = "vocab",
        parse(from_os_str),
        help = "reuse the vocabularies of a previously generated dataset"
    )]
    pub vocab: Option<PathBuf>,
}

impl TryFrom<Preprocess> for Settings {
    type Error = Error;

    fn try_from(p: Preprocess) -> Result<Settings, Error> {
        Ok(Settings::new(p.train, p.valid, p.save_data)
            .with_max_word_seq_len(p.max_word_seq_len)?
            .with_min_word_count(p.min_word_count)
            .with_keep_case(p.keep_case)
            .with_share_vocab(p.share_vocab)
            .with_vocab(p.vocab))
    }
}
