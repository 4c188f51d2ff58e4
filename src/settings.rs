//! Run settings.
//!
//! Settings are built from the command line and saved alongside the encoded data,
//! so that the trainer knows how the dataset has been produced.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const DEFAULT_MAX_WORD_SEQ_LEN: usize = 25;
pub const DEFAULT_MIN_WORD_COUNT: usize = 9;

/// Where vocabularies come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabSource<'a> {
    /// reuse the `dict` section of an existing dataset.
    Predefined(&'a Path),
    /// one vocabulary built over both train channels.
    Shared,
    /// one vocabulary per train channel.
    Separate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub train: PathBuf,
    pub valid: PathBuf,
    pub save_data: PathBuf,
    pub max_word_seq_len: usize,
    /// `max_word_seq_len` + `<s>` + `</s>`.
    pub max_token_seq_len: usize,
    pub min_word_count: usize,
    pub keep_case: bool,
    pub share_vocab: bool,
    pub vocab: Option<PathBuf>,
}

impl Settings {
    /// Create settings with default values for every optional parameter.
    pub fn new(train: PathBuf, valid: PathBuf, save_data: PathBuf) -> Self {
        Self {
            train,
            valid,
            save_data,
            max_word_seq_len: DEFAULT_MAX_WORD_SEQ_LEN,
            max_token_seq_len: DEFAULT_MAX_WORD_SEQ_LEN + 2,
            min_word_count: DEFAULT_MIN_WORD_COUNT,
            keep_case: false,
            share_vocab: false,
            vocab: None,
        }
    }

    /// Set the maximum post length, keeping `max_token_seq_len` in sync.
    ///
    /// Fails if there is no room left for `<s>` and `</s>`.
    pub fn with_max_word_seq_len(mut self, max_word_seq_len: usize) -> Result<Self, Error> {
        self.max_token_seq_len = max_word_seq_len.checked_add(2).ok_or_else(|| {
            Error::InvalidSetting(format!(
                "max_word_seq_len {} is too large",
                max_word_seq_len
            ))
        })?;
        self.max_word_seq_len = max_word_seq_len;
        Ok(self)
    }

    pub fn with_min_word_count(mut self, min_word_count: usize) -> Self {
        self.min_word_count = min_word_count;
        self
    }

    pub fn with_keep_case(mut self, keep_case: bool) -> Self {
        self.keep_case = keep_case;
        self
    }

    pub fn with_share_vocab(mut self, share_vocab: bool) -> Self {
        self.share_vocab = share_vocab;
        self
    }

    pub fn with_vocab(mut self, vocab: Option<PathBuf>) -> Self {
        self.vocab = vocab;
        self
    }

    /// A pre-defined vocabulary takes precedence over vocabulary sharing.
    pub fn vocab_source(&self) -> VocabSource<'_> {
        match (&self.vocab, self.share_vocab) {
            (Some(path), _) => VocabSource::Predefined(path),
            (None, true) => VocabSource::Shared,
            (None, false) => VocabSource::Separate,
        }
    }
}
