//! Vocabulary type and sequence encoding.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::tokens::{RESERVED, UNK, UNK_WORD};

/// Integer id of a token.
pub type Id = usize;

/// Token to id mapping.
///
/// Serialized as a plain `{token: id}` object, which is also what pre-defined vocabularies are read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    word2idx: HashMap<String, Id>,
}

impl Vocabulary {
    /// Create a vocabulary holding only the reserved tokens.
    pub fn reserved() -> Self {
        let word2idx = RESERVED
            .iter()
            .map(|(word, id)| (word.to_string(), *id))
            .collect();
        Self { word2idx }
    }

    /// Assign the next free id to `token`.
    ///
    /// Ids stay contiguous as long as the vocabulary was created by [Vocabulary::reserved]
    /// and only grown through this method.
    pub(super) fn push(&mut self, token: &str) -> Id {
        let id = self.word2idx.len();
        self.word2idx.insert(token.to_string(), id);
        id
    }

    pub fn get(&self, token: &str) -> Option<Id> {
        self.word2idx.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.word2idx.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.word2idx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word2idx.is_empty()
    }

    /// Iterate over `(token, id)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Id)> {
        self.word2idx.iter().map(|(word, id)| (word.as_str(), *id))
    }

    /// Map each token of `instance` to its id, falling back on [UNK].
    pub fn encode<S: AsRef<str>>(&self, instance: &[S]) -> Vec<Id> {
        instance
            .iter()
            .map(|word| self.get(word.as_ref()).unwrap_or(UNK))
            .collect()
    }

    /// id -> token mapping.
    pub fn inverse(&self) -> HashMap<Id, &str> {
        self.iter().map(|(word, id)| (id, word)).collect()
    }

    /// Map ids back to tokens. Ids that are not in the vocabulary are decoded as [UNK_WORD].
    ///
    /// Builds the inverse mapping on each call, use [Vocabulary::inverse] when decoding in bulk.
    pub fn decode(&self, ids: &[Id]) -> Vec<&str> {
        let idx2word = self.inverse();
        ids.iter()
            .map(|id| idx2word.get(id).copied().unwrap_or(UNK_WORD))
            .collect()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::reserved()
    }
}

impl From<HashMap<String, Id>> for Vocabulary {
    fn from(word2idx: HashMap<String, Id>) -> Self {
        Self { word2idx }
    }
}

/// Encode every instance with `vocab`. Output has the same length and per-instance lengths as `instances`.
pub fn encode_all<S: AsRef<str>>(instances: &[Vec<S>], vocab: &Vocabulary) -> Vec<Vec<Id>> {
    instances.iter().map(|inst| vocab.encode(inst)).collect()
}
