/*! Encoded dataset

The artifact produced by a preprocessing run and consumed by the trainer:

```json
{
    "settings": {...},
    "dict": {"src": {"<s>": 2, ...}, "tgt": {...}},
    "train": {"src": [[2, 10, 3], ...], "tgt": [...]},
    "valid": {"src": [...], "tgt": [...]}
}
```
!*/
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::vocab::{Id, Vocabulary};

/// Source and target vocabularies.
///
/// When vocabularies are shared, both fields point to the same [Vocabulary].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    pub src: Rc<Vocabulary>,
    pub tgt: Rc<Vocabulary>,
}

impl Dictionary {
    pub fn new(src: Vocabulary, tgt: Vocabulary) -> Self {
        Self {
            src: Rc::new(src),
            tgt: Rc::new(tgt),
        }
    }

    /// Use a single vocabulary for both channels.
    pub fn shared(vocab: Vocabulary) -> Self {
        let vocab = Rc::new(vocab);
        Self {
            src: Rc::clone(&vocab),
            tgt: vocab,
        }
    }

    /// `true` if source and target use the same vocabulary instance.
    pub fn is_shared(&self) -> bool {
        Rc::ptr_eq(&self.src, &self.tgt)
    }
}

/// Aligned source and target id instances: `src[i]` and `tgt[i]` come from the same post pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedSplit {
    pub src: Vec<Vec<Id>>,
    pub tgt: Vec<Vec<Id>>,
}

impl EncodedSplit {
    pub fn len(&self) -> usize {
        self.src.len()
    }

    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub settings: Settings,
    pub dict: Dictionary,
    pub train: EncodedSplit,
    pub valid: EncodedSplit,
}
