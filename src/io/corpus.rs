/*! Raw corpus reading

A corpus is a JSON array of discussions:

```json
[
    {"src": [["hi", "there"], ["how", "are", "you"]], "tgt": [["hello"], ["fine"]]}
]
```

Posts are already tokenized: a post is a list of tokens.
!*/
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A post is a tokenized sentence.
pub type Post = Vec<String>;

/// A discussion, holding source and target posts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discussion {
    pub src: Vec<Post>,
    pub tgt: Vec<Post>,
}

impl Discussion {
    pub fn new(src: Vec<Post>, tgt: Vec<Post>) -> Self {
        Self { src, tgt }
    }
}

/// Load a whole corpus in memory.
pub fn load_corpus(path: &Path) -> Result<Vec<Discussion>, Error> {
    let reader = super::open(path)?;
    let discussions: Vec<Discussion> = serde_json::from_reader(reader)?;
    info!("Loaded {} discussions from {:?}", discussions.len(), path);
    Ok(discussions)
}
