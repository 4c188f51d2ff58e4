/*! Vocabulary

Token to id mapping of a channel (`src` or `tgt`).

A [Vocabulary] always starts with the four reserved tokens declared in [tokens],
followed by corpus tokens that occur more than a minimum number of times (see [build_vocabulary]).

Encoding (token -> id) never fails: out of vocabulary tokens are mapped to [tokens::UNK].
!*/
mod builder;
pub mod tokens;
mod vocabulary;

pub use builder::{build_vocabulary, VocabReport};
pub use vocabulary::{encode_all, Id, Vocabulary};
