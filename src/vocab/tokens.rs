//! Reserved tokens and their fixed ids.
//!
//! Ids are those expected by the downstream trainer, padding being `0`.
use super::Id;

pub const PAD: Id = 0;
pub const UNK: Id = 1;
pub const BOS: Id = 2;
pub const EOS: Id = 3;

pub const PAD_WORD: &str = "<blank>";
pub const UNK_WORD: &str = "<unk>";
pub const BOS_WORD: &str = "<s>";
pub const EOS_WORD: &str = "</s>";

/// Reserved `(token, id)` pairs, in insertion order.
pub const RESERVED: [(&str, Id); 4] = [
    (BOS_WORD, BOS),
    (EOS_WORD, EOS),
    (PAD_WORD, PAD),
    (UNK_WORD, UNK),
];

/// `true` if `token` is one of the four reserved markers.
pub fn is_reserved(token: &str) -> bool {
    RESERVED.iter().any(|(word, _)| *word == token)
}
