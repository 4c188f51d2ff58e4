//! Word instance reading.
//!
//! Posts of every discussion are flattened channel by channel into one global index space:
//! the `i`-th source instance and the `i`-th target instance form a pair.
use log::{debug, info, warn};

use crate::io::corpus::{Discussion, Post};
use crate::vocab::tokens::{BOS_WORD, EOS_WORD};

/// A bounded, `<s>`/`</s>` wrapped post.
pub type WordInstance = Vec<String>;

/// Counts reported by [read_instances].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadReport {
    pub src_instances: usize,
    pub tgt_instances: usize,
    /// posts (of both channels) that were longer than the maximum length.
    pub trimmed: usize,
}

/// Build the word instance of a single post.
///
/// Returns `None` if the post is empty after truncation, and whether the post has been truncated.
pub fn word_instance(post: &Post, max_len: usize, keep_case: bool) -> (Option<WordInstance>, bool) {
    let trimmed = post.len() > max_len;
    let words = &post[..post.len().min(max_len)];

    if words.is_empty() {
        return (None, trimmed);
    }

    let mut inst = Vec::with_capacity(words.len() + 2);
    inst.push(BOS_WORD.to_string());
    if keep_case {
        inst.extend(words.iter().cloned());
    } else {
        inst.extend(words.iter().map(|w| w.to_lowercase()));
    }
    inst.push(EOS_WORD.to_string());

    (Some(inst), trimmed)
}

/// Read source and target word instances of a corpus.
///
/// Empty posts (or posts truncated to nothing when `max_len` is `0`) are kept as `None`
/// so that the pair they belong to can be removed later on, see [super::align].
pub fn read_instances(
    discussions: &[Discussion],
    max_len: usize,
    keep_case: bool,
) -> (
    Vec<Option<WordInstance>>,
    Vec<Option<WordInstance>>,
    ReadReport,
) {
    let mut src = Vec::new();
    let mut tgt = Vec::new();
    let mut trimmed = 0;

    for (idx, discussion) in discussions.iter().enumerate() {
        if discussion.src.len() != discussion.tgt.len() {
            debug!(
                "discussion {}: {} source posts for {} target posts",
                idx,
                discussion.src.len(),
                discussion.tgt.len()
            );
        }

        for (posts, insts) in [(&discussion.src, &mut src), (&discussion.tgt, &mut tgt)] {
            for post in posts {
                let (inst, was_trimmed) = word_instance(post, max_len, keep_case);
                if was_trimmed {
                    trimmed += 1;
                }
                insts.push(inst);
            }
        }
    }

    let report = ReadReport {
        src_instances: src.len(),
        tgt_instances: tgt.len(),
        trimmed,
    };

    info!("Got {} instances", report.src_instances);
    if report.trimmed > 0 {
        warn!(
            "{} instances are trimmed to the max post length {}",
            report.trimmed, max_len
        );
    }

    (src, tgt, report)
}
