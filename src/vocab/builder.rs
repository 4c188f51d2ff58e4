//! Frequency based vocabulary building.
use std::cmp::Reverse;

use itertools::Itertools;
use log::info;

use super::{tokens, Vocabulary};

/// Sizes reported by [build_vocabulary].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VocabReport {
    /// number of distinct tokens seen in the instances.
    pub original_size: usize,
    /// size of the resulting vocabulary, reserved tokens included.
    pub trimmed_size: usize,
    /// number of distinct tokens that did not make the cut.
    pub ignored: usize,
}

/// Build a [Vocabulary] from word instances.
///
/// A non-reserved token gets an id only if it occurs strictly more than `min_word_count` times
/// across all instances. Reserved tokens always hold ids `0..4`, whatever their counts are.
///
/// Surviving tokens are numbered by decreasing count, ties being broken by lexicographic order.
pub fn build_vocabulary<'a, I, S>(instances: I, min_word_count: usize) -> (Vocabulary, VocabReport)
where
    I: IntoIterator<Item = &'a Vec<S>>,
    S: AsRef<str> + 'a,
{
    let counts = instances
        .into_iter()
        .flatten()
        .map(|word| word.as_ref())
        .counts();

    let original_size = counts.len();
    info!("Original vocabulary size = {}", original_size);

    let mut vocab = Vocabulary::reserved();
    let mut ignored = 0;

    let candidates = counts
        .into_iter()
        .filter(|(word, _)| !tokens::is_reserved(word))
        .sorted_unstable_by_key(|(word, count)| (Reverse(*count), *word));

    for (word, count) in candidates {
        if count > min_word_count {
            vocab.push(word);
        } else {
            ignored += 1;
        }
    }

    let report = VocabReport {
        original_size,
        trimmed_size: vocab.len(),
        ignored,
    };
    info!(
        "Trimmed vocabulary size = {}, each with minimum occurrence = {}",
        report.trimmed_size, min_word_count
    );
    info!("Ignored word count = {}", report.ignored);

    (vocab, report)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::vocab::tokens::{BOS, BOS_WORD, EOS, EOS_WORD, PAD, PAD_WORD, UNK, UNK_WORD};
    use crate::vocab::Id;

    fn inst(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn corpus() -> Vec<Vec<String>> {
        vec![
            inst(&["<s>", "a", "b", "a", "</s>"]),
            inst(&["<s>", "a", "c", "</s>"]),
            inst(&["<s>", "b", "d", "</s>"]),
        ]
    }

    #[test]
    fn reserved_always_present() {
        let (v, _) = build_vocabulary(&corpus(), 1000);
        assert_eq!(v.len(), 4);
        assert_eq!(v.get(BOS_WORD), Some(BOS));
        assert_eq!(v.get(EOS_WORD), Some(EOS));
        assert_eq!(v.get(PAD_WORD), Some(PAD));
        assert_eq!(v.get(UNK_WORD), Some(UNK));
    }

    #[test]
    fn threshold_is_strict() {
        // counts: a=3, b=2, c=1, d=1
        let (v, report) = build_vocabulary(&corpus(), 2);
        assert!(v.contains("a"));
        assert!(!v.contains("b"));
        assert!(!v.contains("c"));
        assert!(!v.contains("d"));
        assert_eq!(report.ignored, 3);
        assert_eq!(report.trimmed_size, 5);
    }

    #[test]
    fn zero_threshold_keeps_everything() {
        let (v, report) = build_vocabulary(&corpus(), 0);
        for w in ["a", "b", "c", "d"] {
            assert!(v.contains(w));
        }
        assert_eq!(report.ignored, 0);
        // a, b, c, d, <s>, </s>
        assert_eq!(report.original_size, 6);
        assert_eq!(report.trimmed_size, 8);
    }

    #[test]
    fn ids_are_contiguous() {
        let (v, _) = build_vocabulary(&corpus(), 0);
        let ids: HashSet<Id> = v.iter().map(|(_, id)| id).collect();
        let expected: HashSet<Id> = (0..v.len()).collect();
        assert_eq!(ids, expected);
        for (word, id) in v.iter() {
            if !tokens::is_reserved(word) {
                assert!(id >= 4);
            }
        }
    }

    #[test]
    fn reserved_literal_is_not_duplicated() {
        let insts = vec![inst(&["<unk>", "<unk>", "x", "x"])];
        let (v, report) = build_vocabulary(&insts, 1);
        assert_eq!(v.get(UNK_WORD), Some(UNK));
        assert_eq!(v.len(), 5);
        assert_eq!(report.ignored, 0);
    }

    #[test]
    fn empty_input() {
        let insts: Vec<Vec<String>> = Vec::new();
        let (v, report) = build_vocabulary(&insts, 0);
        assert_eq!(v, Vocabulary::reserved());
        assert_eq!(report.original_size, 0);
    }
}
