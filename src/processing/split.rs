/*! Pair alignment

Source and target instances of a split are kept in lockstep:

1. if channels do not hold the same number of instances, both are truncated to the shortest one,
2. pairs where either side is absent are removed.

A split that ends up without any pair is an error.
!*/
use log::{info, warn};

use crate::error::Error;

use super::WordInstance;

/// What [align] had to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitReport {
    /// `(src, tgt)` instance counts, when they differ.
    pub mismatch: Option<(usize, usize)>,
    /// number of pairs removed because of an empty side.
    pub dropped: usize,
}

/// Align source and target instances of the `name` split.
pub fn align(
    name: &str,
    mut src: Vec<Option<WordInstance>>,
    mut tgt: Vec<Option<WordInstance>>,
) -> Result<(Vec<WordInstance>, Vec<WordInstance>, SplitReport), Error> {
    let mut report = SplitReport::default();

    if src.len() != tgt.len() {
        warn!(
            "The {} instance count is not equal ({} source, {} target)",
            name,
            src.len(),
            tgt.len()
        );
        report.mismatch = Some((src.len(), tgt.len()));
        let min_inst_count = src.len().min(tgt.len());
        src.truncate(min_inst_count);
        tgt.truncate(min_inst_count);
    }

    let total = src.len();
    let (src, tgt): (Vec<WordInstance>, Vec<WordInstance>) = src
        .into_iter()
        .zip(tgt)
        .filter_map(|pair| match pair {
            (Some(s), Some(t)) => Some((s, t)),
            _ => None,
        })
        .unzip();

    report.dropped = total - src.len();
    if report.dropped > 0 {
        warn!("Removed {} {} pairs with an empty side", report.dropped, name);
    }

    if src.is_empty() {
        return Err(Error::EmptySplit(name.to_string()));
    }
    info!("{} {} pairs", src.len(), name);

    Ok((src, tgt, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inst(word: &str) -> Option<WordInstance> {
        Some(vec!["<s>".to_string(), word.to_string(), "</s>".to_string()])
    }

    #[test]
    fn untouched() {
        let (src, tgt, report) =
            align("train", vec![inst("a"), inst("b")], vec![inst("c"), inst("d")]).unwrap();
        assert_eq!(src.len(), 2);
        assert_eq!(tgt[1][1], "d");
        assert_eq!(report, SplitReport::default());
    }

    #[test]
    fn mismatch_truncates() {
        let src: Vec<_> = ["a", "b", "c", "d", "e"].iter().map(|w| inst(w)).collect();
        let tgt: Vec<_> = ["f", "g", "h", "i"].iter().map(|w| inst(w)).collect();

        let (src, tgt, report) = align("train", src, tgt).unwrap();
        assert_eq!(src.len(), 4);
        assert_eq!(tgt.len(), 4);
        assert_eq!(src[3][1], "d");
        assert_eq!(report.mismatch, Some((5, 4)));
    }

    #[test]
    fn empty_side_drops_pair() {
        let src = vec![inst("a"), inst("b"), None];
        let tgt = vec![None, inst("c"), inst("d")];

        let (src, tgt, report) = align("valid", src, tgt).unwrap();
        assert_eq!(src, vec![inst("b").unwrap()]);
        assert_eq!(tgt, vec![inst("c").unwrap()]);
        assert_eq!(report.dropped, 2);
    }

    #[test]
    fn everything_dropped() {
        let res = align("valid", vec![inst("a"), None], vec![None, None]);
        assert!(matches!(res, Err(Error::EmptySplit(name)) if name == "valid"));

        let res = align("train", Vec::new(), Vec::new());
        assert!(matches!(res, Err(Error::EmptySplit(_))));
    }
}
