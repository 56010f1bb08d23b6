//! Sequence Random - 确定性随机源
//!
//! 按固定序列循环返回下标，用于断言覆盖率和边界行为

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::RandomSource;

/// 循环回放固定序列的随机源
///
/// 返回值对 `len` 取模，序列为空时总是返回 0
#[derive(Debug, Default)]
pub struct SequenceRandom {
    sequence: Vec<usize>,
    cursor: AtomicUsize,
}

impl SequenceRandom {
    pub fn new(sequence: Vec<usize>) -> Self {
        Self {
            sequence,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn pick(&self, len: usize) -> usize {
        if len == 0 || self.sequence.is_empty() {
            return 0;
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.sequence.len();
        self.sequence[index] % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_sequence_cyclically() {
        let random = SequenceRandom::new(vec![2, 0, 1]);
        let picks: Vec<usize> = (0..6).map(|_| random.pick(3)).collect();
        assert_eq!(picks, vec![2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_wraps_by_len() {
        let random = SequenceRandom::new(vec![5]);
        assert_eq!(random.pick(4), 1);
        assert_eq!(random.pick(0), 0);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(SequenceRandom::default().pick(10), 0);
    }
}
