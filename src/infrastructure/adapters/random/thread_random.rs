//! Thread Random - 基于 `rand` 线程本地生成器的均匀选择

use rand::Rng;

use crate::application::ports::RandomSource;

/// 线程本地随机源
///
/// 每次调用取当前线程的生成器，无共享状态
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}
