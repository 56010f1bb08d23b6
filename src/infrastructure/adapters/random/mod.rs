//! Random Adapter - RandomSource 实现

mod sequence_random;
mod thread_random;

pub use sequence_random::SequenceRandom;
pub use thread_random::ThreadRandom;
