//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod random;
pub mod storage;

pub use random::*;
pub use storage::*;
