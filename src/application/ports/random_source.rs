//! Random Source Port - 随机选择抽象
//!
//! 随机性作为可替换依赖注入，测试中可换成确定性序列

/// Random Source Port
///
/// 唯一能力："从 N 个中选一个"
pub trait RandomSource: Send + Sync {
    /// 返回 `0..len` 内的下标
    ///
    /// `len` 为 0 时返回 0，调用方负责保证集合非空
    fn pick(&self, len: usize) -> usize;
}

/// 从切片中随机选出一个元素
pub fn choose<'a, T>(random: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(random.pick(items.len()))
}
