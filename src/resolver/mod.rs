//! 多级数值解析模块：数值源抽象、指标缓存与解析器核心
pub mod source;
pub mod cache;
pub mod tiered;

// 导出核心接口
pub use self::source::ValueSource;
pub use self::cache::{CacheEntry, MetricCache};
pub use self::tiered::{ResolvedValue, TieredValueResolver, ValueOrigin};
