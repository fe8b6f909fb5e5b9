//! 通用工具模块
pub mod number_format;

// 导出核心接口
pub use self::number_format::NumberFormatter;
