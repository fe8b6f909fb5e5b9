//! 聊天应答模块：负责规则表的加载、校验、数据模型定义与应答选择
pub mod model;
pub mod loader;
pub mod selector;

// 导出核心接口
pub use self::model::{ChatRule, RuleTable, FALLBACK_KEY};
pub use self::loader::RuleTableLoader;
pub use self::selector::{ResponseSelector, BUILTIN_FALLBACK_RESPONSE};
