//! 应答规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化

use serde::{Deserialize, Serialize};

/// 保留的兜底分类键名（不参与正常匹配）
pub const FALLBACK_KEY: &str = "fallback";

/// 单个应答分类规则
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRule {
    /// 触发模式（小写子串；兜底分类无模式）
    #[serde(default)]
    pub patterns: Vec<String>,
    /// 候选应答列表
    #[serde(default)]
    pub responses: Vec<String>,
}

/// 应答规则表
/// 分类按文档顺序保存，匹配优先级以该顺序为准；兜底分类单独存放
/// 启动时加载一次，此后不可变
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    categories: Vec<(String, ChatRule)>,
    fallback: Option<ChatRule>,
}

impl RuleTable {
    /// 从已校验的分类列表构建规则表
    pub fn new(categories: Vec<(String, ChatRule)>, fallback: Option<ChatRule>) -> Self {
        Self { categories, fallback }
    }

    /// 按文档顺序遍历分类（不含兜底分类）
    pub fn categories(&self) -> impl Iterator<Item = (&str, &ChatRule)> {
        self.categories.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// 兜底分类
    pub fn fallback(&self) -> Option<&ChatRule> {
        self.fallback.as_ref()
    }

    /// 分类数量（不含兜底分类）
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
