//! 聊天组件
//! 持有不可变规则表，负责输入裁剪、建议词条展开与应答生成

use rand::Rng;

use crate::chat::{ResponseSelector, RuleTable, RuleTableLoader};
use crate::config::GlobalConfig;

/// 聊天组件
pub struct ChatWidget {
    table: RuleTable,
}

impl ChatWidget {
    /// 从已加载的规则表创建
    pub fn new(table: RuleTable) -> Self {
        Self { table }
    }

    /// 按配置加载规则表创建；加载失败降级为内置兜底表
    pub async fn from_config(config: &GlobalConfig) -> Self {
        let table = RuleTableLoader::load_or_default(&config.rule_table_path).await;
        Self::new(table)
    }

    /// 生成应答；空输入（含纯空白）不产生应答
    pub fn reply<R: Rng>(&self, input: &str, rng: &mut R) -> Option<String> {
        let message = input.trim();
        if message.is_empty() {
            return None;
        }

        Some(ResponseSelector::select(message, &self.table, rng))
    }

    /// 展开建议词条为完整问题，未知词条原样返回
    pub fn chip_query(chip: &str) -> &str {
        match chip {
            "publications" => "What are Zhibo's publications?",
            "research" => "What are Zhibo's research interests?",
            "contact" => "How can I contact Zhibo?",
            other => other,
        }
    }
}
