//! 应答规则表加载管理器
//! 负责解析页面内嵌的JSON规则表，并在加载期完成全部校验

use std::path::Path;
use serde_json::Value;
use tracing::{debug, warn};

use super::model::{ChatRule, RuleTable, FALLBACK_KEY};
use crate::error::{RsfResult, RsfolioError};

/// 规则表加载失败时的降级应答（与页面内嵌数据缺失时的行为一致）
const DEGRADED_RESPONSE: &str =
    "I'm having trouble loading my knowledge base. Please try refreshing the page!";

/// 应答规则表加载管理器
pub struct RuleTableLoader;

impl RuleTableLoader {
    /// 从JSON文本解析规则表
    ///
    /// 校验规则（违反即返回RuleParseError，宁可加载失败也不带病匹配）：
    /// 1. 顶层必须是对象，分类顺序以文档顺序为准
    /// 2. 非兜底分类必须有非空patterns，且不含空白模式（空模式会匹配一切输入）
    /// 3. 任何分类（含兜底）的responses必须非空
    pub fn parse(json: &str) -> RsfResult<RuleTable> {
        let root: Value = serde_json::from_str(json)?;
        let Value::Object(entries) = root else {
            return Err(RsfolioError::RuleParseError("顶层必须是分类对象".to_string()));
        };

        let mut categories = Vec::new();
        let mut fallback = None;

        // preserve_order特性保证此处迭代即文档顺序
        for (name, raw_rule) in entries {
            let mut rule: ChatRule = serde_json::from_value(raw_rule).map_err(|e| {
                RsfolioError::RuleParseError(format!("分类 [{}] 结构无效：{}", name, e))
            })?;

            if rule.responses.is_empty() {
                return Err(RsfolioError::RuleParseError(format!(
                    "分类 [{}] 的responses为空",
                    name
                )));
            }

            if name == FALLBACK_KEY {
                fallback = Some(rule);
                continue;
            }

            if rule.patterns.is_empty() {
                return Err(RsfolioError::RuleParseError(format!(
                    "分类 [{}] 缺少patterns",
                    name
                )));
            }
            if rule.patterns.iter().any(|p| p.trim().is_empty()) {
                return Err(RsfolioError::RuleParseError(format!(
                    "分类 [{}] 含空白模式",
                    name
                )));
            }

            // 模式统一小写，匹配期只做纯子串包含
            for pattern in &mut rule.patterns {
                *pattern = pattern.to_lowercase();
            }

            categories.push((name, rule));
        }

        if fallback.is_none() {
            warn!("规则表未定义兜底分类，未命中时将使用内置应答");
        }

        let table = RuleTable::new(categories, fallback);
        debug!("规则表解析成功，分类数：{}", table.len());
        Ok(table)
    }

    /// 从文件加载规则表
    pub async fn load(path: &Path) -> RsfResult<RuleTable> {
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            RsfolioError::RuleLoadError(format!("读取 {} 失败：{}", path.display(), e))
        })?;
        Self::parse(&json)
    }

    /// 加载规则表，失败时降级为仅含兜底分类的内置规则表
    pub async fn load_or_default(path: &Path) -> RuleTable {
        match Self::load(path).await {
            Ok(table) => table,
            Err(e) => {
                warn!("规则表加载失败，降级为内置兜底表：{}", e);
                Self::degraded_table()
            }
        }
    }

    /// 内置降级规则表（无分类，仅兜底应答）
    pub fn degraded_table() -> RuleTable {
        let fallback = ChatRule {
            patterns: Vec::new(),
            responses: vec![DEGRADED_RESPONSE.to_string()],
        };
        RuleTable::new(Vec::new(), Some(fallback))
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    const VALID_TABLE: &str = r#"{
        "research": {
            "patterns": ["Research", "interests"],
            "responses": ["Zhibo works on distributed systems."]
        },
        "publications": {
            "patterns": ["publication", "paper"],
            "responses": ["See the publications section.", "Three papers so far."]
        },
        "fallback": {
            "responses": ["Try asking about research or publications!"]
        }
    }"#;

    #[test]
    fn test_parse_preserves_document_order() {
        // 测试场景：分类顺序必须与文档顺序一致（顺序即匹配优先级）
        let table = RuleTableLoader::parse(VALID_TABLE).unwrap();
        let names: Vec<&str> = table.categories().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["research", "publications"]);
        assert!(table.fallback().is_some());
    }

    #[test]
    fn test_parse_lowercases_patterns() {
        // 测试场景：模式在加载期统一小写
        let table = RuleTableLoader::parse(VALID_TABLE).unwrap();
        let (_, rule) = table.categories().next().unwrap();
        assert_eq!(rule.patterns, vec!["research", "interests"]);
    }

    #[test]
    fn test_parse_rejects_empty_pattern() {
        // 测试场景：空白模式会匹配一切输入，必须在加载期拒绝
        let json = r#"{"bad": {"patterns": [""], "responses": ["x"]}}"#;
        let err = RuleTableLoader::parse(json).unwrap_err();
        assert!(matches!(err, RsfolioError::RuleParseError(_)));
    }

    #[test]
    fn test_parse_rejects_missing_patterns() {
        // 测试场景：非兜底分类缺少patterns应拒绝
        let json = r#"{"bad": {"responses": ["x"]}}"#;
        let err = RuleTableLoader::parse(json).unwrap_err();
        assert!(matches!(err, RsfolioError::RuleParseError(_)));
    }

    #[test]
    fn test_parse_rejects_empty_responses() {
        // 测试场景：responses为空的分类应拒绝（兜底分类同样适用）
        let json = r#"{"fallback": {"responses": []}}"#;
        let err = RuleTableLoader::parse(json).unwrap_err();
        assert!(matches!(err, RsfolioError::RuleParseError(_)));
    }

    #[test]
    fn test_parse_without_fallback_is_allowed() {
        // 测试场景：允许缺省兜底分类，未命中时由选择器使用内置应答
        let json = r#"{"contact": {"patterns": ["email"], "responses": ["See the contact page."]}}"#;
        let table = RuleTableLoader::parse(json).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.fallback().is_none());
    }

    #[tokio::test]
    async fn test_load_or_default_degrades() {
        // 测试场景：文件缺失时降级为内置兜底表而非报错
        let table = RuleTableLoader::load_or_default(Path::new("/nonexistent/chat.json")).await;
        assert!(table.is_empty());
        assert_eq!(table.fallback().unwrap().responses.len(), 1);
    }
}
