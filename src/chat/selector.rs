//! 应答选择器核心
//! 对用户输入做纯子串匹配，按分类文档顺序取首个命中分类的随机应答

use rand::Rng;
use tracing::debug;

use super::model::RuleTable;

/// 兜底分类缺失或为空时的内置应答
pub const BUILTIN_FALLBACK_RESPONSE: &str =
    "I'm not sure about that. Try asking about Zhibo's research, publications, or education!";

/// 应答选择器
/// 纯函数：无副作用，随机源由调用方注入（便于测试固定种子）
pub struct ResponseSelector;

impl ResponseSelector {
    /// 为输入选择一条应答
    ///
    /// 匹配语义：
    /// 1. 输入统一小写后，按分类文档顺序逐一检查
    /// 2. 任一模式作为子串出现即命中该分类（无分词、无词边界）
    /// 3. 首个命中分类胜出，从其responses中等概率抽取一条
    /// 4. 全部未命中时走兜底分类；兜底缺失或为空则返回内置应答
    pub fn select<R: Rng>(input: &str, table: &RuleTable, rng: &mut R) -> String {
        let lowered = input.to_lowercase();

        for (name, rule) in table.categories() {
            // 应答为空的分类视为未命中（正常加载路径下不会出现，手工构表时兜住）
            if rule.responses.is_empty() {
                continue;
            }

            let matched = rule
                .patterns
                .iter()
                .any(|pattern| lowered.contains(&pattern.to_lowercase()));

            if matched {
                debug!("分类命中：{}", name);
                return Self::draw(&rule.responses, rng).to_string();
            }
        }

        match table.fallback() {
            Some(fallback) if !fallback.responses.is_empty() => {
                Self::draw(&fallback.responses, rng).to_string()
            }
            _ => BUILTIN_FALLBACK_RESPONSE.to_string(),
        }
    }

    /// 从应答列表中等概率抽取一条
    fn draw<'a, R: Rng>(responses: &'a [String], rng: &mut R) -> &'a str {
        let index = rng.gen_range(0..responses.len());
        &responses[index]
    }
}
