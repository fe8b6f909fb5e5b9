//! 数值源抽象
//! 解析器对外部采集方的唯一契约：产出非负整数，或失败

use async_trait::async_trait;

use crate::error::RsfResult;

/// 异步数值源
/// 实现方负责具体的网络请求与解析；解析器只关心"限时内产出非负整数或失败"，
/// 单源限时由解析器统一施加，实现方无需自带超时
#[async_trait]
pub trait ValueSource: Send + Sync {
    /// 源名称（用于日志输出）
    fn name(&self) -> &str;

    /// 拉取数值
    async fn fetch(&self) -> RsfResult<u64>;
}
