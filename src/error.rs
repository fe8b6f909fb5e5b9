//! 全局错误类型定义

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum RsfolioError {
    // 应答规则表相关错误
    #[error("规则表加载失败：{0}")]
    RuleLoadError(String),
    #[error("规则表解析失败：{0}")]
    RuleParseError(String),

    // 数值源相关错误（均在解析器内部消化，不向组件层传播）
    #[error("数值源超时：{0}")]
    SourceTimeout(String),
    #[error("数值源失败：{0}")]
    SourceFailure(String),

    // 缓存相关错误
    #[error("缓存未命中：{0}")]
    CacheMiss(String),
    #[error("缓存已过期：{0}")]
    CacheStale(String),

    // 本地存储错误
    #[error("本地存储操作失败：{0}")]
    StoreError(String),

    // 网络相关错误
    #[error("网络请求失败：{0}")]
    HttpError(#[from] reqwest::Error),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type RsfResult<T> = Result<T, RsfolioError>;
